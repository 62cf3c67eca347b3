//! Admin operations: product submission, restock, and order status.
//!
//! Form values arrive as raw strings and are validated here before anything
//! is written; a validation failure never reaches the store. The capability
//! gate itself lives in [`crate::app`], where the current session is known.

use std::str::FromStr;

use rust_decimal::Decimal;

use leafline_core::{DocumentId, NewProduct, OrderStatus, ProductId};

use crate::collab::DocumentStore;
use crate::error::{Result, ValidationError};

/// Raw values from the add-product form.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub initial_stock: String,
    pub image_url: String,
    pub description: String,
}

/// Validate an add-product form into a store-ready [`NewProduct`].
///
/// # Errors
///
/// - [`ValidationError::InvalidName`] if the name is empty
/// - [`ValidationError::InvalidPrice`] if price is non-numeric or not
///   greater than zero
/// - [`ValidationError::InvalidStock`] if stock is non-numeric or negative
pub fn parse_new_product(form: &ProductForm) -> std::result::Result<NewProduct, ValidationError> {
    if form.name.trim().is_empty() {
        return Err(ValidationError::InvalidName);
    }

    let price = Decimal::from_str(form.price.trim()).map_err(|_| ValidationError::InvalidPrice)?;
    if price <= Decimal::ZERO {
        return Err(ValidationError::InvalidPrice);
    }

    let stock = parse_stock(&form.initial_stock)?;

    Ok(NewProduct {
        name: form.name.clone(),
        price,
        stock,
        image_url: none_if_blank(&form.image_url),
        description: none_if_blank(&form.description),
    })
}

/// Parse a raw stock value: a whole number, zero or greater.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidStock`] for non-numeric or negative
/// input.
pub fn parse_stock(raw: &str) -> std::result::Result<u32, ValidationError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidStock)
}

/// Validate and submit a new product.
pub async fn add_product(store: &impl DocumentStore, form: &ProductForm) -> Result<DocumentId> {
    let product = parse_new_product(form)?;
    let doc_id = store.insert_product(&product).await?;
    tracing::info!(product = %product.name, doc_id = %doc_id, "product added");
    Ok(doc_id)
}

/// Validate a raw stock total and upsert-merge it onto a product.
pub async fn restock(
    store: &impl DocumentStore,
    product_id: &ProductId,
    raw_stock: &str,
) -> Result<u32> {
    let stock = parse_stock(raw_stock)?;
    store.set_stock(product_id, stock).await?;
    tracing::info!(product_id = %product_id, stock, "stock updated");
    Ok(stock)
}

/// Transition an order to a new status.
pub async fn update_order_status(
    store: &impl DocumentStore,
    doc_id: &DocumentId,
    status: OrderStatus,
) -> Result<()> {
    store.set_order_status(doc_id, status).await?;
    tracing::info!(doc_id = %doc_id, %status, "order status updated");
    Ok(())
}

fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(price: &str, stock: &str) -> ProductForm {
        ProductForm {
            name: "Neem Soap".to_owned(),
            price: price.to_owned(),
            initial_stock: stock.to_owned(),
            image_url: String::new(),
            description: "Handmade".to_owned(),
        }
    }

    #[test]
    fn test_parse_new_product() {
        let product = parse_new_product(&form("85.50", "50")).expect("valid");
        assert_eq!(product.price, Decimal::new(8550, 2));
        assert_eq!(product.stock, 50);
        assert_eq!(product.image_url, None);
        assert_eq!(product.description.as_deref(), Some("Handmade"));
    }

    #[test]
    fn test_price_must_be_positive_number() {
        assert_eq!(
            parse_new_product(&form("abc", "5")),
            Err(ValidationError::InvalidPrice)
        );
        assert_eq!(
            parse_new_product(&form("0", "5")),
            Err(ValidationError::InvalidPrice)
        );
        assert_eq!(
            parse_new_product(&form("-3.50", "5")),
            Err(ValidationError::InvalidPrice)
        );
    }

    #[test]
    fn test_stock_must_be_whole_and_non_negative() {
        assert_eq!(parse_stock("0"), Ok(0));
        assert_eq!(parse_stock(" 12 "), Ok(12));
        assert_eq!(parse_stock("-1"), Err(ValidationError::InvalidStock));
        assert_eq!(parse_stock("1.5"), Err(ValidationError::InvalidStock));
        assert_eq!(parse_stock(""), Err(ValidationError::InvalidStock));
    }

    #[test]
    fn test_name_required() {
        let mut f = form("10", "1");
        f.name = "  ".to_owned();
        assert_eq!(parse_new_product(&f), Err(ValidationError::InvalidName));
    }
}
