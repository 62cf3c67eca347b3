//! The cart user journeys, driven end to end through `StoreApp` with the
//! catalog fed by the fake store's snapshot subscription.

use rust_decimal::Decimal;

use leafline_core::ProductId;
use leafline_storefront::app::StoreApp;
use leafline_storefront::config::StoreConfig;
use leafline_storefront::error::{StoreError, ValidationError};

use leafline_integration_tests::{FakeStore, product};

fn test_config() -> StoreConfig {
    StoreConfig {
        business_name: "Hattoky Herbal Care".to_owned(),
        whatsapp_number: "2349150000000".to_owned(),
        currency_symbol: "₦".to_owned(),
        admin_identity: secrecy::SecretString::from("admin-uid"),
        namespace: "test-app".to_owned(),
    }
}

fn app_with_products(products: Vec<leafline_core::Product>) -> StoreApp<FakeStore> {
    let store = FakeStore::new();
    let mut app = StoreApp::new(test_config(), store);
    app.store().seed_products(products);
    app.refresh().expect("products subscription alive");
    app
}

#[test]
fn test_scenario_add_single_item() {
    let mut app = app_with_products(vec![product("p1", 1000, 5)]);

    assert!(app.cart().is_empty());
    app.add_to_cart(&ProductId::new("p1")).expect("in stock");

    assert_eq!(app.cart().len(), 1);
    assert_eq!(app.cart().lines()[0].quantity, 1);
    assert_eq!(app.cart().total(), Decimal::new(1000, 2));
}

#[test]
fn test_scenario_add_same_item_twice() {
    let mut app = app_with_products(vec![product("p1", 1000, 5)]);

    app.add_to_cart(&ProductId::new("p1")).expect("in stock");
    app.add_to_cart(&ProductId::new("p1")).expect("in stock");

    assert_eq!(app.cart().len(), 1);
    assert_eq!(app.cart().lines()[0].quantity, 2);
    assert_eq!(app.cart().total(), Decimal::new(2000, 2));
}

#[test]
fn test_scenario_adjust_to_zero_empties_cart() {
    let mut app = app_with_products(vec![product("p1", 1000, 5)]);

    app.add_to_cart(&ProductId::new("p1")).expect("in stock");
    app.add_to_cart(&ProductId::new("p1")).expect("in stock");
    app.adjust_quantity(&ProductId::new("p1"), -2);

    assert!(app.cart().is_empty());
    assert_eq!(app.cart().total(), Decimal::ZERO);
}

#[test]
fn test_scenario_sold_out_product_leaves_cart_unchanged() {
    let mut app = app_with_products(vec![product("p1", 1000, 5), product("p2", 800, 0)]);

    app.add_to_cart(&ProductId::new("p1")).expect("in stock");
    let err = app.add_to_cart(&ProductId::new("p2")).unwrap_err();

    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::OutOfStock { .. })
    ));
    assert_eq!(app.cart().len(), 1);
    assert_eq!(app.cart().total(), Decimal::new(1000, 2));
}

#[test]
fn test_unknown_product_is_rejected() {
    let mut app = app_with_products(vec![product("p1", 1000, 5)]);

    let err = app.add_to_cart(&ProductId::new("ghost")).unwrap_err();

    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::UnknownProduct { .. })
    ));
    assert!(app.cart().is_empty());
}

#[test]
fn test_catalog_snapshot_replacement_changes_availability() {
    let mut app = app_with_products(vec![product("p1", 1000, 1)]);
    app.add_to_cart(&ProductId::new("p1")).expect("in stock");

    // A later snapshot sells p1 out; further adds are rejected but the
    // existing line stays (no retroactive cart edits)
    app.store().seed_products(vec![product("p1", 1000, 0)]);
    app.refresh().expect("products subscription alive");

    let err = app.add_to_cart(&ProductId::new("p1")).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::OutOfStock { .. })
    ));
    assert_eq!(app.cart().lines()[0].quantity, 1);
}
