//! Customer contact and delivery details collected at checkout.

use serde::{Deserialize, Serialize};

/// Errors that can occur when validating [`CustomerDetails`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomerDetailsError {
    /// The name field is empty.
    #[error("name is required")]
    MissingName,
    /// The phone field is empty.
    #[error("phone number is required")]
    MissingPhone,
    /// The delivery location field is empty.
    #[error("delivery location is required")]
    MissingLocation,
}

/// Validated customer details for an order.
///
/// Name, phone, and delivery location are required and must be non-empty
/// after trimming; notes are optional free text. No further validation is
/// applied - the values are relayed verbatim to the store and the
/// notification message.
///
/// ## Examples
///
/// ```
/// use leafline_core::CustomerDetails;
///
/// let details = CustomerDetails::new("Ada", "080123", "12 Market Rd", Some("ring twice"));
/// assert!(details.is_ok());
///
/// assert!(CustomerDetails::new("", "080123", "12 Market Rd", None::<&str>).is_err());
/// assert!(CustomerDetails::new("Ada", "  ", "12 Market Rd", None::<&str>).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    name: String,
    phone: String,
    location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl CustomerDetails {
    /// Validate and construct customer details.
    ///
    /// # Errors
    ///
    /// Returns an error if name, phone, or location is empty or whitespace.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        location: impl Into<String>,
        notes: Option<impl Into<String>>,
    ) -> Result<Self, CustomerDetailsError> {
        let name = name.into();
        let phone = phone.into();
        let location = location.into();

        if name.trim().is_empty() {
            return Err(CustomerDetailsError::MissingName);
        }
        if phone.trim().is_empty() {
            return Err(CustomerDetailsError::MissingPhone);
        }
        if location.trim().is_empty() {
            return Err(CustomerDetailsError::MissingLocation);
        }

        Ok(Self {
            name,
            phone,
            location,
            notes: notes.map(Into::into).filter(|n: &String| !n.trim().is_empty()),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        assert_eq!(
            CustomerDetails::new("", "1", "L", None::<String>),
            Err(CustomerDetailsError::MissingName)
        );
        assert_eq!(
            CustomerDetails::new("A", "", "L", None::<String>),
            Err(CustomerDetailsError::MissingPhone)
        );
        assert_eq!(
            CustomerDetails::new("A", "1", " \t", None::<String>),
            Err(CustomerDetailsError::MissingLocation)
        );
    }

    #[test]
    fn test_blank_notes_become_none() {
        let details = CustomerDetails::new("A", "1", "L", Some("  ")).expect("valid");
        assert_eq!(details.notes(), None);

        let details = CustomerDetails::new("A", "1", "L", Some("call me")).expect("valid");
        assert_eq!(details.notes(), Some("call me"));
    }
}
