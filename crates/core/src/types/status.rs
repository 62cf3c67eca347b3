//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a submitted order.
///
/// Stored as `SCREAMING_SNAKE_CASE` strings in the document store, matching
/// what the admin status dropdown writes. Orders start as [`Pending`] and are
/// only ever transitioned by admin action.
///
/// [`Pending`]: OrderStatus::Pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Shipping,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in the order the admin panel offers them.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Paid,
        Self::Shipping,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// The wire representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Shipping => "SHIPPING",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "PAID" => Ok(Self::Paid),
            "SHIPPING" => Ok(Self::Shipping),
            "DELIVERED" => Ok(Self::Delivered),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}
