//! Status enums for orders.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// Stored in the database as the legacy two-letter codes (`GT`, `PA`,
/// `DE`, `FI`); serialized to JSON as lowercase words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order accepted for processing.
    #[default]
    #[cfg_attr(feature = "postgres", sqlx(rename = "GT"))]
    Accepted,
    /// Being packed by the restaurant.
    #[cfg_attr(feature = "postgres", sqlx(rename = "PA"))]
    Packing,
    /// Handed to a courier.
    #[cfg_attr(feature = "postgres", sqlx(rename = "DE"))]
    Courier,
    /// Delivered and closed.
    #[cfg_attr(feature = "postgres", sqlx(rename = "FI"))]
    Finished,
}

impl OrderStatus {
    /// The two-letter storage code.
    #[must_use]
    pub const fn as_code(self) -> &'static str {
        match self {
            Self::Accepted => "GT",
            Self::Packing => "PA",
            Self::Courier => "DE",
            Self::Finished => "FI",
        }
    }
}

/// Payment method chosen by the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[serde(rename_all = "snake_case")]
pub enum PayMethod {
    /// Cash on delivery.
    #[default]
    #[cfg_attr(feature = "postgres", sqlx(rename = "IC"))]
    Cash,
    /// Card on delivery.
    #[cfg_attr(feature = "postgres", sqlx(rename = "WC"))]
    Card,
}

impl PayMethod {
    /// The two-letter storage code.
    #[must_use]
    pub const fn as_code(self) -> &'static str {
        match self {
            Self::Cash => "IC",
            Self::Card => "WC",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(OrderStatus::default(), OrderStatus::Accepted);
        assert_eq!(PayMethod::default(), PayMethod::Cash);
    }

    #[test]
    fn test_json_representation() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Courier).unwrap(),
            "\"courier\""
        );
        assert_eq!(serde_json::to_string(&PayMethod::Cash).unwrap(), "\"cash\"");
    }

    #[test]
    fn test_storage_codes() {
        assert_eq!(OrderStatus::Finished.as_code(), "FI");
        assert_eq!(PayMethod::Card.as_code(), "WC");
    }
}
