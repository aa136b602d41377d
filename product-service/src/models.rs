//! Data models for the product catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Product record as stored and returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a product. `availability` is already defaulted to
/// `true` by the time this is built from a request.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

/// Full replacement of a product's mutable fields.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

/// The partial-update decision, derived once from the request body: an
/// explicit boolean sets availability to that exact value, an absent field
/// flips the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityUpdate {
    Toggle,
    SetTo(bool),
}

impl AvailabilityUpdate {
    pub fn from_field(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Bool(explicit)) => AvailabilityUpdate::SetTo(*explicit),
            _ => AvailabilityUpdate::Toggle,
        }
    }

    pub fn apply(self, current: bool) -> bool {
        match self {
            AvailabilityUpdate::Toggle => !current,
            AvailabilityUpdate::SetTo(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_field_means_toggle() {
        let update = AvailabilityUpdate::from_field(None);
        assert_eq!(update, AvailabilityUpdate::Toggle);
        assert!(!update.apply(true));
        assert!(update.apply(false));
    }

    #[test]
    fn test_explicit_boolean_sets_exact_value() {
        let update = AvailabilityUpdate::from_field(Some(&json!(false)));
        assert_eq!(update, AvailabilityUpdate::SetTo(false));
        // Not a toggle: the prior value is irrelevant.
        assert!(!update.apply(true));
        assert!(!update.apply(false));
    }
}
