//! Wire DTOs for the restaurants REST backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON bodies. Nested collections default
//! to empty so list and detail responses share one `Restaurant` type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A pizza from the backend catalogue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: u64,
    pub name: String,
    /// Comma-separated ingredient list as entered by the backend.
    #[serde(default)]
    pub ingredients: String,
}

/// A pizza offered by a restaurant at a price.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantPizza {
    pub id: u64,
    pub price: u32,
    pub pizza_id: u64,
    pub restaurant_id: u64,
    /// Present when the backend expands the relation.
    #[serde(default)]
    pub pizza: Option<Pizza>,
}

/// A restaurant. `restaurant_pizzas` is only populated by the detail endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub restaurant_pizzas: Vec<RestaurantPizza>,
}

/// Request body for `POST /restaurant_pizzas`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRestaurantPizza {
    pub price: u32,
    pub pizza_id: u64,
    pub restaurant_id: u64,
}

/// Error payload. The backend uses `{"error": ".."}` for lookups and
/// `{"errors": [..]}` for validation failures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ErrorBody {
    /// Single human-readable message, if the body carried any.
    pub fn message(&self) -> Option<String> {
        match (&self.error, self.errors.is_empty()) {
            (Some(error), _) => Some(error.clone()),
            (None, false) => Some(self.errors.join("; ")),
            (None, true) => None,
        }
    }
}
