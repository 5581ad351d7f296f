//! # Domain Types
//!
//! ## Identity
//! - `Product.id`: surrogate key assigned by the SQL store on insert.
//!   Zero means "not persisted yet".
//! - `User.id`: caller-chosen string key for the key-value store.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A stocked product.
///
/// ## Lifecycle
/// ```text
/// Product::new(..)        id = 0
///      │
///      ▼  store()
/// persisted               id = store-assigned key
///      │
///      ├── get_one / get_all / get_by_name
///      ├── update   (full replace, matched by id)
///      ▼  delete()
/// gone
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-assigned identifier (0 until persisted).
    pub id: i64,

    /// Display name. Not unique.
    pub name: String,

    /// Free-form category, e.g. "Bebidas".
    pub category: String,

    /// Quantity on hand.
    pub count: i64,

    /// Unit price.
    pub price: f64,
}

impl Product {
    /// Creates a product that has not been stored yet.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        count: i64,
        price: f64,
    ) -> Self {
        Product {
            id: 0,
            name: name.into(),
            category: category.into(),
            count,
            price,
        }
    }

    /// Whether the store has assigned an identifier.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

// =============================================================================
// User
// =============================================================================

/// A user account kept in the key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct User {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub password: String,
    pub email: String,
    pub ip: String,
    pub mac_address: String,
    pub website: String,
    pub image: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
