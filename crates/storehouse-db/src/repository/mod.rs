//! # Repository Module
//!
//! Typed operations that hide raw statements.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Caller                                                                 │
//! │       │  repo.get_by_name("Coca Cola")                                 │
//! │       ▼                                                                 │
//! │  dyn ProductRepository                                                  │
//! │  ├── get_one(id)        ├── store(product)                             │
//! │  ├── get_all()          ├── update(product)                            │
//! │  ├── get_by_name(name)  └── delete(id)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SqlProductRepository ──► MySQL `products` table                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `get_one` and `delete` report absence as
//! [`DbError::NotFound`](crate::DbError::NotFound); `update` of an unknown id
//! is a successful no-op.

use async_trait::async_trait;
use storehouse_core::Product;
#[cfg(feature = "dynamodb")]
use storehouse_core::User;

use crate::error::DbResult;

pub mod product;

/// CRUD access to stored products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Gets the product with the given id.
    async fn get_one(&self, id: i64) -> DbResult<Product>;

    /// Gets every product, in the store's natural order.
    async fn get_all(&self) -> DbResult<Vec<Product>>;

    /// Gets products whose name equals `name` exactly.
    async fn get_by_name(&self, name: &str) -> DbResult<Vec<Product>>;

    /// Inserts a product and returns it with the store-assigned id.
    async fn store(&self, product: Product) -> DbResult<Product>;

    /// Replaces every field of the product matched by `product.id`.
    /// Matching no row is not an error.
    async fn update(&self, product: Product) -> DbResult<Product>;

    /// Deletes the product with the given id.
    async fn delete(&self, id: i64) -> DbResult<()>;
}

/// Key-value access to stored users.
#[cfg(feature = "dynamodb")]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Writes the user, replacing any item with the same id.
    async fn store(&self, user: &User) -> DbResult<()>;

    /// Gets the user with the given id.
    async fn get_one(&self, id: &str) -> DbResult<User>;
}
