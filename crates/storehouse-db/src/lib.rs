//! # storehouse-db: Storage Layer for Storehouse
//!
//! Repositories that translate between stored rows/items and the records of
//! `storehouse-core`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     storehouse-db (THIS CRATE)                          │
//! │                                                                         │
//! │   ┌───────────────┐    ┌──────────────────────┐    ┌───────────────┐  │
//! │   │   Database    │    │  Repositories        │    │  ServerConfig │  │
//! │   │   (pool.rs)   │◄───│  SqlProductRepository│    │  (config.rs)  │  │
//! │   │   AnyPool     │    │  DynamoUserRepository│    │  env vars     │  │
//! │   └───────┬───────┘    └──────────┬───────────┘    └───────────────┘  │
//! │           │                       │ (feature = "dynamodb")             │
//! │           ▼                       ▼                                    │
//! │     MySQL `products`        DynamoDB `Users`                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`error`] - Storage error types
//! - [`repository`] - Repository traits and the SQL product repository
//! - [`config`] - Environment configuration for the `server` binary
//! - `dynamo` - DynamoDB user repository (feature `dynamodb`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storehouse_core::Product;
//! use storehouse_db::{Database, DbConfig, ProductRepository};
//!
//! let db = Database::new(DbConfig::new("mysql://root@localhost:3306/storage")).await?;
//! let stored = db.products().store(Product::new("Coca Cola", "Bebidas", 10, 10.0)).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod pool;
pub mod repository;

#[cfg(feature = "dynamodb")]
pub mod dynamo;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, ServerConfig};
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::product::SqlProductRepository;
pub use repository::ProductRepository;

#[cfg(feature = "dynamodb")]
pub use dynamo::DynamoUserRepository;
#[cfg(feature = "dynamodb")]
pub use repository::UserRepository;
