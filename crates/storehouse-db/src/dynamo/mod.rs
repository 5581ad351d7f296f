//! DynamoDB user storage.
//!
//! Users live in a single table keyed by the string attribute `id`.
//! Enabled with the `dynamodb` feature:
//!
//! ```bash
//! cargo build -p storehouse-db --features dynamodb
//! ```

mod conversions;
mod error;
mod repository;

pub use conversions::{item_to_user, user_to_item};
pub use repository::DynamoUserRepository;
