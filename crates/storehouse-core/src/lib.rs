//! # storehouse-core: Domain Records for Storehouse
//!
//! The in-memory shapes that the storage layer reads and writes.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storehouse Data Flow                             │
//! │                                                                         │
//! │  Caller builds Product::new("Coca Cola", "Bebidas", 10, 10.0)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ storehouse-core (THIS CRATE) ★                  │   │
//! │  │       Product (SQL-backed)        User (key-value backed)       │   │
//! │  │                 NO I/O • NO DATABASE • NO NETWORK               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  storehouse-db repositories (MySQL / DynamoDB)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Product, User)

pub mod types;

pub use types::*;
