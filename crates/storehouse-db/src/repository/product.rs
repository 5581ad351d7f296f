//! # Product Repository
//!
//! Database operations for the `products` table.
//!
//! ## Statements
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  get_all      SELECT id, name, category, count, price FROM products     │
//! │  get_one      ... WHERE id = ?                                          │
//! │  get_by_name  ... WHERE name = ?                                        │
//! │  store        INSERT INTO products (name, category, count, price) ...   │
//! │  update       UPDATE products SET name = ?, ... WHERE id = ?            │
//! │  delete       DELETE FROM products WHERE id = ?                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every read lists its columns in the same order as the fields of
//! [`Product`], so rows decode by name and position alike.

use async_trait::async_trait;
use sqlx::AnyPool;
use tracing::debug;

use super::ProductRepository;
use crate::error::{DbError, DbResult};
use storehouse_core::Product;

const ENTITY: &str = "Product";

const QUERY_GET_ALL: &str = "SELECT id, name, category, count, price FROM products";

const QUERY_GET_ONE: &str = "SELECT id, name, category, count, price FROM products WHERE id = ?";

const QUERY_GET_BY_NAME: &str =
    "SELECT id, name, category, count, price FROM products WHERE name = ?";

const QUERY_INSERT: &str = "INSERT INTO products (name, category, count, price) VALUES (?, ?, ?, ?)";

const QUERY_UPDATE: &str =
    "UPDATE products SET name = ?, category = ?, count = ?, price = ? WHERE id = ?";

const QUERY_DELETE: &str = "DELETE FROM products WHERE id = ?";

/// SQL-backed product repository.
///
/// ## Usage
/// ```rust,ignore
/// let repo = SqlProductRepository::new(pool);
///
/// let stored = repo.store(Product::new("Coca Cola", "Bebidas", 10, 10.0)).await?;
/// let same = repo.get_one(stored.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqlProductRepository {
    pool: AnyPool,
}

impl SqlProductRepository {
    /// Creates a new repository over an open pool.
    pub fn new(pool: AnyPool) -> Self {
        SqlProductRepository { pool }
    }

    /// Counts stored products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ProductRepository for SqlProductRepository {
    async fn get_one(&self, id: i64) -> DbResult<Product> {
        debug!(id, "Fetching product");

        sqlx::query_as::<_, Product>(QUERY_GET_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found(ENTITY, id))
    }

    async fn get_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(QUERY_GET_ALL)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Fetched all products");
        Ok(products)
    }

    async fn get_by_name(&self, name: &str) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(QUERY_GET_BY_NAME)
            .bind(name)
            .fetch_all(&self.pool)
            .await?;

        debug!(name = %name, count = products.len(), "Fetched products by name");
        Ok(products)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The input with `id` set to the store-assigned key
    /// * `Err(DbError)` - Constraint violation or connection failure
    async fn store(&self, mut product: Product) -> DbResult<Product> {
        debug!(name = %product.name, "Inserting product");

        let result = sqlx::query(QUERY_INSERT)
            .bind(&product.name)
            .bind(&product.category)
            .bind(product.count)
            .bind(product.price)
            .execute(&self.pool)
            .await?;

        product.id = result
            .last_insert_id()
            .ok_or_else(|| DbError::Internal("store did not report an inserted id".to_string()))?;

        Ok(product)
    }

    /// Updates an existing product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Statement executed; an unknown `product.id` matches
    ///   no row and still succeeds
    /// * `Err(DbError)` - Constraint violation or connection failure
    async fn update(&self, product: Product) -> DbResult<Product> {
        debug!(id = product.id, "Updating product");

        let result = sqlx::query(QUERY_UPDATE)
            .bind(&product.name)
            .bind(&product.category)
            .bind(product.count)
            .bind(product.price)
            .bind(product.id)
            .execute(&self.pool)
            .await?;

        debug!(rows = result.rows_affected(), "Product update executed");
        Ok(product)
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query(QUERY_DELETE)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(ENTITY, id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    const CREATE_PRODUCTS: &str = r#"
        CREATE TABLE products (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            name     TEXT    NOT NULL,
            category TEXT    NOT NULL,
            count    INTEGER NOT NULL CHECK (count >= 0),
            price    REAL    NOT NULL
        )
    "#;

    async fn setup() -> (Database, SqlProductRepository) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        sqlx::query(CREATE_PRODUCTS)
            .execute(db.pool())
            .await
            .unwrap();
        let repo = db.products();
        (db, repo)
    }

    fn coca_cola() -> Product {
        Product::new("Coca Cola", "Bebidas", 10, 10.0)
    }

    #[tokio::test]
    async fn test_store_then_get_one() {
        let (_db, repo) = setup().await;

        let input = Product::new("Pepsi", "Bebidas", 4, 2.5);
        let stored = repo.store(input.clone()).await.unwrap();
        assert!(stored.is_persisted());

        let fetched = repo.get_one(stored.id).await.unwrap();
        assert_eq!(fetched, Product { id: stored.id, ..input });
    }

    #[tokio::test]
    async fn test_store_ignores_input_id() {
        let (_db, repo) = setup().await;

        let stored = repo
            .store(Product {
                id: 999,
                ..coca_cola()
            })
            .await
            .unwrap();

        assert_ne!(stored.id, 999);
        assert!(repo.get_one(999).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_store_allows_duplicate_names() {
        let (_db, repo) = setup().await;

        let first = repo.store(coca_cola()).await.unwrap();
        let second = repo.store(coca_cola()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.get_by_name("Coca Cola").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_one_missing_is_not_found() {
        let (_db, repo) = setup().await;

        let err = repo.get_one(42).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { ref entity, ref id } if entity == "Product" && id == "42"));
    }

    #[tokio::test]
    async fn test_get_all_empty_table() {
        let (_db, repo) = setup().await;

        let products = repo.get_all().await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_returns_every_row() {
        let (_db, repo) = setup().await;

        let a = repo.store(coca_cola()).await.unwrap();
        let b = repo
            .store(Product::new("Alfajor", "Golosinas", 30, 1.25))
            .await
            .unwrap();

        let mut products = repo.get_all().await.unwrap();
        products.sort_by_key(|p| p.id);
        assert_eq!(products, vec![a, b]);
    }

    #[tokio::test]
    async fn test_get_by_name_exact_match_only() {
        let (_db, repo) = setup().await;

        repo.store(coca_cola()).await.unwrap();
        repo.store(Product::new("Coca Cola Zero", "Bebidas", 5, 11.0))
            .await
            .unwrap();

        let products = repo.get_by_name("Coca Cola").await.unwrap();
        assert_eq!(products.len(), 1);
        assert!(products.iter().all(|p| p.name == "Coca Cola"));

        assert!(repo.get_by_name("Fanta").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_coca_cola_scenario() {
        let (_db, repo) = setup().await;

        let stored = repo.store(coca_cola()).await.unwrap();
        assert!(stored.id > 0);

        let products = repo.get_by_name("Coca Cola").await.unwrap();
        assert_eq!(products.len(), 1);
        let found = &products[0];
        assert_eq!(found.id, stored.id);
        assert_eq!(found.name, "Coca Cola");
        assert_eq!(found.category, "Bebidas");
        assert_eq!(found.count, 10);
        assert_eq!(found.price, 10.0);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let (_db, repo) = setup().await;

        let stored = repo.store(coca_cola()).await.unwrap();
        let changed = Product {
            name: "Coca Cola Light".to_string(),
            category: "Bebidas Light".to_string(),
            count: 3,
            price: 12.5,
            ..stored.clone()
        };

        let updated = repo.update(changed.clone()).await.unwrap();
        assert_eq!(updated, changed);
        assert_eq!(repo.get_one(stored.id).await.unwrap(), changed);
    }

    #[tokio::test]
    async fn test_update_with_same_values_succeeds() {
        let (_db, repo) = setup().await;

        let stored = repo.store(coca_cola()).await.unwrap();

        assert!(repo.update(stored.clone()).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_missing_id_succeeds_and_changes_nothing() {
        let (_db, repo) = setup().await;

        let stored = repo.store(coca_cola()).await.unwrap();
        let ghost = Product {
            id: stored.id + 100,
            ..Product::new("Ghost", "Nada", 1, 1.0)
        };

        let updated = repo.update(ghost.clone()).await.unwrap();
        assert_eq!(updated, ghost);
        assert_eq!(repo.get_all().await.unwrap(), vec![stored]);
        assert!(repo.get_one(ghost.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_existing_row() {
        let (_db, repo) = setup().await;

        let stored = repo.store(coca_cola()).await.unwrap();
        repo.delete(stored.id).await.unwrap();

        assert!(repo.get_one(stored.id).await.unwrap_err().is_not_found());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let (_db, repo) = setup().await;

        let stored = repo.store(coca_cola()).await.unwrap();
        repo.delete(stored.id).await.unwrap();

        assert!(repo.delete(stored.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_zero_is_not_found() {
        let (_db, repo) = setup().await;

        let err = repo.delete(0).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_constraint_violation_is_surfaced() {
        let (_db, repo) = setup().await;

        let err = repo
            .store(Product::new("Broken", "Bebidas", -1, 1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_closed_pool_is_connection_failure() {
        let (db, repo) = setup().await;
        db.close().await;

        let err = repo.get_all().await.unwrap_err();
        assert!(matches!(err, DbError::ConnectionFailed(_)));
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let (_db, repo) = setup().await;
        let repo: Box<dyn ProductRepository> = Box::new(repo);

        let stored = repo.store(coca_cola()).await.unwrap();
        assert_eq!(repo.get_one(stored.id).await.unwrap().name, "Coca Cola");
    }
}
