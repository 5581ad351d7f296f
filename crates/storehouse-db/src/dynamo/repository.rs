//! DynamoDB user repository.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use storehouse_core::User;
use tracing::debug;

use super::conversions::{item_to_user, user_to_item, KEY_ID};
use super::error::{map_get_item_error, map_put_item_error};
use crate::error::{DbError, DbResult};
use crate::repository::UserRepository;

/// DynamoDB-backed user repository.
///
/// ## Usage
/// ```rust,ignore
/// let repo = DynamoUserRepository::new(client, "Users");
/// repo.store(&user).await?;
/// let same = repo.get_one(&user.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct DynamoUserRepository {
    client: Client,
    table_name: String,
}

impl DynamoUserRepository {
    /// Creates a new repository with the given client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from environment configuration.
    ///
    /// Uses the AWS SDK default credential chain. `AWS_ENDPOINT_URL` points
    /// the client at a local DynamoDB; the table name comes from
    /// `DYNAMODB_USERS_TABLE` (defaults to "Users").
    pub async fn from_env() -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Ok(endpoint) = std::env::var("AWS_ENDPOINT_URL") {
            loader = loader.endpoint_url(endpoint);
        }
        let config = loader.load().await;
        let table_name =
            std::env::var("DYNAMODB_USERS_TABLE").unwrap_or_else(|_| "Users".to_string());

        Self::new(Client::new(&config), table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl UserRepository for DynamoUserRepository {
    async fn store(&self, user: &User) -> DbResult<()> {
        debug!(id = %user.id, table = %self.table_name, "Putting user");

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(user_to_item(user)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn get_one(&self, id: &str) -> DbResult<User> {
        debug!(id = %id, table = %self.table_name, "Getting user");

        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ID, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => item_to_user(&item),
            None => Err(DbError::not_found("User", id)),
        }
    }
}
