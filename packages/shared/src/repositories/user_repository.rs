use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_item, to_attribute_value, to_item};

use crate::models::user::User;
use crate::repositories::errors::user_repository_errors::UserRepositoryError;

#[cfg(test)]
use mockall::automock;

pub struct DynamoDbUserRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbUserRepository {
    pub fn new(client: Client) -> Self {
        let table_name =
            std::env::var("USERS_TABLE").expect("USERS_TABLE environment variable must be set");
        Self { client, table_name }
    }

    async fn query_one(
        &self,
        index: &str,
        key: &str,
        value: &str,
    ) -> Result<Option<User>, UserRepositoryError> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(index)
            .key_condition_expression(format!("{} = :value", key))
            .expression_attribute_values(
                ":value",
                to_attribute_value(value)
                    .map_err(|e| UserRepositoryError::Serialization(e.to_string()))?,
            )
            .limit(1)
            .send()
            .await
            .map_err(|e| UserRepositoryError::DynamoDb(e.to_string()))?;

        match result.items.and_then(|items| items.into_iter().next()) {
            Some(item) => {
                let user = from_item(item)
                    .map_err(|e| UserRepositoryError::Serialization(e.to_string()))?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: &User) -> Result<(), UserRepositoryError>;
    async fn get_user_by_id(&self, user_id: &str) -> Result<User, UserRepositoryError>;
    async fn get_user_by_username(&self, username: &str) -> Result<User, UserRepositoryError>;
    async fn update_user(&self, user: &User) -> Result<(), UserRepositoryError>;
    async fn username_exists(&self, username: &str) -> Result<bool, UserRepositoryError>;
    async fn email_exists(&self, email: &str) -> Result<bool, UserRepositoryError>;
}

#[async_trait]
impl UserRepository for DynamoDbUserRepository {
    async fn create_user(&self, user: &User) -> Result<(), UserRepositoryError> {
        let item = to_item(user).map_err(|e| UserRepositoryError::Serialization(e.to_string()))?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(id)")
            .send()
            .await
            .map_err(|e| {
                let error_str = e.to_string();
                if error_str.contains("ConditionalCheckFailedException") {
                    UserRepositoryError::AlreadyExists
                } else {
                    UserRepositoryError::DynamoDb(error_str)
                }
            })?;
        Ok(())
    }

    async fn get_user_by_id(&self, user_id: &str) -> Result<User, UserRepositoryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(
                "id",
                to_attribute_value(user_id)
                    .map_err(|e| UserRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| UserRepositoryError::DynamoDb(e.to_string()))?;

        match output.item {
            Some(item) => {
                from_item(item).map_err(|e| UserRepositoryError::Serialization(e.to_string()))
            }
            None => Err(UserRepositoryError::NotFound),
        }
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User, UserRepositoryError> {
        self.query_one("GSI_UserByUsername", "username", username)
            .await?
            .ok_or(UserRepositoryError::NotFound)
    }

    async fn update_user(&self, user: &User) -> Result<(), UserRepositoryError> {
        let item = to_item(user).map_err(|e| UserRepositoryError::Serialization(e.to_string()))?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_exists(id)")
            .send()
            .await
            .map_err(|e| {
                let error_str = e.to_string();
                if error_str.contains("ConditionalCheckFailedException") {
                    UserRepositoryError::NotFound
                } else {
                    UserRepositoryError::DynamoDb(error_str)
                }
            })?;
        Ok(())
    }

    async fn username_exists(&self, username: &str) -> Result<bool, UserRepositoryError> {
        Ok(self
            .query_one("GSI_UserByUsername", "username", username)
            .await?
            .is_some())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, UserRepositoryError> {
        Ok(self
            .query_one("GSI_UserByEmail", "email", email)
            .await?
            .is_some())
    }
}
