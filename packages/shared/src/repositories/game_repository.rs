use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_item, to_attribute_value, to_item};

use crate::models::game::Game;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;

#[cfg(test)]
use mockall::automock;

pub struct DynamoDbGameRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbGameRepository {
    pub fn new(client: Client) -> Self {
        let table_name =
            std::env::var("GAMES_TABLE").expect("GAMES_TABLE environment variable must be set");
        Self { client, table_name }
    }

    async fn query_index(
        &self,
        index: &str,
        key: &str,
        value: &str,
    ) -> Result<Vec<Game>, GameRepositoryError> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(index)
            .key_condition_expression("#k = :value")
            .expression_attribute_names("#k", key)
            .expression_attribute_values(
                ":value",
                to_attribute_value(value)
                    .map_err(|e| GameRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

        result
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| {
                from_item(item).map_err(|e| GameRepositoryError::Serialization(e.to_string()))
            })
            .collect()
    }
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait GameRepository: Send + Sync {
    async fn create_game(&self, game: &Game) -> Result<(), GameRepositoryError>;
    async fn get_game(&self, game_id: &str) -> Result<Option<Game>, GameRepositoryError>;
    async fn delete_game(&self, game_id: &str) -> Result<(), GameRepositoryError>;
    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<Game>, GameRepositoryError>;
    async fn find_by_opponent(&self, opponent_id: &str) -> Result<Vec<Game>, GameRepositoryError>;
}

#[async_trait]
impl GameRepository for DynamoDbGameRepository {
    async fn create_game(&self, game: &Game) -> Result<(), GameRepositoryError> {
        let item = to_item(game).map_err(|e| GameRepositoryError::Serialization(e.to_string()))?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;
        Ok(())
    }

    async fn get_game(&self, game_id: &str) -> Result<Option<Game>, GameRepositoryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(
                "game_id",
                to_attribute_value(game_id)
                    .map_err(|e| GameRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

        match output.item {
            Some(item) => {
                let game = from_item(item)
                    .map_err(|e| GameRepositoryError::Serialization(e.to_string()))?;
                Ok(Some(game))
            }
            None => Ok(None),
        }
    }

    async fn delete_game(&self, game_id: &str) -> Result<(), GameRepositoryError> {
        let result = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key(
                "game_id",
                to_attribute_value(game_id)
                    .map_err(|e| GameRepositoryError::Serialization(e.to_string()))?,
            )
            .condition_expression("attribute_exists(game_id)")
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                let error_str = e.to_string();
                if error_str.contains("ConditionalCheckFailedException") {
                    Err(GameRepositoryError::NotFound)
                } else {
                    Err(GameRepositoryError::DynamoDb(error_str))
                }
            }
        }
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<Game>, GameRepositoryError> {
        self.query_index("GSI_GamesByOwner", "owner", owner_id)
            .await
    }

    async fn find_by_opponent(&self, opponent_id: &str) -> Result<Vec<Game>, GameRepositoryError> {
        self.query_index("GSI_GamesByOpponent", "opponent", opponent_id)
            .await
    }
}
