use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_item, to_attribute_value, to_item};

use crate::models::invitation::Invitation;
use crate::repositories::errors::invitation_repository_errors::InvitationRepositoryError;

#[cfg(test)]
use mockall::automock;

pub struct DynamoDbInvitationRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbInvitationRepository {
    pub fn new(client: Client) -> Self {
        let table_name = std::env::var("INVITATIONS_TABLE")
            .expect("INVITATIONS_TABLE environment variable must be set");
        Self { client, table_name }
    }

    async fn query_index(
        &self,
        index: &str,
        key: &str,
        value: &str,
    ) -> Result<Vec<Invitation>, InvitationRepositoryError> {
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
                    .map_err(|e| InvitationRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| InvitationRepositoryError::DynamoDb(e.to_string()))?;

        result
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| {
                from_item(item).map_err(|e| InvitationRepositoryError::Serialization(e.to_string()))
            })
            .collect()
    }
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait InvitationRepository: Send + Sync {
    async fn create_invitation(
        &self,
        invitation: &Invitation,
    ) -> Result<(), InvitationRepositoryError>;
    async fn get_invitation(
        &self,
        invitation_id: &str,
    ) -> Result<Option<Invitation>, InvitationRepositoryError>;
    async fn get_by_game_id(
        &self,
        game_id: &str,
    ) -> Result<Option<Invitation>, InvitationRepositoryError>;
    async fn update_invitation(
        &self,
        invitation: &Invitation,
    ) -> Result<(), InvitationRepositoryError>;
    async fn delete_invitation(&self, invitation_id: &str)
        -> Result<(), InvitationRepositoryError>;
    async fn find_pending(&self) -> Result<Vec<Invitation>, InvitationRepositoryError>;
    async fn find_by_owner(
        &self,
        owner_id: &str,
    ) -> Result<Vec<Invitation>, InvitationRepositoryError>;
}

#[async_trait]
impl InvitationRepository for DynamoDbInvitationRepository {
    async fn create_invitation(
        &self,
        invitation: &Invitation,
    ) -> Result<(), InvitationRepositoryError> {
        let item = to_item(invitation)
            .map_err(|e| InvitationRepositoryError::Serialization(e.to_string()))?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| InvitationRepositoryError::DynamoDb(e.to_string()))?;
        Ok(())
    }

    async fn get_invitation(
        &self,
        invitation_id: &str,
    ) -> Result<Option<Invitation>, InvitationRepositoryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(
                "invitation_id",
                to_attribute_value(invitation_id)
                    .map_err(|e| InvitationRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| InvitationRepositoryError::DynamoDb(e.to_string()))?;

        match output.item {
            Some(item) => {
                let invitation = from_item(item)
                    .map_err(|e| InvitationRepositoryError::Serialization(e.to_string()))?;
                Ok(Some(invitation))
            }
            None => Ok(None),
        }
    }

    async fn get_by_game_id(
        &self,
        game_id: &str,
    ) -> Result<Option<Invitation>, InvitationRepositoryError> {
        Ok(self
            .query_index("GSI_InvitationsByGame", "game_id", game_id)
            .await?
            .into_iter()
            .next())
    }

    async fn update_invitation(
        &self,
        invitation: &Invitation,
    ) -> Result<(), InvitationRepositoryError> {
        let item = to_item(invitation)
            .map_err(|e| InvitationRepositoryError::Serialization(e.to_string()))?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_exists(invitation_id)")
            .send()
            .await
            .map_err(|e| {
                let error_str = e.to_string();
                if error_str.contains("ConditionalCheckFailedException") {
                    InvitationRepositoryError::NotFound
                } else {
                    InvitationRepositoryError::DynamoDb(error_str)
                }
            })?;
        Ok(())
    }

    async fn delete_invitation(
        &self,
        invitation_id: &str,
    ) -> Result<(), InvitationRepositoryError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(
                "invitation_id",
                to_attribute_value(invitation_id)
                    .map_err(|e| InvitationRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| InvitationRepositoryError::DynamoDb(e.to_string()))?;
        Ok(())
    }

    async fn find_pending(&self) -> Result<Vec<Invitation>, InvitationRepositoryError> {
        self.query_index("GSI_InvitationsByStatus", "status", "pending")
            .await
    }

    async fn find_by_owner(
        &self,
        owner_id: &str,
    ) -> Result<Vec<Invitation>, InvitationRepositoryError> {
        self.query_index("GSI_InvitationsByOwner", "owner", owner_id)
            .await
    }
}
