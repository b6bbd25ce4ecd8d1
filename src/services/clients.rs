//! Client management service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::client::{Client, ClientQuery, CreateClient, UpdateClient},
    repository::Repository,
};

#[derive(Clone)]
pub struct ClientsService {
    repository: Repository,
}

impl ClientsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get client by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Client> {
        self.repository.clients.get_by_id(id).await
    }

    /// Search clients
    pub async fn search(&self, query: &ClientQuery) -> AppResult<(Vec<Client>, i64)> {
        self.repository.clients.search(query).await
    }

    /// Create a new client
    pub async fn create(&self, client: CreateClient) -> AppResult<Client> {
        client
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.clients.create(&client).await
    }

    /// Update a client
    pub async fn update(&self, id: Uuid, update: UpdateClient) -> AppResult<Client> {
        update
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.clients.update(id, &update).await
    }

    /// Delete a client
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.clients.delete(id).await
    }
}
