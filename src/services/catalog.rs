//! Rental catalog service: vehicle fleet and bungalows

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::bungalow::{Bungalow, BungalowQuery, CreateBungalow, UpdateBungalow},
    models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle, VehicleQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // Vehicles

    pub async fn get_vehicle(&self, id: Uuid) -> AppResult<Vehicle> {
        self.repository.vehicles.get_by_id(id).await
    }

    pub async fn list_vehicles(&self, query: &VehicleQuery) -> AppResult<(Vec<Vehicle>, i64)> {
        self.repository.vehicles.list(query).await
    }

    pub async fn create_vehicle(&self, vehicle: CreateVehicle) -> AppResult<Vehicle> {
        vehicle
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.vehicles.create(&vehicle).await
    }

    pub async fn update_vehicle(&self, id: Uuid, update: UpdateVehicle) -> AppResult<Vehicle> {
        self.repository.vehicles.update(id, &update).await
    }

    pub async fn delete_vehicle(&self, id: Uuid) -> AppResult<()> {
        self.repository.vehicles.delete(id).await
    }

    // Bungalows

    pub async fn get_bungalow(&self, id: Uuid) -> AppResult<Bungalow> {
        self.repository.bungalows.get_by_id(id).await
    }

    pub async fn list_bungalows(&self, query: &BungalowQuery) -> AppResult<(Vec<Bungalow>, i64)> {
        self.repository.bungalows.list(query).await
    }

    pub async fn create_bungalow(&self, bungalow: CreateBungalow) -> AppResult<Bungalow> {
        bungalow
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.bungalows.create(&bungalow).await
    }

    pub async fn update_bungalow(&self, id: Uuid, update: UpdateBungalow) -> AppResult<Bungalow> {
        self.repository.bungalows.update(id, &update).await
    }

    pub async fn delete_bungalow(&self, id: Uuid) -> AppResult<()> {
        self.repository.bungalows.delete(id).await
    }
}
