//! Passenger service: validated access to the passenger store

use std::sync::Arc;

use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    models::{NewPassenger, Passenger, UpdatePassenger},
    repositories::PassengerStore,
};

/// Passenger service
///
/// Every write goes through the payload's `validate` first; nothing reaches
/// the store when it fails.
#[derive(Clone)]
pub struct PassengerService {
    store: Arc<dyn PassengerStore>,
}

impl PassengerService {
    /// Create a new passenger service
    pub fn new(store: Arc<dyn PassengerStore>) -> Self {
        Self { store }
    }

    /// Every passenger, ordered by id
    pub async fn list(&self) -> ApiResult<Vec<Passenger>> {
        Ok(self.store.list_all().await?)
    }

    pub async fn get(&self, id: i32) -> ApiResult<Passenger> {
        self.store.find_by_id(id).await?.ok_or(ApiError::NotFound)
    }

    /// Validate and store a new passenger
    pub async fn create(&self, new_passenger: &NewPassenger) -> ApiResult<Passenger> {
        new_passenger.validate().map_err(ApiError::Validation)?;

        let passenger = self.store.insert(new_passenger).await?;
        info!("Created passenger {} ({})", passenger.id, passenger);

        Ok(passenger)
    }

    /// Validate and apply the set fields of `changes`
    pub async fn update(&self, id: i32, changes: &UpdatePassenger) -> ApiResult<Passenger> {
        changes.validate().map_err(ApiError::Validation)?;

        self.store
            .update(id, changes)
            .await?
            .ok_or(ApiError::NotFound)
    }

    pub async fn delete(&self, id: i32) -> ApiResult<()> {
        if !self.store.delete(id).await? {
            return Err(ApiError::NotFound);
        }
        info!("Deleted passenger {}", id);

        Ok(())
    }
}
