//! Passenger repository for database operations

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;

use super::PassengerStore;
use crate::models::{NewPassenger, Passenger, UpdatePassenger};

/// Passenger repository
#[derive(Clone)]
pub struct PassengerRepository {
    pool: PgPool,
}

impl PassengerRepository {
    /// Create a new passenger repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PassengerStore for PassengerRepository {
    async fn list_all(&self) -> DatabaseResult<Vec<Passenger>> {
        let passengers = sqlx::query_as::<_, Passenger>(
            r#"
            SELECT id, name, email, phone_number
            FROM passengers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(passengers)
    }

    async fn insert(&self, new_passenger: &NewPassenger) -> DatabaseResult<Passenger> {
        info!("Creating new passenger: {}", new_passenger.email);

        sqlx::query_as::<_, Passenger>(
            r#"
            INSERT INTO passengers (name, email, phone_number)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, phone_number
            "#,
        )
        .bind(&new_passenger.name)
        .bind(&new_passenger.email)
        .bind(&new_passenger.phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }

    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<Passenger>> {
        sqlx::query_as::<_, Passenger>(
            r#"
            SELECT id, name, email, phone_number
            FROM passengers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }

    async fn update(
        &self,
        id: i32,
        changes: &UpdatePassenger,
    ) -> DatabaseResult<Option<Passenger>> {
        info!("Updating passenger: {}", id);

        sqlx::query_as::<_, Passenger>(
            r#"
            UPDATE passengers
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone_number = COALESCE($4, phone_number)
            WHERE id = $1
            RETURNING id, name, email, phone_number
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(&changes.phone_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }

    async fn delete(&self, id: i32) -> DatabaseResult<bool> {
        info!("Deleting passenger: {}", id);

        let result = sqlx::query("DELETE FROM passengers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from_query)?;

        Ok(result.rows_affected() > 0)
    }
}
