//! In-memory stores for tests
//!
//! They mirror the unique constraints declared in the migrations so the
//! manager and the handlers can be exercised without PostgreSQL.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use common::error::{DatabaseError, DatabaseResult};
use tokio::sync::Mutex;

use super::{PassengerStore, UserStore};
use crate::models::{NewPassenger, NewUser, Passenger, UpdatePassenger, UpdateUser, User};

#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 0,
        }
    }
}

/// User store backed by a vector
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    table: Arc<Mutex<Table<User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.table.lock().await.rows.len()
    }
}

fn check_user_unique(
    rows: &[User],
    skip_id: Option<i64>,
    email: Option<&str>,
    phone_number: Option<&str>,
) -> DatabaseResult<()> {
    for row in rows.iter().filter(|row| Some(row.id) != skip_id) {
        if email.is_some_and(|email| row.email == email) {
            return Err(DatabaseError::UniqueViolation("users_email_key".to_string()));
        }
        if phone_number.is_some() && row.phone_number.as_deref() == phone_number {
            return Err(DatabaseError::UniqueViolation(
                "users_phone_number_key".to_string(),
            ));
        }
    }
    Ok(())
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, new_user: &NewUser) -> DatabaseResult<User> {
        let mut table = self.table.lock().await;
        check_user_unique(
            &table.rows,
            None,
            Some(&new_user.email),
            new_user.phone_number.as_deref(),
        )?;

        table.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: table.next_id,
            email: new_user.email.clone(),
            password: new_user.password.clone(),
            user_type: new_user.user_type,
            phone_number: new_user.phone_number.clone(),
            first_name: new_user.first_name.clone(),
            last_name: new_user.last_name.clone(),
            is_staff: new_user.is_staff,
            is_active: new_user.is_active,
            is_superuser: new_user.is_superuser,
            last_login: None,
            date_joined: now,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
        let table = self.table.lock().await;
        Ok(table.rows.iter().find(|row| row.email == email).cloned())
    }

    async fn update(&self, id: i64, changes: &UpdateUser) -> DatabaseResult<Option<User>> {
        let mut table = self.table.lock().await;
        check_user_unique(
            &table.rows,
            Some(id),
            changes.email.as_deref(),
            changes.phone_number.as_ref().and_then(|phone| phone.as_deref()),
        )?;

        let Some(user) = table.rows.iter_mut().find(|row| row.id == id) else {
            return Ok(None);
        };

        if let Some(email) = &changes.email {
            user.email = email.clone();
        }
        if let Some(password) = &changes.password {
            user.password = password.clone();
        }
        if let Some(user_type) = changes.user_type {
            user.user_type = user_type;
        }
        if let Some(phone_number) = &changes.phone_number {
            user.phone_number = phone_number.clone();
        }
        if let Some(first_name) = &changes.first_name {
            user.first_name = first_name.clone();
        }
        if let Some(last_name) = &changes.last_name {
            user.last_name = last_name.clone();
        }
        if let Some(is_staff) = changes.is_staff {
            user.is_staff = is_staff;
        }
        if let Some(is_active) = changes.is_active {
            user.is_active = is_active;
        }
        if let Some(is_superuser) = changes.is_superuser {
            user.is_superuser = is_superuser;
        }
        if let Some(last_login) = changes.last_login {
            user.last_login = Some(last_login);
        }
        user.updated_at = Utc::now();

        Ok(Some(user.clone()))
    }
}

/// Passenger store backed by a vector
#[derive(Debug, Clone, Default)]
pub struct InMemoryPassengerStore {
    table: Arc<Mutex<Table<Passenger>>>,
}

impl InMemoryPassengerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_passenger_unique(
    rows: &[Passenger],
    skip_id: Option<i32>,
    email: &str,
) -> DatabaseResult<()> {
    if rows
        .iter()
        .any(|row| Some(row.id) != skip_id && row.email == email)
    {
        return Err(DatabaseError::UniqueViolation(
            "passengers_email_key".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl PassengerStore for InMemoryPassengerStore {
    async fn list_all(&self) -> DatabaseResult<Vec<Passenger>> {
        let table = self.table.lock().await;
        let mut passengers = table.rows.clone();
        passengers.sort_by_key(|passenger| passenger.id);
        Ok(passengers)
    }

    async fn insert(&self, new_passenger: &NewPassenger) -> DatabaseResult<Passenger> {
        let mut table = self.table.lock().await;
        check_passenger_unique(&table.rows, None, &new_passenger.email)?;

        table.next_id += 1;
        let id = i32::try_from(table.next_id)
            .map_err(|e| DatabaseError::Decode(format!("passenger id overflow: {}", e)))?;
        let passenger = Passenger {
            id,
            name: new_passenger.name.clone(),
            email: new_passenger.email.clone(),
            phone_number: new_passenger.phone_number.clone(),
        };
        table.rows.push(passenger.clone());
        Ok(passenger)
    }

    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<Passenger>> {
        let table = self.table.lock().await;
        Ok(table.rows.iter().find(|row| row.id == id).cloned())
    }

    async fn update(
        &self,
        id: i32,
        changes: &UpdatePassenger,
    ) -> DatabaseResult<Option<Passenger>> {
        let mut table = self.table.lock().await;
        if let Some(email) = &changes.email {
            check_passenger_unique(&table.rows, Some(id), email)?;
        }

        let Some(passenger) = table.rows.iter_mut().find(|row| row.id == id) else {
            return Ok(None);
        };
        if let Some(name) = &changes.name {
            passenger.name = name.clone();
        }
        if let Some(email) = &changes.email {
            passenger.email = email.clone();
        }
        if let Some(phone_number) = &changes.phone_number {
            passenger.phone_number = phone_number.clone();
        }

        Ok(Some(passenger.clone()))
    }

    async fn delete(&self, id: i32) -> DatabaseResult<bool> {
        let mut table = self.table.lock().await;
        let before = table.rows.len();
        table.rows.retain(|row| row.id != id);
        Ok(table.rows.len() < before)
    }
}

/// Passenger store whose every call fails with a query error
#[derive(Debug, Clone, Copy)]
pub struct FailingPassengerStore;

#[async_trait]
impl PassengerStore for FailingPassengerStore {
    async fn list_all(&self) -> DatabaseResult<Vec<Passenger>> {
        Err(DatabaseError::Query(sqlx::Error::PoolTimedOut))
    }

    async fn insert(&self, _new_passenger: &NewPassenger) -> DatabaseResult<Passenger> {
        Err(DatabaseError::Query(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, _id: i32) -> DatabaseResult<Option<Passenger>> {
        Err(DatabaseError::Query(sqlx::Error::PoolTimedOut))
    }

    async fn update(
        &self,
        _id: i32,
        _changes: &UpdatePassenger,
    ) -> DatabaseResult<Option<Passenger>> {
        Err(DatabaseError::Query(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: i32) -> DatabaseResult<bool> {
        Err(DatabaseError::Query(sqlx::Error::PoolTimedOut))
    }
}

mod tests {
    use super::*;

    fn new_passenger(name: &str, email: &str) -> NewPassenger {
        NewPassenger {
            name: name.to_string(),
            email: email.to_string(),
            phone_number: "555 0100".to_string(),
        }
    }

    #[tokio::test]
    async fn test_passenger_crud() {
        let store = InMemoryPassengerStore::new();

        let ada = store
            .insert(&new_passenger("Ada", "ada@example.com"))
            .await
            .unwrap();
        let grace = store
            .insert(&new_passenger("Grace", "grace@example.com"))
            .await
            .unwrap();
        assert_eq!((ada.id, grace.id), (1, 2));

        let updated = store
            .update(
                ada.id,
                &UpdatePassenger {
                    name: Some("Ada King".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Ada King");
        assert_eq!(updated.email, "ada@example.com");

        assert!(store.delete(grace.id).await.unwrap());
        assert!(!store.delete(grace.id).await.unwrap());
        assert_eq!(store.find_by_id(grace.id).await.unwrap(), None);
        assert_eq!(store.list_all().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_passenger_email_is_unique() {
        let store = InMemoryPassengerStore::new();
        store
            .insert(&new_passenger("Ada", "ada@example.com"))
            .await
            .unwrap();
        let bob = store
            .insert(&new_passenger("Bob", "bob@example.com"))
            .await
            .unwrap();

        let err = store
            .insert(&new_passenger("Other Ada", "ada@example.com"))
            .await
            .unwrap_err();
        assert!(err.is_unique_violation());

        let err = store
            .update(
                bob.id,
                &UpdatePassenger {
                    email: Some("ada@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_unique_violation());
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }
}
