//! User repository for database operations

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;

use super::UserStore;
use crate::models::{NewUser, UpdateUser, User, UserType};

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn user_from_row(row: &PgRow) -> DatabaseResult<User> {
    let decode = |e: sqlx::Error| DatabaseError::Decode(e.to_string());

    let user_type: String = row.try_get("user_type").map_err(decode)?;
    let user_type = user_type
        .parse::<UserType>()
        .map_err(DatabaseError::Decode)?;

    Ok(User {
        id: row.try_get("id").map_err(decode)?,
        email: row.try_get("email").map_err(decode)?,
        password: row.try_get("password").map_err(decode)?,
        user_type,
        phone_number: row.try_get("phone_number").map_err(decode)?,
        first_name: row.try_get("first_name").map_err(decode)?,
        last_name: row.try_get("last_name").map_err(decode)?,
        is_staff: row.try_get("is_staff").map_err(decode)?,
        is_active: row.try_get("is_active").map_err(decode)?,
        is_superuser: row.try_get("is_superuser").map_err(decode)?,
        last_login: row.try_get("last_login").map_err(decode)?,
        date_joined: row.try_get("date_joined").map_err(decode)?,
        created_at: row.try_get("created_at").map_err(decode)?,
        updated_at: row.try_get("updated_at").map_err(decode)?,
    })
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert(&self, new_user: &NewUser) -> DatabaseResult<User> {
        info!("Creating new user: {}", new_user.email);

        let row = sqlx::query(
            r#"
            INSERT INTO users (email, password, user_type, phone_number, first_name, last_name,
                               is_staff, is_active, is_superuser)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, email, password, user_type, phone_number, first_name, last_name,
                      is_staff, is_active, is_superuser, last_login, date_joined,
                      created_at, updated_at
            "#,
        )
        .bind(&new_user.email)
        .bind(&new_user.password)
        .bind(new_user.user_type.as_str())
        .bind(&new_user.phone_number)
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(new_user.is_staff)
        .bind(new_user.is_active)
        .bind(new_user.is_superuser)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        user_from_row(&row)
    }

    async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
        info!("Finding user by email: {}", email);

        let row = sqlx::query(
            r#"
            SELECT id, email, password, user_type, phone_number, first_name, last_name,
                   is_staff, is_active, is_superuser, last_login, date_joined,
                   created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn update(&self, id: i64, changes: &UpdateUser) -> DatabaseResult<Option<User>> {
        info!("Updating user: {}", id);

        let row = sqlx::query(
            r#"
            UPDATE users
            SET email = COALESCE($2, email),
                password = COALESCE($3, password),
                user_type = COALESCE($4, user_type),
                phone_number = CASE WHEN $5 THEN $6 ELSE phone_number END,
                first_name = COALESCE($7, first_name),
                last_name = COALESCE($8, last_name),
                is_staff = COALESCE($9, is_staff),
                is_active = COALESCE($10, is_active),
                is_superuser = COALESCE($11, is_superuser),
                last_login = COALESCE($12, last_login),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, password, user_type, phone_number, first_name, last_name,
                      is_staff, is_active, is_superuser, last_login, date_joined,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&changes.email)
        .bind(&changes.password)
        .bind(changes.user_type.map(|t| t.as_str()))
        .bind(changes.phone_number.is_some())
        .bind(changes.phone_number.as_ref().and_then(|phone| phone.as_deref()))
        .bind(&changes.first_name)
        .bind(&changes.last_name)
        .bind(changes.is_staff)
        .bind(changes.is_active)
        .bind(changes.is_superuser)
        .bind(changes.last_login)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        row.as_ref().map(user_from_row).transpose()
    }
}
