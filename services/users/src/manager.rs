//! User manager: the factories and lookups used to create and authenticate
//! email-identified users

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::{
    error::{ApiError, ApiResult},
    models::{NewUser, UpdateUser, User, UserFields},
    password,
    repositories::UserStore,
    validation::{
        NAME_PART_MAX_LENGTH, normalize_email, validate_email, validate_max_length,
        validate_phone_number,
    },
};

/// User manager
#[derive(Clone)]
pub struct UserManager {
    store: Arc<dyn UserStore>,
}

fn validate_fields(fields: &UserFields) -> ApiResult<()> {
    if let Some(phone_number) = &fields.phone_number {
        validate_phone_number(phone_number).map_err(ApiError::Validation)?;
    }
    if let Some(first_name) = &fields.first_name {
        validate_max_length("First name", first_name, NAME_PART_MAX_LENGTH)
            .map_err(ApiError::Validation)?;
    }
    if let Some(last_name) = &fields.last_name {
        validate_max_length("Last name", last_name, NAME_PART_MAX_LENGTH)
            .map_err(ApiError::Validation)?;
    }
    Ok(())
}

/// Normalize and validate an email given by a caller
fn clean_email(email: &str) -> ApiResult<String> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err(ApiError::Validation("The email must be set".to_string()));
    }
    validate_email(&email).map_err(ApiError::Validation)?;
    Ok(email)
}

impl UserManager {
    /// Create a new user manager
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Create and save a user with the given email and password
    ///
    /// The email is normalized before it is stored and the password is only
    /// kept as a salted hash. `None` stores an unusable password.
    pub async fn create_user(
        &self,
        email: &str,
        raw_password: Option<&str>,
        fields: UserFields,
    ) -> ApiResult<User> {
        let email = clean_email(email)?;
        validate_fields(&fields)?;

        let new_user = NewUser {
            email,
            password: password::encode(raw_password)?,
            user_type: fields.user_type.unwrap_or_default(),
            phone_number: fields.phone_number,
            first_name: fields.first_name.unwrap_or_default(),
            last_name: fields.last_name.unwrap_or_default(),
            is_staff: fields.is_staff.unwrap_or(false),
            is_active: fields.is_active.unwrap_or(true),
            is_superuser: fields.is_superuser.unwrap_or(false),
        };

        let user = self.store.insert(&new_user).await?;
        info!("Created user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Create and save a superuser with the given email and password
    ///
    /// `is_staff`, `is_superuser` and `is_active` default to true. The call
    /// fails if the caller forces `is_staff` or `is_superuser` to false.
    pub async fn create_superuser(
        &self,
        email: &str,
        raw_password: Option<&str>,
        mut fields: UserFields,
    ) -> ApiResult<User> {
        let is_staff = *fields.is_staff.get_or_insert(true);
        let is_superuser = *fields.is_superuser.get_or_insert(true);
        fields.is_active.get_or_insert(true);

        if !is_staff {
            return Err(ApiError::Validation(
                "Superuser must have is_staff=true".to_string(),
            ));
        }
        if !is_superuser {
            return Err(ApiError::Validation(
                "Superuser must have is_superuser=true".to_string(),
            ));
        }

        self.create_user(email, raw_password, fields).await
    }

    /// Look a user up by the email it authenticates with
    pub async fn get_by_natural_key(&self, email: &str) -> ApiResult<Option<User>> {
        let email = normalize_email(email);
        Ok(self.store.find_by_email(&email).await?)
    }

    /// Return the user matching the credentials, if it may log in
    ///
    /// Inactive users and users without a usable password are refused.
    /// A successful call stamps `last_login`.
    pub async fn authenticate(&self, email: &str, raw_password: &str) -> ApiResult<Option<User>> {
        let Some(user) = self.get_by_natural_key(email).await? else {
            return Ok(None);
        };

        if !user.is_active {
            warn!("Refused authentication for inactive user {}", user.id);
            return Ok(None);
        }
        if !user.check_password(raw_password) {
            return Ok(None);
        }

        let changes = UpdateUser {
            last_login: Some(Utc::now()),
            ..Default::default()
        };
        let user = self
            .store
            .update(user.id, &changes)
            .await?
            .ok_or(ApiError::NotFound)?;

        Ok(Some(user))
    }

    /// Replace the password of a user; `None` makes it unusable
    pub async fn set_password(&self, id: i64, raw_password: Option<&str>) -> ApiResult<User> {
        let changes = UpdateUser {
            password: Some(password::encode(raw_password)?),
            ..Default::default()
        };

        self.store
            .update(id, &changes)
            .await?
            .ok_or(ApiError::NotFound)
    }

    /// Update the email and profile fields of a user
    pub async fn update_user(
        &self,
        id: i64,
        email: Option<&str>,
        fields: UserFields,
    ) -> ApiResult<User> {
        let email = email.map(clean_email).transpose()?;
        validate_fields(&fields)?;

        let changes = UpdateUser {
            email,
            user_type: fields.user_type,
            phone_number: fields.phone_number.map(Some),
            first_name: fields.first_name,
            last_name: fields.last_name,
            is_staff: fields.is_staff,
            is_active: fields.is_active,
            is_superuser: fields.is_superuser,
            ..Default::default()
        };

        self.store
            .update(id, &changes)
            .await?
            .ok_or(ApiError::NotFound)
    }

    /// Remove the phone number of a user
    pub async fn clear_phone_number(&self, id: i64) -> ApiResult<User> {
        let changes = UpdateUser {
            phone_number: Some(None),
            ..Default::default()
        };

        self.store
            .update(id, &changes)
            .await?
            .ok_or(ApiError::NotFound)
    }
}
