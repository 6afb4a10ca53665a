use db::models::guest;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use validator::ValidateEmail;

use crate::error::{AppError, is_unique_violation};

pub use db::models::guest::Model as Guest;

#[derive(Debug, Clone)]
pub struct CreateGuest {
    pub owner_id: i64,
    pub name: String,
    pub email: String,
    pub is_vip: bool,
}

/// Partial update; `None` leaves a field unchanged. The QR token is never editable.
#[derive(Debug, Clone, Default)]
pub struct UpdateGuest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_vip: Option<bool>,
}

fn clean_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Guest name is required".into()));
    }
    Ok(name.to_owned())
}

fn clean_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();
    if !email.validate_email() {
        return Err(AppError::Validation(format!("'{email}' is not a valid email address")));
    }
    Ok(email)
}

fn duplicate_email(email: &str) -> AppError {
    AppError::Conflict(format!("A guest with email '{email}' already exists"))
}

pub struct GuestService {
    db: DatabaseConnection,
}

impl GuestService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a guest and issues their QR token.
    pub async fn create(&self, params: CreateGuest) -> Result<Guest, AppError> {
        let name = clean_name(&params.name)?;
        let email = clean_email(&params.email)?;

        if guest::Model::find_by_email(&self.db, &email).await?.is_some() {
            return Err(duplicate_email(&email));
        }

        let created = guest::Model::create(&self.db, params.owner_id, &name, &email, params.is_vip)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    duplicate_email(&email)
                } else {
                    AppError::Database(err)
                }
            })?;

        tracing::info!(guest_id = created.id, owner_id = params.owner_id, "Guest registered");
        Ok(created)
    }

    pub async fn update(&self, id: i64, params: UpdateGuest) -> Result<Guest, AppError> {
        let existing = self.get(id).await?;

        let name = match params.name {
            Some(name) => clean_name(&name)?,
            None => existing.name.clone(),
        };
        let email = match params.email {
            Some(email) => clean_email(&email)?,
            None => existing.email.clone(),
        };
        let is_vip = params.is_vip.unwrap_or(existing.is_vip);

        if email != existing.email {
            if let Some(other) = guest::Model::find_by_email(&self.db, &email).await? {
                if other.id != id {
                    return Err(duplicate_email(&email));
                }
            }
        }

        guest::Model::edit(&self.db, id, &name, &email, is_vip)
            .await
            .map_err(|err| match err {
                DbErr::RecordNotFound(_) => AppError::GuestNotFound,
                err if is_unique_violation(&err) => duplicate_email(&email),
                other => AppError::Database(other),
            })
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if guest::Model::delete_by_id(&self.db, id).await? {
            tracing::info!(guest_id = id, "Guest deleted");
            Ok(())
        } else {
            Err(AppError::GuestNotFound)
        }
    }

    pub async fn get(&self, id: i64) -> Result<Guest, AppError> {
        guest::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::GuestNotFound)
    }

    /// Resolves a scanned token, rejecting malformed ones without a lookup.
    pub async fn find_by_token(&self, token: &str) -> Result<Guest, AppError> {
        let id = guest::parse_qr_code(token.trim()).ok_or(AppError::InvalidTokenFormat)?;
        guest::Model::find_by_qr_code(&self.db, &guest::qr_code_for(id))
            .await?
            .ok_or(AppError::GuestNotFound)
    }

    pub async fn list_for_owner(&self, owner_id: i64) -> Result<Vec<Guest>, AppError> {
        Ok(guest::Model::list_for_owner(&self.db, owner_id).await?)
    }
}
