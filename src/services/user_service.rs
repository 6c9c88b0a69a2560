//! User service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    services::AuthService,
    utils::validation,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// List users with pagination (admin only, enforced by the handler)
    pub async fn list_users(
        pool: &PgPool,
        limit: i64,
        skip: i64,
        search: Option<&str>,
        role: Option<&str>,
    ) -> AppResult<Vec<User>> {
        if let Some(role) = role {
            validation::validate_role(role).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        UserRepository::list(pool, skip, limit, search, role).await
    }

    /// Update a user profile
    ///
    /// Users may update their own profile; admins may update anyone.
    /// Role changes are admin only.
    pub async fn update_user(
        pool: &PgPool,
        requester_id: &Uuid,
        requester_is_admin: bool,
        target_id: &Uuid,
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
        roles: Option<Vec<String>>,
    ) -> AppResult<User> {
        if requester_id != target_id && !requester_is_admin {
            return Err(AppError::Forbidden(
                "Cannot update other users' profiles".to_string(),
            ));
        }

        if roles.is_some() && !requester_is_admin {
            return Err(AppError::Forbidden("Only admins can change roles".to_string()));
        }

        if let Some(roles) = &roles {
            validation::validate_roles(roles).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        // Ensure the target exists so an update cannot silently create nothing
        if UserRepository::find_by_id(pool, target_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let password_hash = match password {
            Some(password) => Some(AuthService::hash_password(password)?),
            None => None,
        };

        UserRepository::update(
            pool,
            target_id,
            name,
            email,
            password_hash.as_deref(),
            roles.as_deref(),
        )
        .await
    }

    /// Delete a user (admin only, enforced by the handler)
    pub async fn delete_user(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !UserRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
