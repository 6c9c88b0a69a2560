//! Authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::Config,
    constants::{roles, REFRESH_TOKEN_LENGTH},
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    utils::crypto,
    utils::validation,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub name: String,
    pub roles: Vec<String>,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user
    pub async fn register(
        pool: &PgPool,
        name: &str,
        email: &str,
        password: &str,
        requested_roles: Option<Vec<String>>,
    ) -> AppResult<User> {
        // Check if email exists
        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let user_roles = requested_roles.unwrap_or_else(|| vec![roles::STUDENT.to_string()]);
        validation::validate_roles(&user_roles)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        // Hash password
        let password_hash = Self::hash_password(password)?;

        // Create user
        let user = UserRepository::create(pool, name, email, &password_hash, &user_roles).await?;

        Ok(user)
    }

    /// Login with email and password
    pub async fn login(
        pool: &PgPool,
        mut redis: ConnectionManager,
        config: &Config,
        email: &str,
        password: &str,
    ) -> AppResult<(User, String, String, i64)> {
        // Find user
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // Verify password
        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        // Update last login
        UserRepository::update_last_login(pool, &user.id).await?;

        // Generate tokens
        let (access_token, expires_in) = Self::generate_access_token(&user, config)?;
        let refresh_token = crypto::generate_secure_token(REFRESH_TOKEN_LENGTH);

        // Store a digest of the refresh token in Redis
        let key = Self::refresh_token_key(&user.id, &refresh_token);
        let expiry = config.jwt.refresh_token_expiry_days * 24 * 60 * 60;
        redis.set_ex::<_, _, ()>(&key, "1", expiry as u64).await?;

        Ok((user, access_token, refresh_token, expires_in))
    }

    /// Refresh access token
    pub async fn refresh_token(
        pool: &PgPool,
        mut redis: ConnectionManager,
        config: &Config,
        refresh_token: &str,
    ) -> AppResult<(String, String, i64)> {
        // Find the refresh token digest in Redis (check all users)
        let pattern = format!("refresh_token:*:{}", crypto::hash_string(refresh_token));
        let keys: Vec<String> = redis::cmd("KEYS")
            .arg(&pattern)
            .query_async(&mut redis)
            .await?;

        if keys.is_empty() {
            return Err(AppError::InvalidToken);
        }

        // Extract user_id from key
        let key = &keys[0];
        let parts: Vec<&str> = key.split(':').collect();
        if parts.len() != 3 {
            return Err(AppError::InvalidToken);
        }

        let user_id = Uuid::parse_str(parts[1]).map_err(|_| AppError::InvalidToken)?;

        // Get user
        let user = UserRepository::find_by_id(pool, &user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        // Delete old refresh token
        redis.del::<_, ()>(key).await?;

        // Generate new tokens
        let (access_token, expires_in) = Self::generate_access_token(&user, config)?;
        let new_refresh_token = crypto::generate_secure_token(REFRESH_TOKEN_LENGTH);

        // Store new refresh token digest
        let new_key = Self::refresh_token_key(&user.id, &new_refresh_token);
        let expiry = config.jwt.refresh_token_expiry_days * 24 * 60 * 60;
        redis.set_ex::<_, _, ()>(&new_key, "1", expiry as u64).await?;

        Ok((access_token, new_refresh_token, expires_in))
    }

    /// Logout (invalidate refresh tokens)
    pub async fn logout(
        mut redis: ConnectionManager,
        user_id: &Uuid,
        all_sessions: bool,
    ) -> AppResult<()> {
        if all_sessions {
            // Delete all refresh tokens for user
            let pattern = format!("refresh_token:{}:*", user_id);
            let keys: Vec<String> = redis::cmd("KEYS")
                .arg(&pattern)
                .query_async(&mut redis)
                .await?;

            for key in keys {
                redis.del::<_, ()>(&key).await?;
            }
        }

        Ok(())
    }

    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, user_id: &Uuid) -> AppResult<Option<User>> {
        UserRepository::find_by_id(pool, user_id).await
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Redis key holding a refresh token digest
    fn refresh_token_key(user_id: &Uuid, refresh_token: &str) -> String {
        format!("refresh_token:{}:{}", user_id, crypto::hash_string(refresh_token))
    }

    /// Hash password using Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Generate access token
    fn generate_access_token(user: &User, config: &Config) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(config.jwt.expiry_hours);
        let expires_in = config.jwt.expiry_hours * 3600;

        let claims = Claims {
            sub: user.id.to_string(),
            name: user.name.clone(),
            roles: user.roles.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Sara Tesfaye".to_string(),
            email: "sara@example.com".to_string(),
            password_hash: String::new(),
            roles: vec![roles::STUDENT.to_string()],
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = AuthService::hash_password("CorrectHorse9").unwrap();
        assert!(AuthService::verify_password("CorrectHorse9", &hash).unwrap());
        assert!(!AuthService::verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_token_roundtrip() {
        let config = Config {
            server: crate::config::ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
            database: crate::config::DatabaseConfig {
                url: String::new(),
                max_connections: 1,
            },
            redis: crate::config::RedisConfig { url: String::new() },
            jwt: crate::config::JwtConfig {
                secret: "test-secret".to_string(),
                expiry_hours: 1,
                refresh_token_expiry_days: 7,
            },
        };

        let user = test_user();
        let (token, expires_in) = AuthService::generate_access_token(&user, &config).unwrap();
        assert_eq!(expires_in, 3600);

        let claims = AuthService::verify_token(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.roles, vec![roles::STUDENT.to_string()]);

        assert!(AuthService::verify_token(&token, "other-secret").is_err());
    }

    #[test]
    fn test_refresh_token_key_hides_token() {
        let user_id = Uuid::new_v4();
        let key = AuthService::refresh_token_key(&user_id, "opaque-token");
        assert!(key.starts_with(&format!("refresh_token:{}:", user_id)));
        assert!(!key.contains("opaque-token"));
    }
}
