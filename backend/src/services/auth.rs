use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use sqlx::SqlitePool;

use crate::{
    error::{AppError, Result},
    models::{
        auth::Claims,
        user::{AuthResponse, LoginRequest, RegisterRequest, User, UserProfile, UserRole},
    },
};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Treats `None` and `""` alike, the way the dashboard posts blank fields.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

pub struct AuthService;

impl AuthService {
    /// Create the account and hand back a session token for it.
    /// Duplicates are detected from the unique index on `users.email`.
    pub async fn register(
        pool: &SqlitePool,
        req: &RegisterRequest,
        jwt_secret: &str,
        ttl_days: u64,
        bcrypt_cost: u32,
    ) -> Result<AuthResponse> {
        let (Some(email), Some(password), Some(name)) =
            (present(&req.email), present(&req.password), present(&req.name))
        else {
            return Err(AppError::validation("All fields are required"));
        };
        let role = req.role.unwrap_or_default();

        let user = Self::create_user(pool, email, password, name, role, bcrypt_cost).await?;
        Self::issue(user, jwt_secret, ttl_days)
    }

    /// Hash the password and insert the user row.
    pub async fn create_user(
        pool: &SqlitePool,
        email: &str,
        password: &str,
        name: &str,
        role: UserRole,
        bcrypt_cost: u32,
    ) -> Result<UserProfile> {
        let password_hash =
            bcrypt::hash(password, bcrypt_cost).map_err(|e| AppError::Internal(e.into()))?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash, name, role)
             VALUES (?, ?, ?, ?)
             RETURNING *",
        )
        .bind(email)
        .bind(&password_hash)
        .bind(name)
        .bind(role.as_str())
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if e.as_database_error().is_some_and(|d| d.is_unique_violation()) {
                AppError::DuplicateEmail
            } else {
                AppError::Database(e)
            }
        })?;

        tracing::info!(user_id = user.id, %role, "user registered");
        Ok(user.into())
    }

    /// Unknown email and wrong password fail identically.
    pub async fn login(
        pool: &SqlitePool,
        req: &LoginRequest,
        jwt_secret: &str,
        ttl_days: u64,
    ) -> Result<AuthResponse> {
        let (Some(email), Some(password)) = (present(&req.email), present(&req.password)) else {
            return Err(AppError::validation("Email and password are required"));
        };

        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let valid = bcrypt::verify(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!(user_id = user.id, "user logged in");
        Self::issue(user.into(), jwt_secret, ttl_days)
    }

    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<UserProfile>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(user.map(Into::into))
    }

    fn issue(user: UserProfile, jwt_secret: &str, ttl_days: u64) -> Result<AuthResponse> {
        let token = Self::generate_access_token(&user, jwt_secret, ttl_days)?;
        Ok(AuthResponse { token, user })
    }

    pub fn generate_access_token(
        user: &UserProfile,
        secret: &str,
        ttl_days: u64,
    ) -> Result<String> {
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            iat: now,
            exp: now + (ttl_days * SECONDS_PER_DAY) as usize,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(e.into()))?;
        Ok(token)
    }
}
