use crate::auth::jwt::{sign_token, TOKEN_LIFETIME_HOURS};
use crate::dtos::user::{LoginRequest, LoginResponse, RegisterUserRequest, UserResponse};
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::models::user::User;
use crate::state::AppState;
use axum::extract::{Extension, State};
use axum::Json;
use bcrypt::{hash, verify, DEFAULT_COST};

pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<(axum::http::StatusCode, Json<UserResponse>), AppError> {
    // Basic validation
    let email = payload.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::validation("email", "A valid email is required"));
    }
    if payload.password.len() < 6 {
        return Err(AppError::validation("password", "Password too short"));
    }

    let password_hash = hash(&payload.password, DEFAULT_COST)
        .map_err(|e| AppError::internal(format!("Hash error: {e}")))?;

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (email, password_hash)
         VALUES ($1, $2)
         RETURNING id, email, password_hash, is_active, created_at",
    )
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(&state.db_pool)
    .await
    .map_err(|e| {
        if let Some(db_err) = e.as_database_error() {
            if db_err.code().as_deref() == Some("23505") {
                return AppError::conflict("Email already registered");
            }
        }
        AppError::Database(e)
    })?;

    Ok((
        axum::http::StatusCode::CREATED,
        Json(UserResponse {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
            created_at: user.created_at,
        }),
    ))
}

pub async fn login_user(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(AppError::Auth);
    }

    // Every failure path returns the same error so the response does not
    // reveal whether the email or the password was wrong.
    let user = sqlx::query_as::<_, User>(
        "SELECT id, email, password_hash, is_active, created_at FROM users WHERE email = $1",
    )
    .bind(payload.email.trim().to_lowercase())
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or(AppError::Auth)?;

    if !user.is_active {
        return Err(AppError::Auth);
    }

    let ok = verify(&payload.password, &user.password_hash)
        .map_err(|e| AppError::internal(format!("Password verify error: {e}")))?;

    if !ok {
        return Err(AppError::Auth);
    }

    let token = sign_token(user.id, &user.email, &state.config.jwt_secret)?;

    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "Bearer",
        expires_in_seconds: (TOKEN_LIFETIME_HOURS * 60 * 60) as usize,
    }))
}

// Authenticated endpoint: returns the operator profile for the id in AuthContext
pub async fn get_me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<UserResponse>, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, email, password_hash, is_active, created_at FROM users WHERE id = $1",
    )
    .bind(auth.user_id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(UserResponse {
        id: user.id,
        email: user.email,
        is_active: user.is_active,
        created_at: user.created_at,
    }))
}
