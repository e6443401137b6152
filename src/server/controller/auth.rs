use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::auth::LoginDto,
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::User,
        service::auth::{AuthService, LoginParam},
        state::AppState,
    },
};

/// POST /api/auth/login
/// Redeem a one-time login code for a session
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.login_code_service);

    let user = auth_service
        .login(LoginParam {
            email: dto.email,
            name: dto.name,
            code: dto.code,
        })
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /api/auth/logout
/// Clear the session
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/user
/// Get the currently authenticated user
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(User::from_entity(user).into_dto())))
}
