use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        auth::LoginCodeIssuedDto,
        user::{CreateUserDto, SetAdminDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CreateUserParam, GetAllUsersParam, SetAdminParam},
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

use super::PaginationQuery;

/// GET /api/users
/// List console users (admin)
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user_service = UserService::new(&state.db);
    let users = user_service
        .get_all_users(GetAllUsersParam {
            page: pagination.page,
            per_page: pagination.per_page,
        })
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// POST /api/users
/// Create a console user (admin)
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user_service = UserService::new(&state.db);
    let user = user_service
        .create_user(CreateUserParam {
            name: dto.name,
            email: dto.email,
            admin: dto.admin,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// PUT /api/users/{user_id}/admin
/// Grant or revoke admin privileges (admin)
pub async fn set_admin(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(dto): Json<SetAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let acting_user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if acting_user.id == user_id && !dto.admin {
        return Err(AppError::BadRequest(
            "Admins cannot revoke their own privileges".to_string(),
        ));
    }

    let user_service = UserService::new(&state.db);
    user_service
        .set_admin(SetAdminParam {
            user_id,
            is_admin: dto.admin,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/users/{user_id}/login-code
/// Issue a one-time login code for a user (admin)
pub async fn issue_login_code(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let auth_service = AuthService::new(&state.db, &state.login_code_service);
    let (code, expires_in_seconds) = auth_service.issue_code(user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(LoginCodeIssuedDto {
            user_id,
            code,
            expires_in_seconds,
        }),
    ))
}
