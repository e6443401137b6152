use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::setting::UpsertSettingDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::settings::SettingsService,
        state::AppState,
    },
};

/// GET /api/settings
/// List all settings with secrets masked (admin)
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let settings_service = SettingsService::new(&state.db, &state.http_client);
    let settings = settings_service.get_all().await?;

    let dtos: Vec<_> = settings.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// PUT /api/settings
/// Create or replace a setting (admin)
pub async fn upsert_setting(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<UpsertSettingDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let settings_service = SettingsService::new(&state.db, &state.http_client);
    let setting = settings_service.upsert(dto.key, dto.value).await?;

    Ok((StatusCode::OK, Json(setting.into_dto())))
}

/// GET /api/settings/{key}
/// Get one setting with its value masked if secret (admin)
pub async fn get_setting(
    State(state): State<AppState>,
    session: Session,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let settings_service = SettingsService::new(&state.db, &state.http_client);
    let setting = settings_service
        .get(&key)
        .await?
        .ok_or_else(|| AppError::NotFound("Setting not found".to_string()))?;

    Ok((StatusCode::OK, Json(setting.into_dto())))
}

/// DELETE /api/settings/{key}
/// Delete a setting (admin)
pub async fn delete_setting(
    State(state): State<AppState>,
    session: Session,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let settings_service = SettingsService::new(&state.db, &state.http_client);

    if settings_service.delete(&key).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Setting not found".to_string()))
    }
}

/// POST /api/settings/validate/{provider}
/// Probe a provider's configuration with one live request (admin)
pub async fn validate_provider(
    State(state): State<AppState>,
    session: Session,
    Path(provider): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let settings_service = SettingsService::new(&state.db, &state.http_client);
    let validation = settings_service.validate_provider(&provider).await?;

    Ok((StatusCode::OK, Json(validation.into_dto())))
}
