use axum::{
    extract::{Json, Path},
    http::StatusCode,
};
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};
use serde_json::json;

use crate::system::auth::extractor::CurrentUser;
use crate::system::users::service;

/// GET /api/system/users
pub async fn list() -> Result<Json<Vec<User>>, StatusCode> {
    match service::list_all().await {
        Ok(users) => Ok(Json(users)),
        Err(e) => {
            tracing::error!("Failed to list users: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/system/users/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<User>, StatusCode> {
    match service::get_by_id(&id).await {
        Ok(Some(user)) => Ok(Json(user)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/system/users
pub async fn create(
    CurrentUser(claims): CurrentUser,
    Json(dto): Json<CreateUserDto>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    match service::create(dto, Some(claims.sub.clone())).await {
        Ok(id) => {
            crate::system::logs::service::audit(
                "user.create",
                "user",
                Some(id.clone()),
                Some(claims.username),
                "계정 생성".to_string(),
            );
            Ok(Json(json!({"id": id})))
        }
        Err(e) => {
            tracing::warn!("Failed to create user: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

/// PUT /api/system/users/:id
pub async fn update(
    Path(id): Path<String>,
    Json(mut dto): Json<UpdateUserDto>,
) -> Result<StatusCode, StatusCode> {
    dto.id = id;
    match service::update(dto).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            tracing::warn!("Failed to update user: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

/// DELETE /api/system/users/:id
pub async fn delete(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    // Deleting yourself locks you out
    if claims.sub == id {
        return Err(StatusCode::BAD_REQUEST);
    }
    match service::delete(&id).await {
        Ok(true) => {
            crate::system::logs::service::audit(
                "user.delete",
                "user",
                Some(id),
                Some(claims.username),
                "계정 삭제".to_string(),
            );
            Ok(StatusCode::OK)
        }
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/system/users/:id/change-password
pub async fn change_password(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
    Json(mut dto): Json<ChangePasswordDto>,
) -> Result<StatusCode, StatusCode> {
    dto.user_id = id;
    match service::change_password(dto, &claims.sub).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            tracing::warn!("Failed to change password: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}
