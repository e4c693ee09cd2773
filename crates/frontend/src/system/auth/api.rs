use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::shared::api_utils::{self, ApiError};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    api_utils::post_json("/api/system/auth/login", &request).await
}

/// Refresh access token using refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh_token };
    api_utils::post_json("/api/system/auth/refresh", &request).await
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh_token };
    api_utils::post_json_no_content("/api/system/auth/logout", &request).await
}

/// Get current user info for the stored access token
pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    api_utils::get_json("/api/system/auth/me").await
}
