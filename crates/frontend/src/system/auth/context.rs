use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Auth context provider component.
///
/// On mount, restores the session from localStorage: validates the stored
/// access token against the backend and falls back to the refresh token
/// before giving up and clearing both.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                return;
            };
            match api::get_current_user().await {
                Ok(user_info) => {
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                    });
                }
                Err(_) => {
                    // Token invalid, try refresh
                    let Some(refresh_token) = storage::get_refresh_token() else {
                        storage::clear_tokens();
                        return;
                    };
                    match api::refresh_token(refresh_token).await {
                        Ok(response) => {
                            storage::save_access_token(&response.access_token);
                            if let Ok(user_info) = api::get_current_user().await {
                                set_auth_state.set(AuthState {
                                    access_token: Some(response.access_token),
                                    user_info: Some(user_info),
                                });
                            }
                        }
                        Err(_) => {
                            storage::clear_tokens();
                        }
                    }
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Check if current user is admin
pub fn is_admin(auth_state: &AuthState) -> bool {
    auth_state
        .user_info
        .as_ref()
        .map(|u| u.is_admin)
        .unwrap_or(false)
}

/// Helper: company the current member account is bound to, if any
pub fn company_ref(auth_state: &AuthState) -> Option<String> {
    auth_state.user_info.as_ref()?.company_ref.clone()
}

/// Teardown: revoke the refresh token and clear local session state.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    spawn_local(async move {
        if let Some(refresh_token) = storage::get_refresh_token() {
            let _ = api::logout(refresh_token).await;
        }
        storage::clear_tokens();
        set_auth_state.set(AuthState::default());
    });
}
