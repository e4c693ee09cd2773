//! Admin screen for account management.

use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::date_utils::format_datetime;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

fn opt(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let (users, set_users) = signal(Vec::<User>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal(Option::<User>::None);

    // form fields
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let company_ref = RwSignal::new(String::new());
    let is_admin = RwSignal::new(false);
    let is_active = RwSignal::new(true);

    let fetch = move || {
        spawn_local(async move {
            match api::list_users().await {
                Ok(list) => {
                    set_users.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };
    fetch();

    let open_create = move |_| {
        set_editing.set(None);
        username.set(String::new());
        password.set(String::new());
        email.set(String::new());
        full_name.set(String::new());
        company_ref.set(String::new());
        is_admin.set(false);
        is_active.set(true);
        set_show_form.set(true);
    };

    let open_edit = move |user: User| {
        username.set(user.username.clone());
        email.set(user.email.clone().unwrap_or_default());
        full_name.set(user.full_name.clone().unwrap_or_default());
        company_ref.set(user.company_ref.clone().unwrap_or_default());
        is_admin.set(user.is_admin);
        is_active.set(user.is_active);
        set_editing.set(Some(user));
        set_show_form.set(true);
    };

    let on_save = move |_| {
        let current = editing.get();
        spawn_local(async move {
            let result = match current {
                None => {
                    let dto = CreateUserDto {
                        username: username.get_untracked(),
                        password: password.get_untracked(),
                        email: opt(email.get_untracked()),
                        full_name: opt(full_name.get_untracked()),
                        is_admin: is_admin.get_untracked(),
                        company_ref: opt(company_ref.get_untracked()),
                    };
                    api::create_user(&dto).await.map(|_| ())
                }
                Some(user) => {
                    let dto = UpdateUserDto {
                        id: user.id.clone(),
                        email: opt(email.get_untracked()),
                        full_name: opt(full_name.get_untracked()),
                        is_active: is_active.get_untracked(),
                        is_admin: is_admin.get_untracked(),
                        company_ref: opt(company_ref.get_untracked()),
                    };
                    api::update_user(&dto).await.map(|_| ())
                }
            };
            match result {
                Ok(()) => {
                    set_show_form.set(false);
                    fetch();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let on_delete = move |id: String| {
        if !confirm("이 계정을 삭제하시겠습니까?") {
            return;
        }
        spawn_local(async move {
            match api::delete_user(&id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let on_reset_password = move |user_id: String| {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        let Ok(Some(new_password)) = window.prompt_with_message("새 비밀번호를 입력하세요") else {
            return;
        };
        if new_password.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            let dto = ChangePasswordDto {
                user_id,
                old_password: None,
                new_password,
            };
            match api::change_password(&dto).await {
                Ok(()) => set_error.set(None),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="users-page">
            <div class="page-header">
                <h2>"계정 관리"</h2>
                <button class="btn-primary" on:click=open_create>"새 계정"</button>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">
                    <span>{move || error.get().unwrap_or_default()}</span>
                    <button class="btn-link" on:click=move |_| set_error.set(None)>"닫기"</button>
                </div>
            </Show>

            <Show when=move || show_form.get()>
                <div class="form-panel">
                    <h3>{move || if editing.get().is_some() { "계정 수정" } else { "계정 생성" }}</h3>
                    <div class="form-group">
                        <label>"아이디"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            disabled=move || editing.get().is_some()
                        />
                    </div>
                    <Show when=move || editing.get().is_none()>
                        <div class="form-group">
                            <label>"비밀번호"</label>
                            <input
                                type="password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>
                    <div class="form-group">
                        <label>"이메일"</label>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"이름"</label>
                        <input
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"소속 기업 ID"</label>
                        <input
                            type="text"
                            prop:value=move || company_ref.get()
                            on:input=move |ev| company_ref.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group checkbox">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || is_admin.get()
                                on:change=move |ev| is_admin.set(event_target_checked(&ev))
                            />
                            "관리자"
                        </label>
                    </div>
                    <Show when=move || editing.get().is_some()>
                        <div class="form-group checkbox">
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || is_active.get()
                                    on:change=move |ev| is_active.set(event_target_checked(&ev))
                                />
                                "활성"
                            </label>
                        </div>
                    </Show>
                    <div class="form-actions">
                        <button class="btn-primary" on:click=on_save>"저장"</button>
                        <button class="btn-secondary" on:click=move |_| set_show_form.set(false)>
                            "취소"
                        </button>
                    </div>
                </div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"아이디"</th>
                        <th>"이름"</th>
                        <th>"이메일"</th>
                        <th>"관리자"</th>
                        <th>"활성"</th>
                        <th>"최근 로그인"</th>
                        <th>"작업"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || users.get().into_iter().map(|user| {
                        let edit_user = user.clone();
                        let delete_id = user.id.clone();
                        let reset_id = user.id.clone();
                        view! {
                            <tr>
                                <td>{user.username.clone()}</td>
                                <td>{user.full_name.clone().unwrap_or_default()}</td>
                                <td>{user.email.clone().unwrap_or_default()}</td>
                                <td>{if user.is_admin { "O" } else { "-" }}</td>
                                <td>{if user.is_active { "O" } else { "-" }}</td>
                                <td>{user.last_login_at.clone().map(|t| format_datetime(&t)).unwrap_or_default()}</td>
                                <td class="row-actions">
                                    <button class="btn-link" on:click=move |_| open_edit(edit_user.clone())>
                                        "수정"
                                    </button>
                                    <button class="btn-link" on:click=move |_| on_reset_password(reset_id.clone())>
                                        "비밀번호"
                                    </button>
                                    <button class="btn-link danger" on:click=move |_| on_delete(delete_id.clone())>
                                        "삭제"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
