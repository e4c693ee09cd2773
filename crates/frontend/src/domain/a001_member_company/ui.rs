use contracts::domain::a001_member_company::aggregate::{MemberCompany, MemberCompanyDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::date_utils::format_date;

const STAGES: &[(&str, &str)] = &[
    ("preliminary", "예비"),
    ("early", "초기"),
    ("growth", "성장"),
    ("scaleup", "도약"),
];

fn stage_label(stage: &str) -> &'static str {
    STAGES
        .iter()
        .find(|(value, _)| *value == stage)
        .map(|(_, label)| *label)
        .unwrap_or("-")
}

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
pub fn MemberCompanyList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<MemberCompany>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (show_form, set_show_form) = signal(false);
    let (editing_id, set_editing_id) = signal(Option::<String>::None);

    let name = RwSignal::new(String::new());
    let registration_no = RwSignal::new(String::new());
    let ceo_name = RwSignal::new(String::new());
    let founded_at = RwSignal::new(String::new());
    let industry = RwSignal::new(String::new());
    let stage = RwSignal::new("preliminary".to_string());
    let homepage = RwSignal::new(String::new());
    let intro = RwSignal::new(String::new());

    let fetch = move || {
        spawn_local(async move {
            match api::list().await {
                Ok(list) => {
                    set_items.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };
    fetch();

    let open_create = move |_| {
        set_editing_id.set(None);
        name.set(String::new());
        registration_no.set(String::new());
        ceo_name.set(String::new());
        founded_at.set(String::new());
        industry.set(String::new());
        stage.set("preliminary".to_string());
        homepage.set(String::new());
        intro.set(String::new());
        set_show_form.set(true);
    };

    let open_edit = move |company: MemberCompany| {
        set_editing_id.set(Some(company.base.id.as_string()));
        name.set(company.base.description.clone());
        registration_no.set(company.registration_no.clone());
        ceo_name.set(company.ceo_name.clone());
        founded_at.set(
            company
                .founded_at
                .map(|d| d.to_string())
                .unwrap_or_default(),
        );
        industry.set(company.industry.clone());
        stage.set(company.stage.as_str().to_string());
        homepage.set(company.homepage.clone().unwrap_or_default());
        intro.set(company.intro.clone().unwrap_or_default());
        set_show_form.set(true);
    };

    let on_save = move |_| {
        let dto = MemberCompanyDto {
            id: editing_id.get_untracked(),
            code: None,
            description: name.get_untracked(),
            registration_no: registration_no.get_untracked(),
            ceo_name: ceo_name.get_untracked(),
            founded_at: founded_at.get_untracked().trim().parse().ok(),
            industry: industry.get_untracked(),
            stage: stage.get_untracked(),
            homepage: opt(homepage.get_untracked()),
            intro: opt(intro.get_untracked()),
            comment: None,
        };
        spawn_local(async move {
            match api::save(&dto).await {
                Ok(_) => {
                    set_show_form.set(false);
                    fetch();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let on_delete = move |id: String| {
        if !confirm("이 기업을 삭제하시겠습니까?") {
            return;
        }
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="member-company-page">
            <div class="page-header">
                <h2>"입주기업 관리"</h2>
                <button class="btn-primary" on:click=open_create>"기업 등록"</button>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">
                    <span>{move || error.get().unwrap_or_default()}</span>
                    <button class="btn-link" on:click=move |_| set_error.set(None)>"닫기"</button>
                </div>
            </Show>

            <Show when=move || show_form.get()>
                <div class="form-panel">
                    <h3>{move || if editing_id.get().is_some() { "기업 정보 수정" } else { "기업 등록" }}</h3>
                    <div class="form-group">
                        <label>"기업명"</label>
                        <input type="text" prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"사업자등록번호 (10자리)"</label>
                        <input type="text" prop:value=move || registration_no.get()
                            on:input=move |ev| registration_no.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"대표자"</label>
                        <input type="text" prop:value=move || ceo_name.get()
                            on:input=move |ev| ceo_name.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"설립일"</label>
                        <input type="date" prop:value=move || founded_at.get()
                            on:input=move |ev| founded_at.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"업종"</label>
                        <input type="text" prop:value=move || industry.get()
                            on:input=move |ev| industry.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"성장단계"</label>
                        <select
                            prop:value=move || stage.get()
                            on:change=move |ev| stage.set(event_target_value(&ev))
                        >
                            {STAGES.iter().map(|(value, label)| {
                                view! { <option value={*value}>{*label}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"홈페이지"</label>
                        <input type="text" prop:value=move || homepage.get()
                            on:input=move |ev| homepage.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"소개"</label>
                        <textarea prop:value=move || intro.get()
                            on:input=move |ev| intro.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-actions">
                        <button class="btn-primary" on:click=on_save>"저장"</button>
                        <button class="btn-secondary" on:click=move |_| set_show_form.set(false)>"취소"</button>
                    </div>
                </div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"기업명"</th>
                        <th>"사업자등록번호"</th>
                        <th>"대표자"</th>
                        <th>"업종"</th>
                        <th>"성장단계"</th>
                        <th>"설립일"</th>
                        <th>"작업"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || items.get().into_iter().map(|company| {
                        let edit_company = company.clone();
                        let delete_id = company.base.id.as_string();
                        view! {
                            <tr>
                                <td>{company.base.description.clone()}</td>
                                <td>{company.registration_no.clone()}</td>
                                <td>{company.ceo_name.clone()}</td>
                                <td>{company.industry.clone()}</td>
                                <td>{stage_label(company.stage.as_str())}</td>
                                <td>{company.founded_at.map(|d| format_date(&d.to_string())).unwrap_or_default()}</td>
                                <td class="row-actions">
                                    <button class="btn-link" on:click=move |_| open_edit(edit_company.clone())>"수정"</button>
                                    <button class="btn-link danger" on:click=move |_| on_delete(delete_id.clone())>"삭제"</button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
