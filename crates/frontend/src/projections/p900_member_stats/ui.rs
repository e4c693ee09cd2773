use contracts::domain::common::AggregateId;
use contracts::projections::p900_member_stats::{StatsFilter, StatsRow};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::domain::a002_support_project;
use crate::shared::export::{export_to_csv, CsvExportable};

impl CsvExportable for StatsRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "기업명",
            "업종",
            "성장단계",
            "매출액",
            "고용인원",
            "투자유치",
            "수출액",
            "보고서수",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.company_name.clone(),
            self.industry.clone(),
            self.stage.clone(),
            self.revenue.to_string(),
            self.employee_count.to_string(),
            self.investment.to_string(),
            self.exports.to_string(),
            self.report_count.to_string(),
        ]
    }
}

#[component]
pub fn MemberStatsPage() -> impl IntoView {
    let (rows, set_rows) = signal(Vec::<StatsRow>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (projects, set_projects) = signal(Vec::<(String, String)>::new());

    let year = RwSignal::new(String::new());
    let quarter = RwSignal::new(String::new());
    let industry = RwSignal::new(String::new());
    let stage = RwSignal::new(String::new());
    let project = RwSignal::new(String::new());

    let current_filter = move || StatsFilter {
        year: year.get_untracked().trim().parse().ok(),
        quarter: quarter.get_untracked().trim().parse().ok(),
        industry: Some(industry.get_untracked()),
        stage: Some(stage.get_untracked()),
        project: Some(project.get_untracked()),
    };

    let fetch = move || {
        let filter = current_filter();
        spawn_local(async move {
            match api::fetch_stats(&filter).await {
                Ok(list) => {
                    set_rows.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };
    fetch();

    spawn_local(async move {
        if let Ok(list) = a002_support_project::api::list().await {
            let options = list
                .iter()
                .map(|p| (p.base.id.as_string(), p.base.description.clone()))
                .collect();
            set_projects.set(options);
        }
    });

    let on_export = move |_| {
        if let Err(message) = export_to_csv(&rows.get_untracked(), "member_stats.csv") {
            set_error.set(Some(message));
        }
    };

    view! {
        <div class="member-stats-page">
            <div class="page-header">
                <h2>"입주기업 성과 통계"</h2>
                <button class="btn-secondary" on:click=on_export>"CSV 다운로드"</button>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">
                    <span>{move || error.get().unwrap_or_default()}</span>
                    <button class="btn-link" on:click=move |_| set_error.set(None)>"닫기"</button>
                </div>
            </Show>

            <div class="filter-bar">
                <input
                    type="number"
                    placeholder="연도"
                    prop:value=move || year.get()
                    on:change=move |ev| { year.set(event_target_value(&ev)); fetch(); }
                />
                <select
                    prop:value=move || quarter.get()
                    on:change=move |ev| { quarter.set(event_target_value(&ev)); fetch(); }
                >
                    <option value="">"분기: 전체"</option>
                    <option value="1">"1분기"</option>
                    <option value="2">"2분기"</option>
                    <option value="3">"3분기"</option>
                    <option value="4">"4분기"</option>
                </select>
                <input
                    type="text"
                    placeholder="업종"
                    prop:value=move || industry.get()
                    on:change=move |ev| { industry.set(event_target_value(&ev)); fetch(); }
                />
                <select
                    prop:value=move || stage.get()
                    on:change=move |ev| { stage.set(event_target_value(&ev)); fetch(); }
                >
                    <option value="">"성장단계: 전체"</option>
                    <option value="preliminary">"예비"</option>
                    <option value="early">"초기"</option>
                    <option value="growth">"성장"</option>
                    <option value="scaleup">"도약"</option>
                </select>
                <select
                    prop:value=move || project.get()
                    on:change=move |ev| { project.set(event_target_value(&ev)); fetch(); }
                >
                    <option value="">"지원사업: 전체"</option>
                    {move || projects.get().into_iter().map(|(id, name)| {
                        view! { <option value={id}>{name}</option> }
                    }).collect_view()}
                </select>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"기업명"</th>
                        <th>"업종"</th>
                        <th>"성장단계"</th>
                        <th>"매출액"</th>
                        <th>"고용인원"</th>
                        <th>"투자유치"</th>
                        <th>"수출액"</th>
                        <th>"보고서수"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || rows.get().into_iter().map(|row| {
                        view! {
                            <tr>
                                <td>{row.company_name.clone()}</td>
                                <td>{row.industry.clone()}</td>
                                <td>{row.stage.clone()}</td>
                                <td>{row.revenue.to_string()}</td>
                                <td>{row.employee_count.to_string()}</td>
                                <td>{row.investment.to_string()}</td>
                                <td>{row.exports.to_string()}</td>
                                <td>{row.report_count.to_string()}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <Show when=move || rows.get().is_empty()>
                <div class="empty-state">"조건에 맞는 데이터가 없습니다"</div>
            </Show>
        </div>
    }
}
