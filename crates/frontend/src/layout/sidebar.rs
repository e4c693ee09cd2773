use leptos::prelude::*;

use super::Page;
use crate::system::auth::context::{do_logout, is_admin, use_auth};

const MEMBER_PAGES: &[Page] = &[
    Page::SupportProjects,
    Page::Applications,
    Page::Reports,
    Page::Tickets,
    Page::Faq,
];

const ADMIN_PAGES: &[Page] = &[Page::MemberCompanies, Page::Stats, Page::Users];

const LOG_PAGES: &[Page] = &[
    Page::LogsGeneral,
    Page::LogsException,
    Page::LogsPerformance,
    Page::LogsAudit,
];

#[component]
fn NavSection(
    label: &'static str,
    pages: &'static [Page],
    current: ReadSignal<Page>,
    set_current: WriteSignal<Page>,
) -> impl IntoView {
    view! {
        <div class="nav-section">
            <div class="nav-section-label">{label}</div>
            {pages.iter().map(|&page| {
                view! {
                    <button
                        class="nav-item"
                        class:active=move || current.get() == page
                        on:click=move |_| set_current.set(page)
                    >
                        {page.title()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn Sidebar(current: ReadSignal<Page>, set_current: WriteSignal<Page>) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let admin = move || is_admin(&auth_state.get());

    view! {
        <nav class="sidebar">
            <div class="sidebar-title">"창업지원 포털"</div>
            <div class="sidebar-user">
                {move || {
                    auth_state.get().user_info
                        .map(|u| u.full_name.unwrap_or(u.username))
                        .unwrap_or_default()
                }}
            </div>

            <NavSection label="포털" pages=MEMBER_PAGES current=current set_current=set_current />

            <Show when=admin>
                <NavSection label="관리" pages=ADMIN_PAGES current=current set_current=set_current />
                <NavSection label="시스템 로그" pages=LOG_PAGES current=current set_current=set_current />
            </Show>

            <button class="btn-logout" on:click=move |_| do_logout(set_auth_state)>
                "로그아웃"
            </button>
        </nav>
    }
}
