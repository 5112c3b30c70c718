//! Admin area: dashboard counters, moderation queues and user status.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route here sits behind `ProtectedRoute` with the admin role. The
//! four moderation queues share `ModerationTable`; users have their own
//! table because their decision is a status string rather than approval.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::components::moderation_table::{ModerationTable, can_go_next, page_label};
use crate::components::resource_list::{row_id, row_title};
use crate::net::api::{ADMIN_DASHBOARD_PATH, ModerationKind, RecordKind, dashboard_counter};
use crate::net::http::HttpClient;
use crate::net::resource::{LoadState, use_resource_state};
use crate::net::types::{ModerationPage, Role};

/// One dashboard card: payload section, label, and the queue it opens.
pub struct StatCard {
    pub section: &'static str,
    pub label: &'static str,
    pub link: Option<&'static str>,
}

pub const STAT_CARDS: &[StatCard] = &[
    StatCard { section: "users", label: "Users", link: Some("/admin/users") },
    StatCard { section: "journalists", label: "Journalists", link: Some("/admin/journalists") },
    StatCard { section: "companies", label: "Companies", link: Some("/admin/companies") },
    StatCard { section: "jobs", label: "Jobs", link: Some("/admin/jobs") },
    StatCard { section: "media", label: "Media", link: Some("/admin/media") },
    StatCard { section: "applications", label: "Applications", link: Some("/admin/applications") },
    StatCard { section: "purchases", label: "Purchases", link: Some("/admin/purchases") },
];

/// `(label, status)` buttons offered for a user in `status`. Only pending
/// accounts can be decided.
pub fn user_actions(status: &str) -> &'static [(&'static str, &'static str)] {
    if status == "pending" { &[("Activate", "active"), ("Suspend", "suspended")] } else { &[] }
}

pub fn role_filter(raw: &str) -> Option<Role> {
    match raw {
        "journalist" => Some(Role::Journalist),
        "company" => Some(Role::Company),
        "admin" => Some(Role::Admin),
        _ => None,
    }
}

fn text_at(row: &Value, pointer: &str) -> String {
    match row.pointer(pointer) {
        Some(Value::String(s)) => s.trim().to_owned(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn person_at(row: &Value, pointer: &str) -> String {
    let first = text_at(row, &format!("{pointer}/firstName"));
    let last = text_at(row, &format!("{pointer}/lastName"));
    format!("{first} {last}").trim().to_owned()
}

/// `createdAt` as its date part.
fn created_on(row: &Value) -> String {
    text_at(row, "/createdAt").chars().take(10).collect()
}

pub fn record_headers(kind: RecordKind) -> &'static [&'static str] {
    match kind {
        RecordKind::Applications => &["Applicant", "Job", "Company", "Status", "Applied"],
        RecordKind::Purchases => &["Buyer", "Media", "Seller", "Amount", "Status", "Date"],
    }
}

/// Table cells for one record, matching [`record_headers`].
pub fn record_cells(kind: RecordKind, row: &Value) -> Vec<String> {
    match kind {
        RecordKind::Applications => vec![
            person_at(row, "/journalist/user"),
            text_at(row, "/job/title"),
            text_at(row, "/job/company/name"),
            text_at(row, "/status"),
            created_on(row),
        ],
        RecordKind::Purchases => {
            let amount = text_at(row, "/amount");
            let currency = text_at(row, "/currency");
            vec![
                person_at(row, "/buyer"),
                text_at(row, "/mediaContent/title"),
                person_at(row, "/mediaContent/journalist/user"),
                if amount.is_empty() { String::new() } else { format!("${amount} {currency}").trim().to_owned() },
                text_at(row, "/status"),
                created_on(row),
            ]
        }
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let stats = use_resource_state::<Value>(ADMIN_DASHBOARD_PATH, &[]);

    view! {
        <section class="admin-dashboard">
            <h1>"Admin dashboard"</h1>
            {move || match stats.get() {
                LoadState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
                LoadState::Failed(message) => view! { <div class="error">{message}</div> }.into_any(),
                LoadState::Loaded(body) => {
                    view! {
                        <div class="dashboard__stats">
                            {STAT_CARDS
                                .iter()
                                .map(|card| {
                                    let (total, pending) = dashboard_counter(&body, card.section);
                                    let value = view! {
                                        <span class="stat-card__value">{total}</span>
                                        <span class="stat-card__label">{card.label}</span>
                                        {(pending > 0)
                                            .then(|| view! { <span class="stat-card__pending">{format!("{pending} pending")}</span> })}
                                    };
                                    match card.link {
                                        Some(href) => view! { <a class="stat-card" href=href>{value}</a> }.into_any(),
                                        None => view! { <div class="stat-card">{value}</div> }.into_any(),
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

#[component]
pub fn AdminModerationPage(kind: ModerationKind) -> impl IntoView {
    view! { <ModerationTable kind=kind/> }
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let page = RwSignal::new(1_u32);
    let status = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let reload = RwSignal::new(0_u32);
    let listing = RwSignal::new(LoadState::<ModerationPage>::Loading);
    let action_error = RwSignal::new(None::<String>);
    let status_change = RwSignal::new(None::<(String, &'static str)>);

    let list_client = client.clone();
    Effect::new(move || {
        let page_no = page.get();
        let status_value = status.get();
        let role_value = role_filter(&role.get());
        reload.track();
        listing.set(LoadState::Loading);

        #[cfg(feature = "csr")]
        {
            let client = list_client.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::list_users(&client, page_no, Some(&status_value), role_value).await;
                let _ = listing.try_set(LoadState::from_result(result));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&list_client, page_no, status_value, role_value);
        }
    });

    // Row buttons only record the request; the update runs here.
    Effect::new(move || {
        let Some((user_id, next)) = status_change.get() else {
            return;
        };
        status_change.set(None);

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_user_status(&client, &user_id, next).await {
                    Ok(()) => {
                        let _ = action_error.try_set(None);
                        reload.update(|n| *n += 1);
                    }
                    Err(e) => {
                        let _ = action_error.try_set(Some(e.user_message()));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&client, user_id, next);
        }
    });

    let total_pages = move || listing.with(|l| l.loaded().map_or(1, |p| p.total_pages));

    view! {
        <section class="moderation">
            <h1>"Manage Users"</h1>
            <div class="moderation__filters">
                <select on:change=move |ev| {
                    status.set(event_target_value(&ev));
                    page.set(1);
                }>
                    <option value="">"All statuses"</option>
                    <option value="active">"Active"</option>
                    <option value="pending">"Pending"</option>
                    <option value="suspended">"Suspended"</option>
                </select>
                <select on:change=move |ev| {
                    role.set(event_target_value(&ev));
                    page.set(1);
                }>
                    <option value="">"All roles"</option>
                    <option value="journalist">"Journalist"</option>
                    <option value="company">"Company"</option>
                    <option value="admin">"Admin"</option>
                </select>
            </div>

            {move || action_error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || match listing.get() {
                LoadState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
                LoadState::Failed(message) => view! { <div class="error">{message}</div> }.into_any(),
                LoadState::Loaded(listed) if listed.items.is_empty() => {
                    view! { <p class="moderation__empty">"No users found."</p> }.into_any()
                }
                LoadState::Loaded(listed) => {
                    view! {
                        <table class="moderation__table">
                            <tbody>
                                {listed
                                    .items
                                    .iter()
                                    .filter_map(|row| {
                                        let id = row_id(row)?;
                                        let field = |key: &str| row.get(key).and_then(Value::as_str).unwrap_or_default().to_owned();
                                        let current = field("status");
                                        let actions = user_actions(&current)
                                            .iter()
                                            .map(|(label, next)| {
                                                let id = id.clone();
                                                view! {
                                                    <button on:click=move |_| status_change.set(Some((id.clone(), *next)))>
                                                        {*label}
                                                    </button>
                                                }
                                            })
                                            .collect_view();
                                        Some(view! {
                                            <tr>
                                                <td>{row_title(row)}</td>
                                                <td>{field("email")}</td>
                                                <td>{field("role")}</td>
                                                <td>{current}</td>
                                                <td>{actions}</td>
                                            </tr>
                                        })
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}

            <div class="moderation__pager">
                <button disabled=move || page.get() <= 1 on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))>
                    "Previous"
                </button>
                <span>{move || page_label(page.get(), total_pages())}</span>
                <button
                    disabled=move || !can_go_next(page.get(), total_pages())
                    on:click=move |_| page.update(|p| *p += 1)
                >
                    "Next"
                </button>
            </div>
        </section>
    }
}

/// Read-only, paginated applications or purchases.
#[component]
pub fn AdminRecordsPage(kind: RecordKind) -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let page = RwSignal::new(1_u32);
    let listing = RwSignal::new(LoadState::<ModerationPage>::Loading);

    Effect::new(move || {
        let page_no = page.get();
        listing.set(LoadState::Loading);

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::list_records(&client, kind, page_no).await;
                let _ = listing.try_set(LoadState::from_result(result));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&client, page_no);
        }
    });

    let total_pages = move || listing.with(|l| l.loaded().map_or(1, |p| p.total_pages));

    view! {
        <section class="moderation">
            <h1>{format!("All {}", kind.title())}</h1>
            {move || match listing.get() {
                LoadState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
                LoadState::Failed(message) => view! { <div class="error">{message}</div> }.into_any(),
                LoadState::Loaded(listed) if listed.items.is_empty() => {
                    view! { <p class="moderation__empty">"No records found."</p> }.into_any()
                }
                LoadState::Loaded(listed) => {
                    view! {
                        <table class="moderation__table">
                            <thead>
                                <tr>
                                    {record_headers(kind).iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {listed
                                    .items
                                    .iter()
                                    .map(|row| {
                                        let cells = record_cells(kind, row);
                                        view! {
                                            <tr>{cells.into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}</tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}
            <div class="moderation__pager">
                <button disabled=move || page.get() <= 1 on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))>
                    "Previous"
                </button>
                <span>{move || page_label(page.get(), total_pages())}</span>
                <button
                    disabled=move || !can_go_next(page.get(), total_pages())
                    on:click=move |_| page.update(|p| *p += 1)
                >
                    "Next"
                </button>
            </div>
        </section>
    }
}
