//! Admin approval queue shared by jobs, media, journalists and companies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists one page of a moderated collection, lets the admin approve or
//! reject a row (with notes) or a selection of rows, and re-fetches the page
//! after every successful decision. Failed decisions show an inline error
//! and keep the current selection.

#[cfg(test)]
#[path = "moderation_table_test.rs"]
mod moderation_table_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::components::resource_list::{row_id, row_summary, row_title};
use crate::net::api::{ApprovalFilter, ModerationKind};
use crate::net::http::HttpClient;
use crate::net::resource::LoadState;
use crate::net::types::ModerationPage;

/// Whether a row is already approved (verified, for companies).
pub fn is_approved(kind: ModerationKind, row: &Value) -> bool {
    let keys: &[&str] = match kind {
        ModerationKind::Companies => &["verified", "isVerified"],
        ModerationKind::Jobs | ModerationKind::Media | ModerationKind::Journalists => &["approved", "isApproved"],
    };
    keys.iter().any(|k| row.get(*k).and_then(Value::as_bool).unwrap_or(false))
}

/// Whether a row that is currently `approved` can take the decision
/// `approve`. Approving an approved row or rejecting a pending one is a no-op.
pub fn can_decide(approved: bool, approve: bool) -> bool {
    approved != approve
}

pub fn toggle_selection(selected: &mut Vec<String>, id: &str) {
    if let Some(pos) = selected.iter().position(|s| s == id) {
        selected.remove(pos);
    } else {
        selected.push(id.to_owned());
    }
}

pub fn page_label(page: u32, total_pages: u32) -> String {
    format!("Page {} of {}", page.max(1), total_pages.max(1))
}

pub fn can_go_next(page: u32, total_pages: u32) -> bool {
    page < total_pages
}

fn filter_label(filter: ApprovalFilter) -> &'static str {
    match filter {
        ApprovalFilter::All => "All",
        ApprovalFilter::Approved => "Approved",
        ApprovalFilter::Pending => "Pending",
    }
}

#[component]
pub fn ModerationTable(kind: ModerationKind) -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let page = RwSignal::new(1_u32);
    let filter = RwSignal::new(ApprovalFilter::All);
    let reload = RwSignal::new(0_u32);
    let listing = RwSignal::new(LoadState::<ModerationPage>::Loading);
    let selected = RwSignal::new(Vec::<String>::new());
    let notes = RwSignal::new(String::new());
    let pending = RwSignal::new(None::<(String, bool)>);
    let action_error = RwSignal::new(None::<String>);

    let list_client = client.clone();
    Effect::new(move || {
        let page_no = page.get();
        let current_filter = filter.get();
        reload.track();
        listing.set(LoadState::Loading);

        #[cfg(feature = "csr")]
        {
            let client = list_client.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::list_moderation(&client, kind, page_no, current_filter).await;
                let _ = listing.try_set(LoadState::from_result(result));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&list_client, page_no, current_filter);
        }
    });

    let decide_client = client.clone();
    let on_confirm = move |_| {
        let Some((id, approved)) = pending.get_untracked() else {
            return;
        };
        let note = notes.get_untracked();

        #[cfg(feature = "csr")]
        {
            let client = decide_client.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::decide(&client, kind, &id, approved, &note).await {
                    Ok(()) => {
                        pending.set(None);
                        notes.set(String::new());
                        action_error.set(None);
                        reload.update(|n| *n += 1);
                    }
                    Err(e) => action_error.set(Some(e.user_message())),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&decide_client, id, approved, note);
        }
    };

    let bulk_client = client;
    let bulk = move |approved: bool| {
        let ids = selected.get_untracked();
        if ids.is_empty() {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let client = bulk_client.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::bulk_decide(&client, kind, &ids, approved).await {
                    Ok(()) => {
                        selected.set(Vec::new());
                        action_error.set(None);
                        reload.update(|n| *n += 1);
                    }
                    Err(e) => action_error.set(Some(e.user_message())),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&bulk_client, ids, approved);
        }
    };
    let bulk_approve = bulk.clone();
    let bulk_reject = bulk;

    let total_pages = move || listing.with(|l| l.loaded().map_or(1, |p| p.total_pages));

    view! {
        <section class="moderation">
            <h1>{format!("Manage {}", kind.title())}</h1>

            <div class="moderation__filters">
                {[ApprovalFilter::All, ApprovalFilter::Approved, ApprovalFilter::Pending]
                    .into_iter()
                    .map(|f| {
                        view! {
                            <button
                                class="moderation__filter"
                                class:active=move || filter.get() == f
                                on:click=move |_| {
                                    filter.set(f);
                                    page.set(1);
                                    selected.set(Vec::new());
                                }
                            >
                                {filter_label(f)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="moderation__bulk">
                <span>{move || format!("{} selected", selected.with(Vec::len))}</span>
                <button on:click=move |_| bulk_approve(true) disabled=move || selected.with(Vec::is_empty)>
                    "Approve selected"
                </button>
                <button on:click=move |_| bulk_reject(false) disabled=move || selected.with(Vec::is_empty)>
                    "Reject selected"
                </button>
            </div>

            {move || action_error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || match listing.get() {
                LoadState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
                LoadState::Failed(message) => view! { <div class="error">{message}</div> }.into_any(),
                LoadState::Loaded(listed) if listed.items.is_empty() => {
                    view! { <p class="moderation__empty">"No items found."</p> }.into_any()
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
                                        let approved = is_approved(kind, row);
                                        let title = row_title(row);
                                        let summary = row_summary(row).unwrap_or_default();
                                        let toggle_id = id.clone();
                                        let checked_id = id.clone();
                                        let approve_id = id.clone();
                                        let reject_id = id;
                                        Some(view! {
                                            <tr>
                                                <td>
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || selected.with(|s| s.contains(&checked_id))
                                                        on:change=move |_| selected.update(|s| toggle_selection(s, &toggle_id))
                                                    />
                                                </td>
                                                <td>{title}</td>
                                                <td>{summary}</td>
                                                <td>{if approved { "Approved" } else { "Pending" }}</td>
                                                <td>
                                                    <button
                                                        disabled=!can_decide(approved, true)
                                                        on:click=move |_| pending.set(Some((approve_id.clone(), true)))
                                                    >
                                                        "Approve"
                                                    </button>
                                                    <button
                                                        disabled=!can_decide(approved, false)
                                                        on:click=move |_| pending.set(Some((reject_id.clone(), false)))
                                                    >
                                                        "Reject"
                                                    </button>
                                                </td>
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

            <div class="modal" class:hidden=move || pending.with(Option::is_none)>
                <h2>
                    {move || {
                        if pending.with(|p| p.as_ref().is_some_and(|(_, approved)| *approved)) {
                            "Approve item"
                        } else {
                            "Reject item"
                        }
                    }}
                </h2>
                <textarea
                    placeholder="Notes (optional)"
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                ></textarea>
                <button on:click=move |_| {
                    pending.set(None);
                    notes.set(String::new());
                }>"Cancel"</button>
                <button class="modal__confirm" on:click=on_confirm>
                    "Confirm"
                </button>
            </div>
        </section>
    }
}
