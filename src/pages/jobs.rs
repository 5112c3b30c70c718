//! Public job listing with optional `?company=<id>` and `?jobId=<id>` filters.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use serde_json::Value;

use crate::components::resource_list::{ResourceRows, collection_rows};
use crate::net::api::JOBS_PATH;
use crate::net::resource::{LoadState, use_resource_state};

fn numeric_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Integer at the start of `raw`, ignoring leading whitespace and whatever
/// follows the digits: `"7abc"` is 7, `"5.0"` is 5, `"abc"` is `None`.
pub fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Whether `value` equals the query parameter `param` read as a leading
/// integer. A parameter without leading digits matches nothing.
fn id_matches(value: Option<&Value>, param: &str) -> bool {
    let Some(wanted) = leading_int(param) else {
        return false;
    };
    value.and_then(numeric_id) == Some(wanted)
}

/// Keep the jobs matching every filter that is present.
pub fn filter_jobs(jobs: &[Value], company: Option<&str>, job_id: Option<&str>) -> Vec<Value> {
    jobs.iter()
        .filter(|job| company.is_none_or(|c| id_matches(job.get("company").and_then(|co| co.get("id")), c)))
        .filter(|job| job_id.is_none_or(|id| id_matches(job.get("id"), id)))
        .cloned()
        .collect()
}

#[component]
pub fn JobsPage() -> impl IntoView {
    let query = use_query_map();
    let state = use_resource_state::<Value>(JOBS_PATH, &[]);

    view! {
        <section class="resource-list">
            <h1>"Jobs"</h1>
            {move || match state.get() {
                LoadState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
                LoadState::Failed(message) => view! { <div class="error">{message}</div> }.into_any(),
                LoadState::Loaded(body) => {
                    let params = query.get();
                    let rows = filter_jobs(
                        &collection_rows(&body),
                        params.get("company").as_deref(),
                        params.get("jobId").as_deref(),
                    );
                    view! { <ResourceRows rows=rows link_base="/jobs" empty="No jobs match."/> }.into_any()
                }
            }}
        </section>
    }
}
