//! Generic listing for an API collection of opaque JSON rows.

#[cfg(test)]
#[path = "resource_list_test.rs"]
mod resource_list_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::net::resource::{LoadState, use_resource_state};

const SUMMARY_MAX_CHARS: usize = 140;

fn str_field<'a>(row: &'a Value, key: &str) -> Option<&'a str> {
    row.get(key).and_then(Value::as_str).map(str::trim).filter(|s| !s.is_empty())
}

/// Id as a string, whether the API sent a number or a string.
pub fn row_id(row: &Value) -> Option<String> {
    match row.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Best human label for a row.
pub fn row_title(row: &Value) -> String {
    if let Some(title) = ["title", "name", "companyName"].iter().find_map(|k| str_field(row, k)) {
        return title.to_owned();
    }
    let first = str_field(row, "firstName");
    let last = str_field(row, "lastName");
    match (first, last) {
        (Some(f), Some(l)) => format!("{f} {l}"),
        (Some(n), None) | (None, Some(n)) => n.to_owned(),
        (None, None) => row_id(row).map_or_else(|| "Untitled".to_owned(), |id| format!("#{id}")),
    }
}

/// Secondary line: location when known, otherwise a shortened description.
pub fn row_summary(row: &Value) -> Option<String> {
    let location = match (str_field(row, "city"), str_field(row, "country")) {
        (Some(city), Some(country)) => Some(format!("{city}, {country}")),
        (Some(one), None) | (None, Some(one)) => Some(one.to_owned()),
        (None, None) => str_field(row, "location").map(str::to_owned),
    };
    location.or_else(|| str_field(row, "description").map(truncate))
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= SUMMARY_MAX_CHARS {
        return text.to_owned();
    }
    let cut: String = text.chars().take(SUMMARY_MAX_CHARS).collect();
    format!("{}...", cut.trim_end())
}

/// Rows of a collection response: a bare array, or the first array found in
/// an envelope object such as `{ "jobs": [...] }`.
pub fn collection_rows(body: &Value) -> Vec<Value> {
    match body {
        Value::Array(rows) => rows.clone(),
        Value::Object(fields) => {
            fields.values().find_map(Value::as_array).cloned().unwrap_or_default()
        }
        _ => Vec::new(),
    }
}

/// Detail page for a row under `link_base`, when the row has an id.
pub fn row_href(link_base: &str, row: &Value) -> Option<String> {
    if link_base.is_empty() {
        return None;
    }
    row_id(row).map(|id| format!("{}/{id}", link_base.trim_end_matches('/')))
}

/// Render already-loaded rows. With a `link_base`, each title links to
/// `<link_base>/<id>`.
#[component]
pub fn ResourceRows(
    rows: Vec<Value>,
    #[prop(optional)] empty: &'static str,
    #[prop(optional)] link_base: &'static str,
) -> impl IntoView {
    if rows.is_empty() {
        let message = if empty.is_empty() { "Nothing here yet." } else { empty };
        return view! { <p class="resource-list__empty">{message}</p> }.into_any();
    }
    view! {
        <ul class="resource-list__items">
            {rows
                .iter()
                .map(|row| {
                    let title = row_title(row);
                    let summary = row_summary(row);
                    let heading = match row_href(link_base, row) {
                        Some(href) => view! { <a class="resource-list__title" href=href>{title}</a> }.into_any(),
                        None => view! { <span class="resource-list__title">{title}</span> }.into_any(),
                    };
                    view! {
                        <li class="resource-list__item">
                            {heading}
                            {summary.map(|s| view! { <span class="resource-list__summary">{s}</span> })}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

/// Fetch `path` on mount and render the rows, a loading line, or the error.
#[component]
pub fn ResourceList(
    title: &'static str,
    path: &'static str,
    #[prop(optional)] empty: &'static str,
    #[prop(optional)] link_base: &'static str,
) -> impl IntoView {
    let state = use_resource_state::<Value>(path, &[]);
    view! {
        <section class="resource-list">
            <h1>{title}</h1>
            {move || match state.get() {
                LoadState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
                LoadState::Failed(message) => view! { <div class="error">{message}</div> }.into_any(),
                LoadState::Loaded(body) => {
                    view! { <ResourceRows rows=collection_rows(&body) empty=empty link_base=link_base/> }.into_any()
                }
            }}
        </section>
    }
}
