//! Global search across journalists, companies, jobs and media.
//!
//! The page loads everything once on mount (empty query) and re-runs the
//! search on every submit. Results come back grouped by collection.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::components::resource_list::ResourceRows;
use crate::net::api::SearchScope;
use crate::net::http::HttpClient;
use crate::net::resource::LoadState;

/// One group of search hits.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchSection {
    pub label: &'static str,
    pub link_base: &'static str,
    pub rows: Vec<Value>,
}

/// Result key, heading and detail route per collection.
const SECTIONS: &[(&str, &str, &str)] = &[
    ("journalists", "Journalists", "/journalists"),
    ("companies", "Companies", "/companies"),
    ("jobs", "Jobs", "/jobs"),
    ("mediaContent", "Media", ""),
];

/// Non-empty result groups, in a fixed order.
pub fn search_sections(results: &Value) -> Vec<SearchSection> {
    SECTIONS
        .iter()
        .filter_map(|(key, label, link_base)| {
            let rows = results.get(*key)?.as_array()?.clone();
            (!rows.is_empty()).then_some(SearchSection { label: *label, link_base: *link_base, rows })
        })
        .collect()
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let query = RwSignal::new(String::new());
    let scope = RwSignal::new(SearchScope::All);
    let submitted = RwSignal::new((String::new(), SearchScope::All));
    let results = RwSignal::new(LoadState::<Value>::Loading);

    Effect::new(move || {
        let (term, current_scope) = submitted.get();
        results.set(LoadState::Loading);

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::search(&client, &term, current_scope).await;
                if submitted.try_with_untracked(|s| s.0 == term && s.1 == current_scope) == Some(true) {
                    let _ = results.try_set(LoadState::from_result(result));
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&client, term, current_scope);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitted.set((query.get_untracked(), scope.get_untracked()));
    };

    view! {
        <section class="search">
            <h1>"Search"</h1>
            <form class="search__form" on:submit=on_submit>
                <input
                    class="form-field__input"
                    type="search"
                    placeholder="Names, skills, job titles..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <select
                    class="form-field__input"
                    on:change=move |ev| scope.set(SearchScope::from_param(&event_target_value(&ev)))
                >
                    {SearchScope::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_param()>{s.label()}</option> })
                        .collect_view()}
                </select>
                <button class="button" type="submit">"Search"</button>
            </form>
            {move || match results.get() {
                LoadState::Loading => view! { <div class="loading">"Searching..."</div> }.into_any(),
                LoadState::Failed(message) => view! { <div class="error">{message}</div> }.into_any(),
                LoadState::Loaded(body) => {
                    let sections = search_sections(&body);
                    if sections.is_empty() {
                        return view! { <p class="resource-list__empty">"No results found."</p> }.into_any();
                    }
                    sections
                        .into_iter()
                        .map(|SearchSection { label, link_base, rows }| {
                            let heading = format!("{label} ({})", rows.len());
                            view! {
                                <div class="search__section">
                                    <h2>{heading}</h2>
                                    <ResourceRows rows=rows link_base=link_base/>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </section>
    }
}
