//! The signed-in user's own media content, with delete.

use leptos::prelude::*;
use serde_json::Value;

use crate::components::resource_list::{collection_rows, row_id, row_summary, row_title};
use crate::net::api::MY_MEDIA_PATH;
use crate::net::http::HttpClient;
use crate::net::resource::LoadState;

#[component]
pub fn MyMediaPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let reload = RwSignal::new(0_u32);
    let listing = RwSignal::new(LoadState::<Value>::Loading);
    let action_error = RwSignal::new(None::<String>);
    let delete_id = RwSignal::new(None::<String>);

    let list_client = client.clone();
    Effect::new(move || {
        reload.track();
        listing.set(LoadState::Loading);

        #[cfg(feature = "csr")]
        {
            let client = list_client.clone();
            leptos::task::spawn_local(async move {
                let loaded = crate::net::resource::fetch_resource::<Value>(&client, MY_MEDIA_PATH, &[]).await;
                let _ = listing.try_set(loaded);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &list_client;
        }
    });

    // Row buttons only record the id; the delete runs here.
    Effect::new(move || {
        let Some(id) = delete_id.get() else {
            return;
        };
        delete_id.set(None);

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_my_media(&client, &id).await {
                    Ok(()) => {
                        let _ = action_error.try_set(None);
                        let _ = reload.try_update(|n| *n += 1);
                    }
                    Err(e) => {
                        let _ = action_error.try_set(Some(e.user_message()));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&client, id);
        }
    });

    view! {
        <section class="resource-list">
            <h1>"My media"</h1>
            {move || action_error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || match listing.get() {
                LoadState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
                LoadState::Failed(message) => view! { <div class="error">{message}</div> }.into_any(),
                LoadState::Loaded(body) => {
                    let rows = collection_rows(&body);
                    if rows.is_empty() {
                        return view! { <p class="resource-list__empty">"You have not uploaded any media."</p> }
                            .into_any();
                    }
                    view! {
                        <ul class="resource-list__items">
                            {rows
                                .iter()
                                .filter_map(|row| {
                                    let id = row_id(row)?;
                                    let summary = row_summary(row);
                                    Some(view! {
                                        <li class="resource-list__item">
                                            <span class="resource-list__title">{row_title(row)}</span>
                                            {summary.map(|s| view! { <span class="resource-list__summary">{s}</span> })}
                                            <button on:click=move |_| delete_id.set(Some(id.clone()))>"Delete"</button>
                                        </li>
                                    })
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
