//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <section class="home__hero">
                <h1>"WeSourceYou"</h1>
                <p>"Connecting media professionals with the companies that need them."</p>
                <div class="home__actions">
                    <a class="button" href="/register/journalist">"Join as a journalist"</a>
                    <a class="button button--secondary" href="/register/company">"Hire media talent"</a>
                </div>
            </section>
            <section class="home__browse">
                <a href="/jobs">"Browse jobs"</a>
                <a href="/journalists">"Find journalists"</a>
                <a href="/media">"Buy media content"</a>
            </section>
        </div>
    }
}
