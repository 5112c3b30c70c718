use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"WeSourceYou - connecting newsrooms with freelance journalists."</p>
            <nav class="footer__links">
                <a href="/jobs">"Jobs"</a>
                <a href="/journalists">"Journalists"</a>
                <a href="/companies">"Companies"</a>
                <a href="/media">"Media"</a>
            </nav>
        </footer>
    }
}
