//! Account type chooser.

use leptos::prelude::*;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <a class="register-choice" href="/register/journalist">
                    <h2>"Journalist"</h2>
                    <p>"Offer your media skills and sell your content."</p>
                </a>
                <a class="register-choice" href="/register/company">
                    <h2>"Company"</h2>
                    <p>"Post jobs and hire media professionals."</p>
                </a>
                <p class="auth-card__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
