//! Login page shown to visitors without a session.

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Hotel Portal"</h1>
            <p>"Sign in as a guest or as a hotel."</p>
        </div>
    }
}
