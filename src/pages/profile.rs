//! Account profile, open to any signed-in account.

use leptos::prelude::*;

use super::use_account_id;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let id = use_account_id();
    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <p>{move || format!("Account #{}", id.get())}</p>
        </div>
    }
}
