//! Pages for end-user accounts.

use leptos::prelude::*;

use super::use_account_id;

/// Landing page for a user account.
#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let id = use_account_id();
    view! {
        <div class="dashboard-page dashboard-page--user">
            <h1>"My Dashboard"</h1>
            <p class="dashboard-page__account">{move || format!("Account #{}", id.get())}</p>
            <a href=move || format!("/user/{}/orders", id.get())>"My orders"</a>
        </div>
    }
}

#[component]
pub fn UserOrdersPage() -> impl IntoView {
    let id = use_account_id();
    view! {
        <div class="orders-page">
            <h1>"My Orders"</h1>
            <p>{move || format!("Orders placed by account #{}", id.get())}</p>
        </div>
    }
}
