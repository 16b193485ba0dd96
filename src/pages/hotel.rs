//! Pages for hotel accounts.

use leptos::prelude::*;

use super::use_account_id;

/// Landing page for a hotel account.
#[component]
pub fn HotelDashboardPage() -> impl IntoView {
    let id = use_account_id();
    view! {
        <div class="dashboard-page dashboard-page--hotel">
            <h1>"Hotel Dashboard"</h1>
            <p class="dashboard-page__account">{move || format!("Hotel #{}", id.get())}</p>
            <nav class="dashboard-page__links">
                <a href=move || format!("/hotel/{}/reviews", id.get())>"Reviews"</a>
                <a href=move || format!("/hotel/{}/orders", id.get())>"Orders"</a>
            </nav>
        </div>
    }
}

#[component]
pub fn HotelReviewsPage() -> impl IntoView {
    let id = use_account_id();
    view! {
        <div class="reviews-page">
            <h1>"Guest Reviews"</h1>
            <p>{move || format!("Reviews for hotel #{}", id.get())}</p>
        </div>
    }
}

#[component]
pub fn HotelOrdersPage() -> impl IntoView {
    let id = use_account_id();
    view! {
        <div class="orders-page">
            <h1>"Incoming Orders"</h1>
            <p>{move || format!("Orders received by hotel #{}", id.get())}</p>
        </div>
    }
}
