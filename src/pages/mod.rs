//! Page components, one per routed view.
//!
//! Access control has already been applied by the route gate before any page
//! renders; pages only read the `:id` route parameter.

pub mod hotel;
pub mod login;
pub mod profile;
pub mod user;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// The `:id` segment of the current route, empty when absent.
pub fn use_account_id() -> Signal<String> {
    let params = use_params_map();
    Signal::derive(move || params.read().get("id").unwrap_or_default())
}
