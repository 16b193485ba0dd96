//! Root application component with routing and the route gate.
//!
//! Every portal path is declared to the Leptos router with the segment
//! constants from [`paths`]. The [`RouteGate`] around `<Routes>` runs the
//! crate's [`Navigator`] on each location change and only lets the router
//! mount a page once the guard allows it.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use tracing::warn;

use crate::config::GuardConfig;
use crate::navigation::{Navigator, Outlet};
use crate::pages::{
    hotel::{HotelDashboardPage, HotelOrdersPage, HotelReviewsPage},
    login::LoginPage,
    profile::ProfilePage,
    user::{UserDashboardPage, UserOrdersPage},
};
use crate::routes::paths;
use crate::state::session::{LocalStorage, StoredSession};

/// Navigator reading the session from browser `localStorage`.
pub type PortalNavigator = Navigator<StoredSession<LocalStorage>>;

/// Root application component.
///
/// Builds the navigator for the configured session mode and provides it as
/// context for the route gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = GuardConfig::from_build_env().unwrap_or_else(|err| {
        warn!(error = %err, "falling back to legacy session mode");
        GuardConfig::default()
    });
    provide_context::<PortalNavigator>(Navigator::from_config(config, LocalStorage));

    view! {
        <Title text="Hotel Portal"/>

        <Router>
            <main class="portal">
                <RouteGate>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=paths::ROOT view=LoginPage/>
                        <Route path=paths::LOGIN view=LoginPage/>
                        <Route path=paths::USER_DASHBOARD view=UserDashboardPage/>
                        <Route path=paths::USER_ORDERS view=UserOrdersPage/>
                        <Route path=paths::HOTEL_DASHBOARD view=HotelDashboardPage/>
                        <Route path=paths::HOTEL_REVIEWS view=HotelReviewsPage/>
                        <Route path=paths::HOTEL_ORDERS view=HotelOrdersPage/>
                        <Route path=paths::PROFILE view=ProfilePage/>
                    </Routes>
                </RouteGate>
            </main>
        </Router>
    }
}

/// Coarse gate state; the routed children stay mounted while it is `Open`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GateView {
    Open,
    Closed,
    NotFound,
    Failed,
}

impl GateView {
    fn of(outlet: &Outlet) -> Self {
        match outlet {
            Outlet::Render(_) => Self::Open,
            Outlet::Redirect(_) => Self::Closed,
            Outlet::NotFound => Self::NotFound,
            Outlet::Failed => Self::Failed,
        }
    }
}

/// Checks every location against the route table and guard. Allowed
/// locations render the routed children; redirects replace the history
/// entry. Paths outside the active table show a not-found message even when
/// the router declares them.
#[component]
fn RouteGate(children: ChildrenFn) -> impl IntoView {
    let navigator = expect_context::<PortalNavigator>();
    let location = use_location();
    let navigate = use_navigate();
    let last_rendered = StoredValue::new(None::<String>);

    let outlet = Memo::new(move |_| {
        let path = location.pathname.get();
        let from = last_rendered.get_value();
        navigator.outlet(&path, from.as_deref())
    });
    let gate = Memo::new(move |_| outlet.with(GateView::of));

    Effect::new(move || match outlet.get() {
        Outlet::Render(route) => last_rendered.set_value(Some(route.path)),
        Outlet::Redirect(to) => navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() }),
        Outlet::NotFound | Outlet::Failed => {}
    });

    move || match gate.get() {
        GateView::Open => children(),
        GateView::Closed => ().into_any(),
        GateView::NotFound => view! { <p class="not-found">"Page not found."</p> }.into_any(),
        GateView::Failed => view! { <p class="portal-error">"Navigation failed."</p> }.into_any(),
    }
}
