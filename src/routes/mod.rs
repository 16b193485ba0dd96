//! Static route table for the portal.
//!
//! DESIGN
//! ======
//! Routes are declared once at startup and never mutated. Each route maps a
//! leptos_router segment path (see [`paths`]) to either a view or a static
//! redirect, and carries access metadata read by the navigation guard.
//! Resolution walks the table in declaration order and the first route whose
//! segments match the whole path wins.
//!
//! Two tables ship with the crate: the legacy table (root redirects to the
//! login page, one dashboard per role) and the token table (root is the login
//! page, plus orders, reviews and profile sub-resources).

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod paths;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use leptos_router::{PathSegment, PossibleRouteMatch};

use crate::config::SessionMode;

/// Captured `:name` parameters, as produced by leptos_router matching.
pub type Params = Vec<(Cow<'static, str>, String)>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no route matches {0}")]
    NotFound(String),
}

/// Account kind a route is reserved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Hotel,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Hotel => "HOTEL",
        }
    }

    /// Landing page for an account of this role.
    #[must_use]
    pub fn dashboard_path(self, id: &str) -> String {
        match self {
            Self::User => format!("/user/{id}"),
            Self::Hotel => format!("/hotel/{id}"),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access metadata attached to a route. The default is a public route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub role: Option<Role>,
}

impl RouteMeta {
    pub const PUBLIC: Self = Self { requires_auth: false, role: None };

    /// Any signed-in account may visit.
    #[must_use]
    pub const fn authenticated() -> Self {
        Self { requires_auth: true, role: None }
    }

    /// Only accounts of `role` may visit. Implies `requires_auth`.
    #[must_use]
    pub const fn role(role: Role) -> Self {
        Self { requires_auth: true, role: Some(role) }
    }
}

/// Opaque reference to the page rendered for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    UserDashboard,
    UserOrders,
    HotelDashboard,
    HotelReviews,
    HotelOrders,
    Profile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    View(View),
    Redirect(String),
}

#[derive(Clone)]
pub struct Route {
    segments: Arc<dyn PossibleRouteMatch + Send + Sync>,
    pattern: String,
    target: RouteTarget,
    meta: RouteMeta,
}

impl Route {
    /// A route rendering `view`.
    pub fn view<S>(segments: S, view: View, meta: RouteMeta) -> Self
    where
        S: PossibleRouteMatch + Send + Sync + 'static,
    {
        Self::new(segments, RouteTarget::View(view), meta)
    }

    /// A public route that immediately sends the browser to `to`.
    pub fn redirect<S>(segments: S, to: &str) -> Self
    where
        S: PossibleRouteMatch + Send + Sync + 'static,
    {
        Self::new(segments, RouteTarget::Redirect(to.to_owned()), RouteMeta::PUBLIC)
    }

    fn new<S>(segments: S, target: RouteTarget, meta: RouteMeta) -> Self
    where
        S: PossibleRouteMatch + Send + Sync + 'static,
    {
        let mut generated = Vec::new();
        segments.generate_path(&mut generated);
        Self { segments: Arc::new(segments), pattern: pattern_string(&generated), target, meta }
    }

    /// Pattern in `/user/:id` notation.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn meta(&self) -> RouteMeta {
        self.meta
    }

    /// Match the whole of `path`, ignoring its query string and fragment.
    fn matches(&self, path: &str) -> Option<Params> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let matched = self.segments.test(path)?;
        matched.is_complete().then(|| matched.params())
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("target", &self.target)
            .field("meta", &self.meta)
            .finish()
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.target == other.target && self.meta == other.meta
    }
}

impl Eq for Route {}

fn pattern_string(segments: &[PathSegment]) -> String {
    let parts: Vec<String> = segments
        .iter()
        .filter_map(|segment| match segment {
            PathSegment::Unit => None,
            PathSegment::Static(s) if s.trim_matches('/').is_empty() => None,
            PathSegment::Static(s) => Some(s.trim_matches('/').to_owned()),
            PathSegment::Param(name) => Some(format!(":{name}")),
            PathSegment::OptionalParam(name) => Some(format!(":{name}?")),
            PathSegment::Splat(name) => Some(format!("*{name}")),
        })
        .collect();
    format!("/{}", parts.join("/"))
}

/// Result of resolving a concrete path against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub path: String,
    pub target: RouteTarget,
    pub meta: RouteMeta,
    pub params: Params,
}

impl RouteMatch {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().rev().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn view(&self) -> Option<View> {
        match self.target {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Redirect(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    #[must_use]
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Table used with `currentUser` sessions.
    #[must_use]
    pub fn legacy() -> Self {
        Self::new(vec![
            Route::redirect(paths::ROOT, "/login"),
            Route::view(paths::LOGIN, View::Login, RouteMeta::PUBLIC),
            Route::view(paths::USER_DASHBOARD, View::UserDashboard, RouteMeta::role(Role::User)),
            Route::view(paths::HOTEL_DASHBOARD, View::HotelDashboard, RouteMeta::role(Role::Hotel)),
        ])
    }

    /// Table used with `user` + `token` sessions.
    #[must_use]
    pub fn token() -> Self {
        Self::new(vec![
            Route::view(paths::ROOT, View::Login, RouteMeta::PUBLIC),
            Route::view(paths::LOGIN, View::Login, RouteMeta::PUBLIC),
            Route::view(paths::USER_DASHBOARD, View::UserDashboard, RouteMeta::role(Role::User)),
            Route::view(paths::USER_ORDERS, View::UserOrders, RouteMeta::role(Role::User)),
            Route::view(paths::HOTEL_DASHBOARD, View::HotelDashboard, RouteMeta::role(Role::Hotel)),
            Route::view(paths::HOTEL_REVIEWS, View::HotelReviews, RouteMeta::role(Role::Hotel)),
            Route::view(paths::HOTEL_ORDERS, View::HotelOrders, RouteMeta::role(Role::Hotel)),
            Route::view(paths::PROFILE, View::Profile, RouteMeta::authenticated()),
        ])
    }

    #[must_use]
    pub fn for_mode(mode: SessionMode) -> Self {
        match mode {
            SessionMode::Legacy => Self::legacy(),
            SessionMode::Token => Self::token(),
        }
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the first route whose segments match all of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NotFound`] if no route matches.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch, RouteError> {
        self.routes
            .iter()
            .find_map(|route| {
                route.matches(path).map(|params| RouteMatch {
                    path: path.to_owned(),
                    target: route.target.clone(),
                    meta: route.meta,
                    params,
                })
            })
            .ok_or_else(|| RouteError::NotFound(path.to_owned()))
    }
}
