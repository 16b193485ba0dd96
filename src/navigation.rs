//! Path resolution for the router host: table lookup, static redirects, and
//! the navigation guard combined into a single call, plus the mapping from
//! that result to what the route gate shows.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use tracing::{error, trace};

use crate::config::GuardConfig;
use crate::guard::{Decision, NavigationGuard, NavigationIntent};
use crate::routes::{RouteError, RouteMatch, RouteTable, RouteTarget};
use crate::state::session::{SessionProvider, SessionStorage, StoredSession};

/// Redirect hops followed before giving up on a path.
pub const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error("redirect loop resolving {path} after {hops} hops")]
    RedirectLoop { path: String, hops: usize },
}

impl NavigationError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Route(RouteError::NotFound(_)))
    }
}

/// What the route gate shows for a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outlet {
    /// The location is allowed; mount the routed page.
    Render(RouteMatch),
    /// Replace the history entry with this path.
    Redirect(String),
    NotFound,
    Failed,
}

/// Final route a navigation lands on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub route: RouteMatch,
    pub redirects: usize,
}

impl Resolution {
    #[must_use]
    pub fn path(&self) -> &str {
        &self.route.path
    }

    #[must_use]
    pub fn was_redirected(&self) -> bool {
        self.redirects > 0
    }
}

#[derive(Debug, Clone)]
pub struct Navigator<P> {
    table: RouteTable,
    guard: NavigationGuard<P>,
}

impl<S: SessionStorage> Navigator<StoredSession<S>> {
    /// Navigator over the built-in table for `config.mode`, reading the
    /// session from `storage`.
    #[must_use]
    pub fn from_config(config: GuardConfig, storage: S) -> Self {
        let table = RouteTable::for_mode(config.mode);
        let provider = StoredSession::new(storage, &config);
        Self::new(table, NavigationGuard::new(provider, config))
    }
}

impl<P: SessionProvider> Navigator<P> {
    #[must_use]
    pub fn new(table: RouteTable, guard: NavigationGuard<P>) -> Self {
        Self { table, guard }
    }

    /// Resolve `path`, following static and guard redirects until a route
    /// is allowed to render.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Route`] with [`RouteError::NotFound`] when a
    /// path along the way matches no route, and
    /// [`NavigationError::RedirectLoop`] after [`MAX_REDIRECTS`] hops.
    pub fn resolve(&self, path: &str, from: Option<&str>) -> Result<Resolution, NavigationError> {
        let mut current = path.to_owned();
        let mut from = from.map(str::to_owned);

        for hops in 0..=MAX_REDIRECTS {
            let route = self.table.resolve(&current)?;
            let static_redirect = match &route.target {
                RouteTarget::Redirect(to) => Some(to.clone()),
                RouteTarget::View(_) => None,
            };
            let next = if let Some(to) = static_redirect {
                to
            } else {
                let intent = NavigationIntent { to: route, from: from.clone() };
                match self.guard.check(&intent) {
                    Decision::Proceed => return Ok(Resolution { route: intent.to, redirects: hops }),
                    Decision::Redirect { to, .. } => to,
                }
            };
            trace!(from = %current, to = %next, "following redirect");
            from = Some(std::mem::replace(&mut current, next));
        }

        Err(NavigationError::RedirectLoop { path: path.to_owned(), hops: MAX_REDIRECTS })
    }

    /// Resolve `path` into what the route gate should show. A navigation
    /// that was redirected asks the host to move to the final path.
    pub fn outlet(&self, path: &str, from: Option<&str>) -> Outlet {
        match self.resolve(path, from) {
            Ok(resolution) if resolution.was_redirected() => Outlet::Redirect(resolution.route.path),
            Ok(resolution) => Outlet::Render(resolution.route),
            Err(err) if err.is_not_found() => Outlet::NotFound,
            Err(err) => {
                error!(%path, error = %err, "navigation failed");
                Outlet::Failed
            }
        }
    }
}
