//! Navigation guard run before every route transition.
//!
//! Rules, first match wins:
//! 1. The route requires auth and there is no session (or, in token mode, no
//!    token): send the visitor to the entry path.
//! 2. The route requires a role, a session exists, and its role differs: send
//!    the account to its own dashboard.
//! 3. Otherwise proceed.
//!
//! The guard never writes session state and performs no I/O beyond the
//! synchronous storage read done by its [`SessionProvider`].

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use tracing::debug;

use crate::config::GuardConfig;
use crate::routes::{RouteMatch, RouteMeta};
use crate::state::session::{Session, SessionProvider};

/// One navigation attempt: the resolved target and the path being left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub to: RouteMatch,
    pub from: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    Unauthenticated,
    RoleMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Redirect { to: String, reason: RedirectReason },
}

impl Decision {
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Proceed => None,
            Self::Redirect { to, .. } => Some(to),
        }
    }
}

/// Pure decision over already-read session state.
#[must_use]
pub fn decide(meta: RouteMeta, session: Option<&Session>, authenticated: bool, entry_path: &str) -> Decision {
    if meta.requires_auth && !authenticated {
        return Decision::Redirect { to: entry_path.to_owned(), reason: RedirectReason::Unauthenticated };
    }

    if let (Some(required), Some(session)) = (meta.role, session) {
        if session.role != required {
            return Decision::Redirect { to: session.dashboard_path(), reason: RedirectReason::RoleMismatch };
        }
    }

    Decision::Proceed
}

#[derive(Debug, Clone)]
pub struct NavigationGuard<P> {
    provider: P,
    config: GuardConfig,
}

impl<P: SessionProvider> NavigationGuard<P> {
    #[must_use]
    pub fn new(provider: P, config: GuardConfig) -> Self {
        Self { provider, config }
    }

    #[must_use]
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Decide the outcome of `intent` against the current session.
    pub fn check(&self, intent: &NavigationIntent) -> Decision {
        let session = self.provider.session();
        let authenticated =
            session.is_some() && (!self.config.requires_token() || self.provider.token().is_some());

        let decision = decide(intent.to.meta, session.as_ref(), authenticated, &self.config.entry_path);
        if let Decision::Redirect { to, reason } = &decision {
            debug!(
                path = %intent.to.path,
                from = intent.from.as_deref().unwrap_or("-"),
                redirect = %to,
                ?reason,
                "navigation redirected"
            );
        }
        decision
    }
}
