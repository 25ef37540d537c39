//! Pre-navigation authentication guard.
//!
//! Every navigation runs the guard to completion before anything is
//! committed: the outcome is either the requested route or the login page,
//! never an intermediate state. Only authentication is enforced here;
//! `role` metadata is left for the rendered view to act on.

use std::collections::BTreeMap;

use super::routes::RouteMeta;
use super::{ResolvedRoute, Router};
use crate::state::session::Session;

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

pub const LOGIN_PATH: &str = "/login";

/// What the guard decided for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(&'static str),
}

/// Decide a navigation to a route carrying `meta`.
///
/// Routes without an explicit `requires_auth` are protected.
pub fn guard(meta: &RouteMeta, session: &Session) -> GuardDecision {
    if meta.requires_auth() && !session.is_logged_in() {
        GuardDecision::Redirect(LOGIN_PATH)
    } else {
        GuardDecision::Proceed
    }
}

/// Final state of a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The requested route was committed.
    Allowed(ResolvedRoute),
    /// The guard sent the user elsewhere (the login page).
    Redirected { from: String, to: ResolvedRoute },
    /// Nothing in the table matches and the guard let it through.
    NotFound { path: String },
}

impl NavigationOutcome {
    /// The route that ends up rendered, if any.
    pub fn route(&self) -> Option<&ResolvedRoute> {
        match self {
            Self::Allowed(route) | Self::Redirected { to: route, .. } => Some(route),
            Self::NotFound { .. } => None,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirected { .. })
    }
}

impl Router {
    /// Resolve `path` and run the guard against `session`.
    ///
    /// An unmatched path carries no metadata and is therefore protected: a
    /// logged-out user is redirected, a logged-in one gets `NotFound`. The
    /// redirect target is not guarded again; the login route is public.
    pub fn navigate(&self, path: &str, session: &Session) -> NavigationOutcome {
        let resolved = self.resolve(path);
        let meta = resolved.as_ref().map(|r| r.meta).unwrap_or_default();

        match guard(&meta, session) {
            GuardDecision::Proceed => match resolved {
                Some(route) => NavigationOutcome::Allowed(route),
                None => NavigationOutcome::NotFound { path: path.to_owned() },
            },
            GuardDecision::Redirect(target) => {
                tracing::debug!(from = path, to = target, "navigation redirected");
                match self.resolve(target) {
                    Some(to) => NavigationOutcome::Redirected { from: path.to_owned(), to },
                    None => NavigationOutcome::NotFound { path: target.to_owned() },
                }
            }
        }
    }

    /// Navigate to a named route, filling its `:param` segments.
    pub fn navigate_by_name(&self, name: &str, params: &BTreeMap<String, String>, session: &Session) -> NavigationOutcome {
        match self.path_for(name, params) {
            Some(path) => self.navigate(&path, session),
            None => NavigationOutcome::NotFound { path: name.to_owned() },
        }
    }
}

/// Whether the session holds the role a route declares. Routes without a
/// role accept everyone.
pub fn role_satisfied(meta: &RouteMeta, session: &Session) -> bool {
    meta.role.is_none_or(|role| session.has_role(role.as_str()))
}
