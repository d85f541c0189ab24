//! Pre-navigation access check.
//!
//! Policy, first match wins:
//!
//! 1. no session token and the target is not `login`: redirect to `login`
//! 2. a session token and the target is `login`: redirect to `home`
//! 3. anything else proceeds
//!
//! `NotFound` gets no special treatment, so a signed-out visitor on `/404`
//! ends up on `login`. The originally requested route is not remembered.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::future::ready;

use super::routes::{ResolvedRoute, RouteName};
use crate::state::auth::AuthContext;

/// What the guard wants the router to do with a pending navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    RedirectTo(RouteName),
}

/// A navigation attempt, intercepted before commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Last committed route; `None` on the initial page load.
    pub from: Option<ResolvedRoute>,
    pub to: ResolvedRoute,
}

/// Hook run before every navigation commits.
pub trait NavigationGuard {
    fn check(&self, request: &NavigationRequest) -> impl Future<Output = NavigationDecision>;
}

/// Apply the session policy to a target route.
pub fn decide(authenticated: bool, to: RouteName) -> NavigationDecision {
    match (authenticated, to) {
        (false, target) if target != RouteName::Login => NavigationDecision::RedirectTo(RouteName::Login),
        (true, RouteName::Login) => NavigationDecision::RedirectTo(RouteName::Home),
        _ => NavigationDecision::Allow,
    }
}

/// Guard backed by the session token in an [`AuthContext`].
#[derive(Clone, Debug)]
pub struct SessionGuard {
    auth: AuthContext,
}

impl SessionGuard {
    pub fn new(auth: AuthContext) -> Self {
        Self { auth }
    }
}

impl NavigationGuard for SessionGuard {
    fn check(&self, request: &NavigationRequest) -> impl Future<Output = NavigationDecision> {
        let decision = decide(self.auth.is_authenticated(), request.to.name);
        log::debug!(
            "guard {} -> {}: {decision:?}",
            request.from.as_ref().map_or("(initial)", |r| r.name.as_str()),
            request.to.name
        );
        ready(decision)
    }
}
