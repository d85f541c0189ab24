//! Navigation pipeline: resolve, redirect, guard, commit.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every location change goes through [`Navigator::navigate`] before the
//! routed view is shown. Catch-all redirects and guard redirects are followed
//! until the guard allows a route. Two bounds keep navigation from stalling:
//! a hop limit on redirect chains and a deadline on each guard check.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::pin::pin;
use std::time::Duration;

use futures::future::{Either, select};

use super::guard::{NavigationDecision, NavigationGuard, NavigationRequest};
use super::routes::{Params, ResolvedRoute, Resolution, RouteError, RouteName, RouteTable};

/// Redirect chains longer than this abort the navigation.
pub const MAX_HOPS: usize = 8;

/// Default upper bound on a single guard check.
pub const DEFAULT_GUARD_TIMEOUT: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error("navigation to {path:?} exceeded {limit} redirects")]
    RedirectLoop { path: String, limit: usize },
    #[error("guard for `{route}` did not finish within {timeout:?}")]
    GuardTimeout { route: RouteName, timeout: Duration },
}

/// One redirect step taken during a navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hop {
    /// A redirect record in the table (the catch-all).
    Table { from: String, to: String },
    /// The guard redirected away from a route.
    Guard { from: RouteName, to: RouteName },
}

/// Where a navigation ended up and how it got there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub route: ResolvedRoute,
    pub hops: Vec<Hop>,
}

impl NavigationOutcome {
    pub fn redirected(&self) -> bool {
        !self.hops.is_empty()
    }
}

/// Timer source used to bound guard checks.
pub trait Deadline {
    fn after(&self, timeout: Duration) -> impl Future<Output = ()>;
}

/// Never fires. Used where no timer is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDeadline;

impl Deadline for NoDeadline {
    fn after(&self, _timeout: Duration) -> impl Future<Output = ()> {
        futures::future::pending::<()>()
    }
}

/// `setTimeout`-backed deadline.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDeadline;

#[cfg(feature = "csr")]
impl Deadline for BrowserDeadline {
    fn after(&self, timeout: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(timeout)
    }
}

/// The deadline the running app uses.
#[cfg(feature = "csr")]
pub type DefaultDeadline = BrowserDeadline;
#[cfg(not(feature = "csr"))]
pub type DefaultDeadline = NoDeadline;

pub struct Navigator<G, D = DefaultDeadline> {
    table: RouteTable,
    guard: G,
    deadline: D,
    timeout: Duration,
    max_hops: usize,
}

impl<G: NavigationGuard, D: Deadline> Navigator<G, D> {
    pub fn new(table: RouteTable, guard: G, deadline: D) -> Self {
        Self {
            table,
            guard,
            deadline,
            timeout: DEFAULT_GUARD_TIMEOUT,
            max_hops: MAX_HOPS,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Run a navigation from `from` to `path` through redirects and the guard.
    ///
    /// # Errors
    ///
    /// Route resolution failures, a redirect chain longer than the hop limit,
    /// or a guard check that outlives the timeout.
    pub async fn navigate(
        &self,
        path: &str,
        from: Option<&ResolvedRoute>,
    ) -> Result<NavigationOutcome, NavigationError> {
        let mut hops = Vec::new();
        let mut current = path.to_owned();

        loop {
            let step = match self.table.resolve(&current)? {
                Resolution::Redirect(to) => Hop::Table { from: current, to },
                Resolution::Route(to) => {
                    let request = NavigationRequest {
                        from: from.cloned(),
                        to,
                    };
                    match self.check(&request).await? {
                        NavigationDecision::Allow => {
                            return Ok(NavigationOutcome {
                                route: request.to,
                                hops,
                            });
                        }
                        NavigationDecision::RedirectTo(name) => Hop::Guard {
                            from: request.to.name,
                            to: name,
                        },
                    }
                }
            };

            if hops.len() >= self.max_hops {
                return Err(NavigationError::RedirectLoop {
                    path: path.to_owned(),
                    limit: self.max_hops,
                });
            }
            current = match &step {
                Hop::Table { to, .. } => to.clone(),
                Hop::Guard { to, .. } => self.table.path_for(*to, &Params::new())?,
            };
            log::debug!("navigation to {path:?} redirected: {step:?}");
            hops.push(step);
        }
    }

    async fn check(&self, request: &NavigationRequest) -> Result<NavigationDecision, NavigationError> {
        let check = pin!(self.guard.check(request));
        let timer = pin!(self.deadline.after(self.timeout));
        match select(check, timer).await {
            Either::Left((decision, _)) => Ok(decision),
            Either::Right(((), _)) => Err(NavigationError::GuardTimeout {
                route: request.to.name,
                timeout: self.timeout,
            }),
        }
    }
}
