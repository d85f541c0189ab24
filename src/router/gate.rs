//! Router integration for the navigation pipeline.
//!
//! `leptos_router` has no before-each hook, so the gate watches the current
//! location, runs the [`Navigator`] for it, and only renders the routed view
//! once the guard has allowed exactly that path.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::guard::SessionGuard;
use super::navigator::{DefaultDeadline, NavigationError, NavigationOutcome, Navigator};
use super::routes::{ResolvedRoute, RouteTable};
use crate::config::AppConfig;
use crate::state::auth::AuthContext;

/// What the gate does with a finished navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateAction {
    /// The guard allowed exactly the current path: render it.
    Commit,
    /// The pipeline landed elsewhere: replace the location with this path.
    Redirect(String),
    /// Navigation failed: go back to the last committed path.
    Rollback(String),
    /// Navigation failed with nowhere to go back to: render nothing.
    Stay,
}

/// Decide the gate's reaction to navigating to `path` from `from`.
pub fn gate_action(
    path: &str,
    result: &Result<NavigationOutcome, NavigationError>,
    from: Option<&ResolvedRoute>,
) -> GateAction {
    match result {
        Ok(outcome) if outcome.route.path == path => GateAction::Commit,
        Ok(outcome) => GateAction::Redirect(outcome.route.path.clone()),
        Err(_) => match from {
            Some(previous) if previous.path != path => GateAction::Rollback(previous.path.clone()),
            _ => GateAction::Stay,
        },
    }
}

fn replace() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

fn log_failure(path: &str, result: &Result<NavigationOutcome, NavigationError>) {
    if let Err(e) = result {
        log::error!("navigation to {path:?} aborted: {e}");
    }
}

/// Wraps `<Routes>`; children render only for guard-approved paths.
#[component]
pub fn NavigationGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let config = expect_context::<AppConfig>();
    let location = use_location();
    let navigate = use_navigate();

    let committed = RwSignal::new(None::<String>);
    let last_route = StoredValue::new(None::<ResolvedRoute>);

    Effect::new(move || {
        let path = location.pathname.get();
        let navigator = Navigator::new(
            RouteTable::standard(),
            SessionGuard::new(auth.clone()),
            DefaultDeadline::default(),
        )
        .with_timeout(config.guard_timeout);
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            let from = last_route.get_value();
            let result = navigator.navigate(&path, from.as_ref()).await;
            match gate_action(&path, &result, from.as_ref()) {
                GateAction::Commit => {
                    if let Ok(outcome) = result {
                        last_route.set_value(Some(outcome.route));
                    }
                    committed.set(Some(path));
                }
                GateAction::Redirect(target) => {
                    let hops = result.as_ref().map_or(0, |outcome| outcome.hops.len());
                    log::info!("{path} -> {target} ({hops} hops)");
                    navigate(&target, replace());
                }
                GateAction::Rollback(previous) => {
                    log_failure(&path, &result);
                    navigate(&previous, replace());
                }
                GateAction::Stay => log_failure(&path, &result),
            }
        });
    });

    let allowed = move || committed.get().as_deref() == Some(location.pathname.get().as_str());

    view! {
        <Show when=allowed>
            {children()}
        </Show>
    }
}
