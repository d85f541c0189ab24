use std::time::Duration;

use futures::executor::block_on;

use super::*;
use crate::router::navigator::NoDeadline;
use crate::router::routes::RouteName;
use crate::state::session::MemorySessionStore;

fn run(
    store: &MemorySessionStore,
    path: &str,
    from: Option<&ResolvedRoute>,
) -> Result<NavigationOutcome, NavigationError> {
    let navigator = Navigator::new(
        RouteTable::standard(),
        SessionGuard::new(AuthContext::new(store.clone())),
        NoDeadline,
    );
    block_on(navigator.navigate(path, from))
}

/// A route the signed-in user was allowed onto.
fn resolved(path: &str) -> ResolvedRoute {
    run(&MemorySessionStore::with_token("abc123"), path, None).unwrap().route
}

fn timed_out() -> Result<NavigationOutcome, NavigationError> {
    Err(NavigationError::GuardTimeout {
        route: RouteName::Home,
        timeout: Duration::from_millis(2000),
    })
}

// =============================================================
// Successful navigations
// =============================================================

#[test]
fn allowed_path_commits() {
    let store = MemorySessionStore::with_token("abc123");
    let result = run(&store, "/home", None);
    assert_eq!(gate_action("/home", &result, None), GateAction::Commit);
}

#[test]
fn trailing_slash_is_replaced_by_normalized_path() {
    let store = MemorySessionStore::with_token("abc123");
    let result = run(&store, "/home/", None);
    assert_eq!(gate_action("/home/", &result, None), GateAction::Redirect("/home".to_owned()));
}

#[test]
fn unknown_path_signed_out_redirects_to_login() {
    let store = MemorySessionStore::new();
    let result = run(&store, "/unknown-path", None);
    assert_eq!(gate_action("/unknown-path", &result, None), GateAction::Redirect("/".to_owned()));
}

#[test]
fn unknown_path_signed_in_redirects_to_not_found() {
    let store = MemorySessionStore::with_token("abc123");
    let result = run(&store, "/unknown-path", None);
    assert_eq!(
        gate_action("/unknown-path", &result, None),
        GateAction::Redirect("/404".to_owned())
    );
}

#[test]
fn signed_in_login_redirects_home() {
    let store = MemorySessionStore::with_token("abc123");
    let result = run(&store, "/", None);
    assert_eq!(gate_action("/", &result, None), GateAction::Redirect("/home".to_owned()));
}

// =============================================================
// Failed navigations
// =============================================================

#[test]
fn timeout_rolls_back_to_previous_route() {
    let previous = resolved("/users/alice.smith/profile");
    assert_eq!(
        gate_action("/home", &timed_out(), Some(&previous)),
        GateAction::Rollback("/users/alice.smith/profile".to_owned())
    );
}

#[test]
fn timeout_on_initial_load_stays_blank() {
    assert_eq!(gate_action("/home", &timed_out(), None), GateAction::Stay);
}

#[test]
fn timeout_revisiting_previous_path_stays() {
    let previous = resolved("/home");
    assert_eq!(gate_action("/home", &timed_out(), Some(&previous)), GateAction::Stay);
}

#[test]
fn invalid_path_rolls_back() {
    let store = MemorySessionStore::with_token("abc123");
    let previous = resolved("/home");
    let result = run(&store, "home", Some(&previous));
    assert!(result.is_err());
    assert_eq!(
        gate_action("home", &result, Some(&previous)),
        GateAction::Rollback("/home".to_owned())
    );
}
