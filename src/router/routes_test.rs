use super::*;

fn route(resolution: Resolution) -> ResolvedRoute {
    match resolution {
        Resolution::Route(route) => route,
        Resolution::Redirect(to) => panic!("expected a route, got redirect to {to}"),
    }
}

// =============================================================
// Names
// =============================================================

#[test]
fn route_names_match_public_names() {
    let names: Vec<&str> = RouteName::ALL.iter().map(|n| n.as_str()).collect();
    assert_eq!(names, ["login", "home", "profile", "NotFound"]);
}

#[test]
fn route_name_display_uses_public_name() {
    assert_eq!(RouteName::NotFound.to_string(), "NotFound");
}

// =============================================================
// resolve
// =============================================================

#[test]
fn root_resolves_to_login() {
    let table = RouteTable::standard();
    let resolved = route(table.resolve("/").unwrap());
    assert_eq!(resolved.name, RouteName::Login);
    assert_eq!(resolved.path, "/");
    assert!(resolved.params.is_empty());
}

#[test]
fn empty_path_is_root() {
    let table = RouteTable::standard();
    assert_eq!(route(table.resolve("").unwrap()).name, RouteName::Login);
}

#[test]
fn home_resolves_with_trailing_slash() {
    let table = RouteTable::standard();
    let resolved = route(table.resolve("/home/").unwrap());
    assert_eq!(resolved.name, RouteName::Home);
    assert_eq!(resolved.path, "/home");
}

#[test]
fn profile_captures_username() {
    let table = RouteTable::standard();
    let resolved = route(table.resolve("/users/alice/profile").unwrap());
    assert_eq!(resolved.name, RouteName::Profile);
    assert_eq!(resolved.param("username"), Some("alice"));
}

#[test]
fn query_and_fragment_are_ignored() {
    let table = RouteTable::standard();
    let resolved = route(table.resolve("/users/bob/profile?tab=posts#top").unwrap());
    assert_eq!(resolved.param("username"), Some("bob"));
    assert_eq!(resolved.path, "/users/bob/profile");
}

#[test]
fn not_found_route_resolves_directly() {
    let table = RouteTable::standard();
    assert_eq!(route(table.resolve("/404").unwrap()).name, RouteName::NotFound);
}

#[test]
fn unknown_path_redirects_to_404() {
    let table = RouteTable::standard();
    assert_eq!(
        table.resolve("/unknown-path").unwrap(),
        Resolution::Redirect("/404".to_owned())
    );
}

#[test]
fn partial_profile_path_hits_catch_all() {
    let table = RouteTable::standard();
    assert_eq!(
        table.resolve("/users/alice").unwrap(),
        Resolution::Redirect("/404".to_owned())
    );
}

#[test]
fn relative_path_is_rejected() {
    let table = RouteTable::standard();
    assert_eq!(
        table.resolve("home"),
        Err(RouteError::InvalidPath("home".to_owned()))
    );
}

#[test]
fn table_without_catch_all_reports_no_match() {
    let table = RouteTable::new().route(HOME_PATH, RouteName::Home);
    assert_eq!(
        table.resolve("/nope"),
        Err(RouteError::NoMatch("/nope".to_owned()))
    );
}

// =============================================================
// path_for
// =============================================================

#[test]
fn path_for_static_routes() {
    let table = RouteTable::standard();
    let none = Params::new();
    assert_eq!(table.path_for(RouteName::Login, &none).unwrap(), "/");
    assert_eq!(table.path_for(RouteName::Home, &none).unwrap(), "/home");
    assert_eq!(table.path_for(RouteName::NotFound, &none).unwrap(), "/404");
}

#[test]
fn path_for_profile_fills_username() {
    let table = RouteTable::standard();
    let mut params = Params::new();
    params.insert("username".to_owned(), "alice".to_owned());
    assert_eq!(
        table.path_for(RouteName::Profile, &params).unwrap(),
        "/users/alice/profile"
    );
}

#[test]
fn path_for_profile_without_username_fails() {
    let table = RouteTable::standard();
    assert_eq!(
        table.path_for(RouteName::Profile, &Params::new()),
        Err(RouteError::MissingParam {
            route: RouteName::Profile,
            param: "username".to_owned(),
        })
    );
}

#[test]
fn path_for_unknown_route_fails() {
    let table = RouteTable::new().route(HOME_PATH, RouteName::Home);
    assert_eq!(
        table.path_for(RouteName::Login, &Params::new()),
        Err(RouteError::UnknownRoute(RouteName::Login))
    );
}

#[test]
fn pattern_of_reports_declared_pattern() {
    let table = RouteTable::standard();
    assert_eq!(table.pattern_of(RouteName::Profile), Some("/users/:username/profile"));
}
