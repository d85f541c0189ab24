use super::*;

#[test]
fn registry_holds_login_view_and_default_header() {
    let registry = component_registry(HeaderVariant::Header);
    assert_eq!(registry.names(), ["Header", "LoginView"]);
}

#[test]
fn registry_uses_configured_header_name() {
    let registry = component_registry(HeaderVariant::TopBar);
    assert!(registry.contains("TopBar"));
    assert!(!registry.contains("Header"));
    assert!(registry.contains(LOGIN_VIEW));
}

#[test]
fn mount_anchor_is_app() {
    assert_eq!(MOUNT_ANCHOR_ID, "app");
}

#[cfg(not(feature = "csr"))]
#[test]
fn mount_outside_the_browser_is_unavailable() {
    assert_eq!(mount(AppConfig::default()), Err(AppError::Unavailable));
}
