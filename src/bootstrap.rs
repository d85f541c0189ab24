//! One-time application construction and mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per page load from the WASM start function. The header
//! component's registry name is picked here from configuration; everything
//! else is fixed.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use leptos::prelude::*;

use crate::components::header::{HeaderVariant, SiteHeader};
use crate::components::registry::ComponentRegistry;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::pages::login::LoginPage;

/// Id of the element the app mounts into.
pub const MOUNT_ANCHOR_ID: &str = "app";

/// Registry name of the login view.
pub const LOGIN_VIEW: &str = "LoginView";

/// The two globally registered components: the login view and the header
/// under `header`'s name.
pub fn component_registry(header: HeaderVariant) -> ComponentRegistry {
    ComponentRegistry::new()
        .register(LOGIN_VIEW, || view! { <LoginPage/> })
        .register(header.component_name(), || view! { <SiteHeader/> })
}

/// Mount [`App`](crate::app::App) into `#app` for the rest of the page's life.
///
/// # Errors
///
/// [`AppError::NoDocument`] without a browser document,
/// [`AppError::MissingAnchor`] when `#app` is absent or not an HTML element.
#[cfg(feature = "csr")]
pub fn mount(config: AppConfig) -> Result<(), AppError> {
    use wasm_bindgen::JsCast;

    use crate::app::App;
    use crate::state::auth::AuthContext;
    use crate::state::session::BrowserSessionStore;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(AppError::NoDocument)?;
    let missing = || AppError::MissingAnchor(MOUNT_ANCHOR_ID.to_owned());
    let anchor = document
        .get_element_by_id(MOUNT_ANCHOR_ID)
        .ok_or_else(missing)?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| missing())?;

    log::info!(
        "mounting into #{MOUNT_ANCHOR_ID} (api {:?}, header {})",
        config.api_base_url,
        config.header.component_name()
    );
    let auth = AuthContext::new(BrowserSessionStore);
    leptos::mount::mount_to(anchor, move || view! { <App config=config auth=auth/> }).forget();
    Ok(())
}

/// Without a browser there is nothing to mount into.
///
/// # Errors
///
/// Always [`AppError::Unavailable`].
#[cfg(not(feature = "csr"))]
pub fn mount(config: AppConfig) -> Result<(), AppError> {
    log::debug!("mount skipped outside the browser: {config:?}");
    Err(AppError::Unavailable)
}
