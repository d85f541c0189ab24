//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::bootstrap::{LOGIN_VIEW, component_registry};
use crate::components::registry::Registered;
use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::pages::{home::HomePage, not_found::NotFoundPage, profile::ProfilePage};
use crate::router::gate::NavigationGate;
use crate::router::routes::NOT_FOUND_PATH;
use crate::state::auth::AuthContext;

/// Root application component.
///
/// Provides the shared contexts (config, auth, API handle, component
/// registry) and sets up client-side routing behind the navigation gate.
/// The `<Route>`s mirror `RouteTable::standard()`.
#[component]
pub fn App(config: AppConfig, auth: AuthContext) -> impl IntoView {
    provide_meta_context();

    let header = config.header.component_name();
    provide_context(ApiClient::new(config.api_base_url.clone(), auth.clone()));
    provide_context(component_registry(config.header));
    provide_context(auth);
    provide_context(config);

    view! {
        <Title text="WASAPhoto"/>

        <Router>
            <NavigationGate>
                <Registered name=header/>
                <Routes fallback=|| view! { <Redirect path=NOT_FOUND_PATH/> }>
                    <Route path=path!("/") view=|| view! { <Registered name=LOGIN_VIEW/> }/>
                    <Route path=path!("/home") view=HomePage/>
                    <Route path=path!("/users/:username/profile") view=ProfilePage/>
                    <Route path=path!("/404") view=NotFoundPage/>
                </Routes>
            </NavigationGate>
        </Router>
    }
}
