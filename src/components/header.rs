//! Top bar shown above every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Registered once at bootstrap under the name picked by [`HeaderVariant`].
//! Its logout action is the only place the session token is cleared.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::router::routes::{HOME_PATH, LOGIN_PATH};
use crate::state::auth::AuthContext;

/// Registry name under which the header component is installed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderVariant {
    #[default]
    Header,
    TopBar,
}

impl HeaderVariant {
    pub fn component_name(self) -> &'static str {
        match self {
            Self::Header => "Header",
            Self::TopBar => "TopBar",
        }
    }

    /// Parse a registry name, case-sensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Header" => Some(Self::Header),
            "TopBar" => Some(Self::TopBar),
            _ => None,
        }
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let location = use_location();
    let navigate = use_navigate();
    let logged_out = RwSignal::new(false);

    // Token presence is re-read on every location change.
    let auth_for_view = auth.clone();
    let signed_in = move || {
        location.pathname.track();
        auth_for_view.is_authenticated()
    };

    let on_logout = move |_: leptos::ev::MouseEvent| match auth.sign_out() {
        Ok(()) => logged_out.set(true),
        Err(e) => log::error!("logout failed: {e}"),
    };

    Effect::new(move || {
        if logged_out.get() {
            logged_out.set(false);
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    view! {
        <header class="site-header">
            <A href=HOME_PATH attr:class="site-header__brand">"WASAPhoto"</A>
            <Show when=signed_in>
                <button class="site-header__logout" on:click=on_logout.clone()>
                    "Log out"
                </button>
            </Show>
        </header>
    }
}
