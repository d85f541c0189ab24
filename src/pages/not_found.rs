//! Page shown at `/404`.
//!
//! Signed-out visitors never reach it: the guard sends them to `login` first.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::routes::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="not-found-page">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <A href=HOME_PATH>"Go Home"</A>
        </main>
    }
}
