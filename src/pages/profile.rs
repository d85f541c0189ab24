//! Profile page for `/users/:username/profile`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::net::api::use_api;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let username = move || params.read().get("username").unwrap_or_default();

    let profile = LocalResource::new(move || {
        let api = api.clone();
        let name = username();
        async move { api.fetch_profile(&name).await }
    });

    view! {
        <main class="profile-page">
            <h1>{username}</h1>
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || match profile.get() {
                    Some(Ok(profile)) => {
                        let display_name = if profile.user.name.is_empty() {
                            profile.user.username.value.clone()
                        } else {
                            profile.user.name.clone()
                        };
                        view! {
                            <section class="profile-page__summary">
                                <p class="profile-page__name">{display_name}</p>
                                <p class="profile-page__posts">
                                    {format!("{} posts", profile.posts.len())}
                                </p>
                            </section>
                        }
                            .into_any()
                    }
                    Some(Err(e)) => view! { <p class="profile-page__error">{e.to_string()}</p> }.into_any(),
                    None => ().into_any(),
                }}
            </Suspense>
        </main>
    }
}
