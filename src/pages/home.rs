//! Authenticated landing page: search users and jump to their profiles.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::{use_api, validate_search_query};
use crate::net::types::UserList;
use crate::router::routes::{Params, RouteName, RouteTable};

/// Path of `username`'s profile page.
pub fn profile_path(username: &str) -> Option<String> {
    let mut params = Params::new();
    params.insert("username".to_owned(), username.to_owned());
    match RouteTable::standard().path_for(RouteName::Profile, &params) {
        Ok(path) => Some(path),
        Err(e) => {
            log::error!("cannot build profile path: {e}");
            None
        }
    }
}

/// `(username, profile path)` for every search hit, in service order.
/// Names that cannot form a profile path are dropped.
pub fn search_results(list: &UserList) -> Vec<(String, String)> {
    list.users
        .iter()
        .filter_map(|entry| {
            let name = entry.username();
            profile_path(name).map(|path| (name.to_owned(), path))
        })
        .collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();
    let query = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let results = RwSignal::new(Vec::<(String, String)>::new());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let fragment = match validate_search_query(&query.get()) {
            Ok(fragment) => fragment,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Searching...".to_owned());

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.search_users(&fragment).await {
                Ok(list) => {
                    let found = search_results(&list);
                    info.set(if found.is_empty() {
                        format!("No users match \"{fragment}\".")
                    } else {
                        String::new()
                    });
                    results.set(found);
                }
                Err(e) => {
                    log::warn!("user search for {fragment:?} failed: {e}");
                    results.set(Vec::new());
                    info.set(format!("Search failed: {e}"));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <main class="home-page">
            <h1>"Home"</h1>
            <form class="home-search" on:submit=on_search>
                <input
                    class="home-search__input"
                    type="text"
                    placeholder="search users"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>"Search"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="home-search__message">{move || info.get()}</p>
            </Show>
            <ul class="home-search__results">
                <For
                    each=move || results.get()
                    key=|(name, _)| name.clone()
                    children=|(name, path)| {
                        view! {
                            <li>
                                <A href=path>{name}</A>
                            </li>
                        }
                    }
                />
            </ul>
        </main>
    }
}
