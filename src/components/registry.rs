//! Named component registry.
//!
//! Bootstrap installs a small set of components under fixed names; layouts
//! then render them with [`Registered`] without importing them directly.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

/// Components installed at bootstrap, keyed by name.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    entries: BTreeMap<&'static str, ViewFn>,
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `view` under `name`, replacing any previous entry.
    #[must_use]
    pub fn register(mut self, name: &'static str, view: impl Into<ViewFn>) -> Self {
        if self.entries.insert(name, view.into()).is_some() {
            log::warn!("component `{name}` registered twice; keeping the latest");
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ViewFn> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }
}

/// Render the component registered under `name`; nothing if unknown.
#[component]
pub fn Registered(#[prop(into)] name: String) -> impl IntoView {
    let registry = expect_context::<ComponentRegistry>();
    match registry.get(&name) {
        Some(view) => view.run(),
        None => {
            log::warn!("no component registered as `{name}`");
            ().into_any()
        }
    }
}
