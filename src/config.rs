//! Build-time configuration with an optional runtime override.
//!
//! Values come from `option_env!` at compile time; a page can replace any of
//! them by defining `window.WEBUI_CONFIG` before the WASM module starts, so a
//! static deployment can point at another API without rebuilding. Values are
//! public, so keep secrets out of here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::components::header::HeaderVariant;
use crate::router::navigator::DEFAULT_GUARD_TIMEOUT;

/// Frontend configuration, provided to components via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub guard_timeout: Duration,
    pub header: HeaderVariant,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            guard_timeout: DEFAULT_GUARD_TIMEOUT,
            header: HeaderVariant::default(),
        }
    }
}

impl AppConfig {
    /// Load build-time values and apply runtime overrides.
    pub fn load() -> Self {
        let build = RuntimeConfig {
            api_base_url: option_env!("WEBUI_API_BASE_URL").and_then(normalize_runtime_value),
            guard_timeout_ms: option_env!("WEBUI_GUARD_TIMEOUT_MS").and_then(normalize_runtime_value),
            header: option_env!("WEBUI_HEADER").and_then(normalize_runtime_value),
        };
        let mut config = Self::default();
        apply_runtime_overrides(&mut config, build);
        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }
        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    guard_timeout_ms: Option<String>,
    header: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value.trim_end_matches('/').to_owned();
    }
    if let Some(value) = runtime.guard_timeout_ms {
        match value.parse::<u64>() {
            Ok(ms) if ms > 0 => config.guard_timeout = Duration::from_millis(ms),
            _ => log::warn!("ignoring invalid guard timeout {value:?}"),
        }
    }
    if let Some(value) = runtime.header {
        match HeaderVariant::from_name(&value) {
            Some(header) => config.header = header,
            None => log::warn!("ignoring unknown header component {value:?}"),
        }
    }
}

#[cfg(feature = "csr")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let Ok(config) = Reflect::get(&window, &JsValue::from_str("WEBUI_CONFIG")) else {
        return None;
    };
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        guard_timeout_ms: read_runtime_value(&object, "guard_timeout_ms"),
        header: read_runtime_value(&object, "header"),
    })
}

#[cfg(not(feature = "csr"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(feature = "csr")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let Ok(value) = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)) else {
        return None;
    };
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
