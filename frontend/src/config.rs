use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Shape of the optional `config.json` served next to the bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
}

/// Resolves the API base URL once and caches it for the lifetime of the app.
///
/// In the browser the probe order is: `window.__HRMS_ENV` global, then a
/// `config.json` fetched relative to the bundle, then the fixed default. Host
/// builds read `HRMS_API_URL` instead (tests pin the URL on the client
/// directly and never get here).
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(url) = web::base_url_from_globals() {
            return cache_base_url(&url);
        }
        if let Some(config) = web::fetch_runtime_config().await {
            if let Some(url) = config.api_base_url {
                if !url.trim().is_empty() {
                    return cache_base_url(&url);
                }
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Ok(url) = std::env::var("HRMS_API_URL") {
            if !url.trim().is_empty() {
                return cache_base_url(&url);
            }
        }
    }

    cache_base_url(DEFAULT_API_BASE_URL)
}

/// Eagerly resolves the base URL so the first page load does not race the
/// `config.json` fetch.
pub async fn init() {
    let base_url = await_api_base_url().await;
    log::info!("api base url: {}", base_url);
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim().trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    pub(super) fn base_url_from_globals() -> Option<String> {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("__HRMS_ENV")).ok()?;
        if env.is_undefined() || env.is_null() {
            return None;
        }
        string_property(&env, "API_BASE_URL").or_else(|| string_property(&env, "api_base_url"))
    }

    pub(super) async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let response = reqwest::get("./config.json").await.ok()?;
        if !response.status().is_success() {
            return None;
        }
        response.json::<RuntimeConfig>().await.ok()
    }

    fn string_property(target: &JsValue, key: &str) -> Option<String> {
        js_sys::Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_string())
            .filter(|value| !value.trim().is_empty())
    }
}
