use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global_key(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

// window.__DELIVERY_ENV = { API_BASE_URL: "..." } (env.js) wins over
// window.__DELIVERY_CONFIG = { api_base_url: "..." }.
fn snapshot_from_globals() -> Option<String> {
    read_global_key("__DELIVERY_ENV", ["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key("__DELIVERY_CONFIG", ["api_base_url", "API_BASE_URL"]))
}

pub fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let resp = reqwest::get("./config.json")
        .await
        .context("config.json request failed")?;
    if !resp.status().is_success() {
        return Err(anyhow!("config.json answered {}", resp.status()));
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("config.json is not valid JSON")
}

/// Base URL available without waiting for `config.json`: the cached value
/// or one set through the window globals.
pub fn known_api_base_url() -> Option<String> {
    API_BASE_URL
        .get()
        .cloned()
        .or_else(|| snapshot_from_globals().map(|url| cache_base_url(&url)))
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    match fetch_runtime_config().await {
        Ok(RuntimeConfig {
            api_base_url: Some(url),
        }) => return cache_base_url(&url),
        Ok(_) => log::info!("config.json has no api_base_url; using default"),
        Err(err) => log::info!("runtime config unavailable ({:#}); using default", err),
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL: {}", base);
}
