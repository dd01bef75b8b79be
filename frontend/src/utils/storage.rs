use serde::de::DeserializeOwned;
use web_sys::{Storage, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Empty values are treated as absent; the host app clears keys by writing "".
pub fn read_item(storage: &Storage, key: &str) -> Option<String> {
    storage
        .get_item(key)
        .ok()
        .flatten()
        .filter(|value| !value.trim().is_empty())
}

pub fn read_json<T: DeserializeOwned>(storage: &Storage, key: &str) -> Option<T> {
    let raw = read_item(storage, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("ignoring malformed `{}` in storage: {}", key, err);
            None
        }
    }
}
