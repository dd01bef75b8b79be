use super::storage;

/// Navigates within the app, keeping the current entry in history.
pub fn navigate_to(path: &str) {
    match storage::window() {
        Ok(window) => {
            if let Err(err) = window.location().set_href(path) {
                log::error!("navigation to {} failed: {:?}", path, err);
            }
        }
        Err(err) => log::warn!("cannot navigate to {}: {}", path, err),
    }
}

/// Leaves the app for `url`, replacing the current history entry so the
/// back button does not return to a submitted form.
pub fn replace_location(url: &str) {
    match storage::window() {
        Ok(window) => {
            if let Err(err) = window.location().replace(url) {
                log::error!("redirect to {} failed: {:?}", url, err);
            }
        }
        Err(err) => log::warn!("cannot redirect to {}: {}", url, err),
    }
}
