//! Window-level navigation the router can't do (leaving the app).

use tracing::warn;

/// Send the whole window to an external URL (OAuth consent screen).
pub fn redirect(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_ok() {
                return;
            }
        }
    }
    warn!(url, "Cannot redirect outside a browser");
}
