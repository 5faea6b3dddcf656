//! Platform glue: the location fragment, the clipboard and local settings.

/// The `#...` part of the current location, rewritten without navigating.
pub trait LocationFragment {
    /// Replace the fragment; `fragment` excludes the leading `#`.
    fn replace_fragment(&mut self, fragment: &str);
}

/// Records fragments in memory. Used on desktop (no address bar) and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    pub history: Vec<String>,
}

impl MemoryLocation {
    /// Current fragment including the leading `#`, if one was ever set.
    pub fn current(&self) -> Option<String> {
        self.history.last().map(|f| format!("#{f}"))
    }
}

impl LocationFragment for MemoryLocation {
    fn replace_fragment(&mut self, fragment: &str) {
        self.history.push(fragment.to_string());
    }
}

/// `history.replaceState` on the browser location.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

#[cfg(target_arch = "wasm32")]
impl LocationFragment for BrowserLocation {
    fn replace_fragment(&mut self, fragment: &str) {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        let url = format!("#{fragment}");
        if let Err(err) =
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url))
        {
            tracing::warn!(?err, "failed to rewrite location fragment");
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformLocation = BrowserLocation;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformLocation = MemoryLocation;

/// Put `text` on the system clipboard. Failures are logged and reported as `false`.
#[cfg(not(target_arch = "wasm32"))]
pub fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new().and_then(|mut clip| clip.set_text(text.to_string())) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(%err, "clipboard unavailable");
            false
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn copy_to_clipboard(text: &str) -> bool {
    match web_sys::window() {
        Some(window) => {
            // Fire and forget: the promise resolves after the copy.
            let _ = window.navigator().clipboard().write_text(text);
            true
        }
        None => false,
    }
}

/// Read a persisted user setting (`localStorage` on the web, environment on native).
#[cfg(target_arch = "wasm32")]
pub fn read_setting(storage_key: &str, _env_var: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(storage_key).ok().flatten())
        .filter(|v| !v.trim().is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_setting(_storage_key: &str, env_var: &str) -> Option<String> {
    std::env::var(env_var).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_location_tracks_latest_fragment() {
        let mut location = MemoryLocation::default();
        assert_eq!(location.current(), None);
        location.replace_fragment("3-42");
        location.replace_fragment("3");
        assert_eq!(location.current().as_deref(), Some("#3"));
        assert_eq!(location.history, vec!["3-42", "3"]);
    }
}
