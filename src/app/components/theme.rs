//! Light/dark theme toggle.

use dioxus::prelude::*;

/// localStorage key holding the chosen theme
pub const THEME_STORAGE_KEY: &str = "reporter-theme";

/// Supported color schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown or missing values fall back to light
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Single button flipping between light and dark.
/// Uses localStorage for persistence and Pico CSS data-theme attribute.
#[component]
pub fn ThemeToggle() -> Element {
    let mut current_theme = use_signal(|| Theme::Light);

    // Load theme from localStorage on mount
    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    if let Ok(stored) = storage.get_item(THEME_STORAGE_KEY) {
                        current_theme.set(Theme::parse(stored.as_deref()));
                    }
                }
            }
        }
    });

    let mut set_theme = move |theme: Theme| {
        current_theme.set(theme);

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Some(root) = window.document().and_then(|d| d.document_element()) {
                    let _ = root.set_attribute("data-theme", theme.as_str());
                }

                // Save to localStorage
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
                }
            }
        }
    };

    let theme = current_theme();
    let label = match theme {
        Theme::Light => "☾ Dark",
        Theme::Dark => "☀ Light",
    };

    rsx! {
        button {
            class: "theme-toggle secondary outline",
            title: "Toggle theme",
            onclick: move |_| set_theme(theme.toggled()),
            "{label}"
        }
    }
}

/// Client-side JavaScript for initial theme setup (included in head).
/// Runs immediately to prevent flash of wrong theme.
pub const THEME_SCRIPT: &str = r#"
(function(){
    const t = localStorage.getItem('reporter-theme') === 'dark' ? 'dark' : 'light';
    document.documentElement.setAttribute('data-theme', t);
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!(Theme::parse(Some("dark")), Theme::Dark);
        assert_eq!(Theme::parse(Some("black")), Theme::Light);
        assert_eq!(Theme::parse(None), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }

    #[test]
    fn test_script_uses_storage_key() {
        assert!(THEME_SCRIPT.contains(THEME_STORAGE_KEY));
    }
}
