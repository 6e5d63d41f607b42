use gloo::events::EventListener;
use gloo_storage::Storage;
use gloo_storage::errors::StorageError;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use yew::prelude::*;

const STORAGE_KEY: &str = "skip-picker.theme";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Colour scheme preference. `System` follows the browser setting.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Resolves `System` against the browser's current preference.
    pub const fn resolve(self, system_dark: bool) -> Self {
        match self {
            Self::System if system_dark => Self::Dark,
            Self::System => Self::Light,
            other => other,
        }
    }

    /// Next preference when the toggle is pressed, given what is on screen.
    pub const fn toggled(shown: Self) -> Self {
        match shown {
            Self::Dark => Self::Light,
            _ => Self::Dark,
        }
    }

    const fn attribute(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light | Self::System => "light",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub preference: Theme,
    /// Never `System`
    pub shown: Theme,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme() -> ThemeHandle {
    let preference = use_state(|| load_preference().unwrap_or_default());
    let system_dark = use_state(system_prefers_dark);

    let shown = preference.resolve(*system_dark);

    use_effect_with(shown, move |shown| {
        apply_to_document(*shown);
        || ()
    });

    {
        let system_dark = system_dark.clone();
        use_effect_with((), move |_| {
            let listener = watch_system_preference(system_dark.setter());
            move || drop(listener)
        });
    }

    use_effect_with(*preference, move |preference| {
        save_preference(*preference);
        || ()
    });

    let toggle = {
        let preference = preference.clone();
        Callback::from(move |()| preference.set(Theme::toggled(shown)))
    };

    ThemeHandle {
        preference: *preference,
        shown,
        toggle,
    }
}

fn dark_media_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
}

fn system_prefers_dark() -> bool {
    dark_media_query().is_some_and(|mq| mq.matches())
}

fn apply_to_document(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(e) = root.set_attribute("data-theme", theme.attribute()) {
            gloo::console::warn!(format!("Failed to apply theme: {e:?}"));
        }
    }
}

fn load_preference() -> Option<Theme> {
    stored_preference(gloo_storage::LocalStorage::get(STORAGE_KEY)).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("Failed to read theme, following system: {e}").into());
        None
    })
}

/// Nothing stored yet is not an error.
fn stored_preference(
    result: Result<Theme, StorageError>,
) -> Result<Option<Theme>, StorageError> {
    match result {
        Ok(theme) => Ok(Some(theme)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

fn save_preference(theme: Theme) {
    if let Err(e) = gloo_storage::LocalStorage::set(STORAGE_KEY, theme) {
        web_sys::console::warn_1(&format!("Failed to save theme: {e}").into());
    }
}

fn watch_system_preference(setter: UseStateSetter<bool>) -> Option<EventListener> {
    let target = dark_media_query()?.dyn_into::<web_sys::EventTarget>().ok()?;
    Some(EventListener::new(&target, "change", move |_| {
        setter.set(system_prefers_dark());
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_resolves_to_browser_setting() {
        assert_eq!(Theme::System.resolve(true), Theme::Dark);
        assert_eq!(Theme::System.resolve(false), Theme::Light);
    }

    #[test]
    fn test_explicit_preference_wins() {
        assert_eq!(Theme::Light.resolve(true), Theme::Light);
        assert_eq!(Theme::Dark.resolve(false), Theme::Dark);
    }

    #[test]
    fn test_missing_preference_is_not_an_error() {
        let result = stored_preference(Err(StorageError::KeyNotFound(STORAGE_KEY.to_string())));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_stored_preference_is_returned() {
        let result = stored_preference(Ok(Theme::Dark));
        assert!(matches!(result, Ok(Some(Theme::Dark))));
    }

    #[test]
    fn test_corrupt_preference_is_reported() {
        let parse_error = serde_json::from_str::<Theme>("\"Sepia\"").unwrap_err();
        let result = stored_preference(Err(StorageError::SerdeError(parse_error)));
        assert!(result.is_err());
    }

    #[test]
    fn test_toggle_flips_what_is_shown() {
        assert_eq!(Theme::toggled(Theme::Dark), Theme::Light);
        assert_eq!(Theme::toggled(Theme::Light), Theme::Dark);
    }
}
