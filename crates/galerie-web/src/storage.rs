//! Browser local storage and locale access

use galerie_core::preferences::{UiPreferences, STORAGE_KEY};
use leptos::logging::warn;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Stored preferences, or the defaults when storage is unavailable or corrupt
pub fn load_preferences() -> UiPreferences {
    let raw = local_storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    UiPreferences::from_json(raw.as_deref())
}

pub fn save_preferences(prefs: &UiPreferences) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(err) = storage.set_item(STORAGE_KEY, &prefs.to_json()) {
        warn!("Failed to persist preferences: {:?}", err);
    }
}

/// Read-modify-write of the stored preferences
pub fn update_preferences(f: impl FnOnce(&mut UiPreferences)) {
    let mut prefs = load_preferences();
    f(&mut prefs);
    save_preferences(&prefs);
}

/// `navigator.languages`, falling back to `navigator.language`
pub fn browser_languages() -> Vec<String> {
    let Some(navigator) = web_sys::window().map(|window| window.navigator()) else {
        return Vec::new();
    };

    let languages: Vec<String> = navigator
        .languages()
        .iter()
        .filter_map(|value| value.as_string())
        .collect();
    if !languages.is_empty() {
        return languages;
    }
    navigator.language().into_iter().collect()
}
