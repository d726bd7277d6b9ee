//! Dark-mode preference.
//!
//! A single boolean persisted in `localStorage`: read once at init, written
//! through on every toggle. Provided via context so the shell and the
//! settings view share the same signal.

use leptos::prelude::*;

const STORAGE_KEY: &str = "darkMode";

#[derive(Clone, Copy)]
pub struct ThemeState {
    pub dark_mode: RwSignal<bool>,
}

impl ThemeState {
    pub fn toggle(&self) {
        let next = !self.dark_mode.get_untracked();
        self.dark_mode.set(next);
        save_dark_mode(next);
    }
}

pub fn provide_theme_state() {
    let state = ThemeState {
        dark_mode: RwSignal::new(load_dark_mode()),
    };
    provide_context(state);
}

pub fn use_theme_state() -> ThemeState {
    expect_context::<ThemeState>()
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load_dark_mode() -> bool {
    storage()
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .map(|v| v == "true")
        .unwrap_or(false)
}

fn save_dark_mode(value: bool) {
    let Some(storage) = storage() else { return };
    let raw = if value { "true" } else { "false" };
    if storage.set_item(STORAGE_KEY, raw).is_err() {
        web_sys::console::warn_1(&"Failed to persist dark-mode preference".into());
    }
}
