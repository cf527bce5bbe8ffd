//! Persistence and environment helpers for the app shell.

use crate::config::{API_URL_KEY, BUILD_API_URL, LOCALE_KEY, resolve_api_base_url};
use empleados_core::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    if let Err(err) = LocalStorage::set(LOCALE_KEY, locale.code()) {
        console::error!(format!("failed to persist {LOCALE_KEY}: {err}"));
    }
}

pub(crate) fn api_base_url() -> String {
    let stored = LocalStorage::get::<String>(API_URL_KEY).ok();
    let href = window().location().href().ok();
    resolve_api_base_url(stored.as_deref(), BUILD_API_URL, href.as_deref())
}
