use std::sync::Arc;

use models::Settings;

use crate::{config::CookiePolicy, i18n::Translations};

/// Read-only state shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub translations: Arc<Translations>,
    pub cookie: CookiePolicy,
}

impl AppState {
    pub fn new(settings: Settings, translations: Translations, cookie: CookiePolicy) -> Self {
        Self {
            settings: Arc::new(settings),
            translations: Arc::new(translations),
            cookie,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Settings::default(),
            Translations::default(),
            CookiePolicy::default(),
        )
    }
}
