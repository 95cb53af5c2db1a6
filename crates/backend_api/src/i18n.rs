use std::collections::HashMap;
use std::convert::Infallible;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::{header, request::Parts},
};
use serde::Deserialize;

pub const LANG_COOKIE: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// `?lang=` wins over the `lang` cookie; English otherwise.
    pub fn from_parts(parts: &Parts) -> Self {
        query_locale(parts)
            .or_else(|| cookie_locale(parts))
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

fn query_locale(parts: &Parts) -> Option<Locale> {
    let Query(query) = Query::<LangQuery>::try_from_uri(&parts.uri).ok()?;
    query.lang.as_deref().and_then(Locale::from_code)
}

fn cookie_locale(parts: &Parts) -> Option<Locale> {
    parts
        .headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == LANG_COOKIE)
        .and_then(|(_, value)| Locale::from_code(value.trim()))
}

#[async_trait]
impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Locale::from_parts(parts))
    }
}

/// English-keyed string catalogs, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    catalogs: HashMap<Locale, HashMap<String, String>>,
}

impl Translations {
    /// Reads `<dir>/<code>.txt` for every non-English locale. A missing file
    /// leaves that locale without translations.
    pub fn load<P: AsRef<Path>>(dir: P) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        let mut translations = Self::default();

        for locale in Locale::ALL.into_iter().filter(|l| *l != Locale::En) {
            let path = dir.join(format!("{}.txt", locale.code()));
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    let catalog = Self::parse_catalog(&content);
                    tracing::info!(
                        "Loaded {} {} translations from {}",
                        catalog.len(),
                        locale.code(),
                        path.display()
                    );
                    translations.catalogs.insert(locale, catalog);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::warn!("Translation file {} not found", path.display());
                }
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("Reading translation file {}", path.display()));
                }
            }
        }

        Ok(translations)
    }

    /// One `english|translated` pair per line, split on the first `|`.
    /// Lines without a separator are skipped; the first entry for a key wins.
    pub fn parse_catalog(content: &str) -> HashMap<String, String> {
        let mut catalog = HashMap::new();
        for line in content.lines() {
            if let Some((source, translated)) = line.trim().split_once('|') {
                catalog
                    .entry(source.to_string())
                    .or_insert_with(|| translated.to_string());
            }
        }
        catalog
    }

    pub fn with_catalog(mut self, locale: Locale, catalog: HashMap<String, String>) -> Self {
        self.catalogs.insert(locale, catalog);
        self
    }

    pub fn translate<'a>(&'a self, locale: Locale, text: &'a str) -> &'a str {
        self.catalogs
            .get(&locale)
            .and_then(|catalog| catalog.get(text))
            .map(String::as_str)
            .unwrap_or(text)
    }

    pub fn count(&self, locale: Locale) -> usize {
        self.catalogs.get(&locale).map_or(0, HashMap::len)
    }
}
