use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

/// 16 MiB
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "lax" => Some(Self::Lax),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }
}

/// Attributes of the `lang` cookie set by the language switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CookiePolicy {
    pub secure: bool,
    pub same_site: SameSite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub settings_path: PathBuf,
    pub translations_dir: PathBuf,
    pub static_dir: PathBuf,
    pub max_content_length: usize,
    pub cookie: CookiePolicy,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            settings_path: PathBuf::from(settings_loader::DEFAULT_SETTINGS_FILE),
            translations_dir: PathBuf::from("translations"),
            static_dir: PathBuf::from("static"),
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            cookie: CookiePolicy::default(),
            log_format: LogFormat::Text,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from environment variables, keeping the
    /// default for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cookie = CookiePolicy {
            secure: lookup("COOKIE_SECURE")
                .map(|v| v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.cookie.secure),
            same_site: lookup("COOKIE_SAMESITE")
                .and_then(|v| SameSite::from_str(&v))
                .unwrap_or(defaults.cookie.same_site),
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => defaults.log_format,
        };

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.port),
            settings_path: lookup("SETTINGS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.settings_path),
            translations_dir: lookup("TRANSLATIONS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.translations_dir),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            max_content_length: lookup("MAX_CONTENT_LENGTH")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_content_length),
            cookie,
            log_format,
        }
    }

    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}
