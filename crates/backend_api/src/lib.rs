pub mod config;
pub mod error;
pub mod handlers;
pub mod html;
pub mod i18n;
pub mod pages;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, Result};
pub use i18n::{Locale, Translations};
pub use router::create_router;
pub use server::{build_state, run_server};
pub use state::AppState;
