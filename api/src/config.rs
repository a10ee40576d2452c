//! Centralized configuration management.
//!
//! All environment variables are loaded once through this module. A backend
//! whose settings are absent is reported as unavailable rather than being an
//! error; the operator may legitimately run with a single integration
//! configured.

#[cfg(feature = "server")]
use std::sync::LazyLock;

#[cfg(feature = "server")]
use shared::BackendId;

#[cfg(feature = "server")]
use tracing::warn;

/// Application configuration loaded from environment variables.
#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployed Apps Script web app URL (optional).
    pub apps_script_url: Option<String>,
    /// Supabase project URL (optional).
    pub supabase_url: Option<String>,
    /// Supabase anon key (required alongside SUPABASE_URL).
    pub supabase_anon_key: Option<String>,
    /// Backend selected on a fresh session (default: "google").
    pub default_backend: BackendId,
    /// HTTP server port (default: 9780)
    pub port: u16,
    /// HTTP server bind address (default: "0.0.0.0")
    pub ip: String,
}

#[cfg(feature = "server")]
impl AppConfig {
    /// Load configuration from the environment, honoring a `.env` file when
    /// present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let default_backend = match std::env::var("DEFAULT_BACKEND") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("{e}, falling back to google");
                BackendId::Google
            }),
            Err(_) => BackendId::Google,
        };

        Self {
            apps_script_url: std::env::var("APPS_SCRIPT_URL").ok(),
            supabase_url: std::env::var("SUPABASE_URL").ok(),
            supabase_anon_key: std::env::var("SUPABASE_ANON_KEY").ok(),
            default_backend,
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(9780),
            ip: std::env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string()),
        }
    }

    /// Whether the given backend has everything it needs to be used.
    pub fn backend_configured(&self, id: BackendId) -> bool {
        match id {
            BackendId::Google => self.apps_script_url.is_some(),
            BackendId::Supabase => self.supabase_url.is_some() && self.supabase_anon_key.is_some(),
        }
    }
}

/// Global application configuration singleton.
/// Loaded once at startup from environment variables.
#[cfg(feature = "server")]
pub static CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::from_env);

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    fn config(apps_script: Option<&str>, supabase: Option<(&str, &str)>) -> AppConfig {
        AppConfig {
            apps_script_url: apps_script.map(str::to_string),
            supabase_url: supabase.map(|(url, _)| url.to_string()),
            supabase_anon_key: supabase.map(|(_, key)| key.to_string()),
            default_backend: BackendId::Google,
            port: 9780,
            ip: "0.0.0.0".to_string(),
        }
    }

    #[test]
    fn backend_is_configured_only_with_complete_settings() {
        let neither = config(None, None);
        assert!(!neither.backend_configured(BackendId::Google));
        assert!(!neither.backend_configured(BackendId::Supabase));

        let both = config(
            Some("https://script.google.com/macros/s/abc/exec"),
            Some(("https://xyz.supabase.co", "anon-key")),
        );
        assert!(both.backend_configured(BackendId::Google));
        assert!(both.backend_configured(BackendId::Supabase));
    }
}
