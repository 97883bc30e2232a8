use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::utils::{DEFAULT_API_URL, INJECTED_API_BASE_PROPERTY};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// `API_URL` en tiempo de compilación (tiene prioridad)
    pub api_url: Option<String>,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            api_url: option_env!("API_URL")
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            log_level: option_env!("LOG_LEVEL").unwrap_or("info").to_string(),
        }
    }

    /// URL base del backend: `API_URL` > `window.__API_BASE__` > localhost
    pub fn api_base_url(&self) -> String {
        resolve_api_base(self.api_url.as_deref(), injected_api_base())
    }

    /// Nivel para wasm-logger; `None` si el logging está desactivado
    pub fn log_level(&self) -> Option<log::Level> {
        if !self.enable_logging {
            return None;
        }
        Some(self.log_level.parse().unwrap_or(log::Level::Info))
    }
}

/// `window.__API_BASE__` si `index.html` lo inyecta
fn injected_api_base() -> Option<String> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(INJECTED_API_BASE_PROPERTY))
        .ok()?
        .as_string()
}

fn resolve_api_base(compiled: Option<&str>, injected: Option<String>) -> String {
    let url = compiled
        .map(str::to_string)
        .or(injected)
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    url.trim_end_matches('/').to_string()
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_url_wins() {
        assert_eq!(
            resolve_api_base(Some("https://helpdesk.example.com/"), Some("http://otro".into())),
            "https://helpdesk.example.com"
        );
    }

    #[test]
    fn injected_url_then_default() {
        assert_eq!(resolve_api_base(None, Some("http://10.0.0.5:5001".into())), "http://10.0.0.5:5001");
        assert_eq!(resolve_api_base(None, Some("  ".into())), DEFAULT_API_URL);
        assert_eq!(resolve_api_base(None, None), DEFAULT_API_URL);
    }

    #[test]
    fn log_level_parsing() {
        let mut config = AppConfig::default();
        config.log_level = "debug".into();
        assert_eq!(config.log_level(), Some(log::Level::Debug));

        config.log_level = "verbose".into();
        assert_eq!(config.log_level(), Some(log::Level::Info));

        config.enable_logging = false;
        assert_eq!(config.log_level(), None);
    }
}
