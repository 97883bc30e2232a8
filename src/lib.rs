// ============================================================================
// HELPDESK PWA - Front de técnicos: tickets, urgentes, reportes e historial
// ============================================================================
// Capas:
// - Models: tipos de dominio + DTOs del backend
// - Stores: sesión persistida (localStorage)
// - Services: ApiClient sobre HttpTransport, router del fragmento
// - State: máquina de navegación
// - ViewModels: estado de cada pantalla
// - Hooks / Components: Yew
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;

use crate::components::App;
use crate::config::CONFIG;

/// Arranque: panic hook, logger y render de `App` en `<body>`
pub fn start() {
    console_error_panic_hook::set_once();

    if let Some(level) = CONFIG.log_level() {
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!(
        "🚀 Helpdesk PWA ({}) - backend {}",
        CONFIG.environment,
        CONFIG.api_base_url()
    );

    yew::Renderer::<App>::new().render();
}
