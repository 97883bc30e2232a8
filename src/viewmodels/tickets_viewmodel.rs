use std::cell::Cell;
use std::rc::Rc;

use crate::models::{filter_by_priority, Priority, Ticket};
use crate::services::{ApiClient, GlooTransport, HttpTransport};
use crate::utils::{BrowserStorage, KeyValueStore};

use super::error_text;

/// Estado de las listas "Tickets" y "Urgentes"
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TicketListState {
    pub tickets: Vec<Ticket>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TicketListState {
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }
}

/// Carga en curso de una lista; al cancelarla su resultado se descarta
#[derive(Clone, Default)]
pub struct LoadGuard(Rc<Cell<bool>>);

impl LoadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

pub struct TicketsViewModel<T = GlooTransport, S = BrowserStorage> {
    api: ApiClient<T, S>,
}

impl TicketsViewModel {
    pub fn new() -> Self {
        Self::with_api(ApiClient::new())
    }
}

impl<T: HttpTransport, S: KeyValueStore> TicketsViewModel<T, S> {
    pub fn with_api(api: ApiClient<T, S>) -> Self {
        Self { api }
    }

    /// Tickets abiertos de una prioridad, en el orden del backend
    pub async fn load(&self, priority: Priority) -> TicketListState {
        match self.api.list_open_tickets().await {
            Ok(all) => TicketListState {
                tickets: filter_by_priority(all, priority),
                ..TicketListState::default()
            },
            Err(e) => {
                log::error!("❌ Error cargando tickets: {}", e);
                TicketListState {
                    error: Some(error_text(&e, load_error_fallback(priority))),
                    ..TicketListState::default()
                }
            }
        }
    }

    /// Como `load`, pero `None` si la carga se canceló mientras esperaba
    pub async fn load_guarded(&self, priority: Priority, guard: &LoadGuard) -> Option<TicketListState> {
        let state = self.load(priority).await;
        if guard.is_cancelled() {
            log::info!("📋 Respuesta de {} descartada", priority.label());
            return None;
        }
        Some(state)
    }
}

fn load_error_fallback(priority: Priority) -> &'static str {
    match priority {
        Priority::Normal => "Error al cargar tickets",
        Priority::Urgent => "Error al cargar urgentes",
    }
}
