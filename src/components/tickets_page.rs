use yew::prelude::*;

use super::TicketList;
use crate::models::{Priority, Ticket};
use crate::viewmodels::{LoadGuard, TicketListState, TicketsViewModel};

#[derive(Properties, PartialEq)]
pub struct TicketsPageProps {
    pub priority: Priority,
    /// Cambia tras enviar un reporte; fuerza la recarga
    pub refresh_key: u32,
    pub on_report: Callback<Ticket>,
}

/// Lista "Tickets" (prioridad normal) o "Urgentes"
#[function_component(TicketsPage)]
pub fn tickets_page(props: &TicketsPageProps) -> Html {
    let state = use_state(TicketListState::loading);

    {
        let state = state.clone();
        use_effect_with((props.priority, props.refresh_key), move |(priority, _)| {
            let priority = *priority;
            // Una carga reemplazada (otra prioridad o refresh) no pisa la actual
            let guard = LoadGuard::new();
            state.set(TicketListState::loading());
            {
                let guard = guard.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let vm = TicketsViewModel::new();
                    if let Some(loaded) = vm.load_guarded(priority, &guard).await {
                        state.set(loaded);
                    }
                });
            }
            move || guard.cancel()
        });
    }

    let (loading_text, title) = match props.priority {
        Priority::Normal => ("Cargando tickets…", "Tickets"),
        Priority::Urgent => ("Cargando urgentes…", "Urgentes"),
    };

    if state.loading {
        return html! { <p class="loading-text">{loading_text}</p> };
    }
    if let Some(error) = &state.error {
        return html! { <p class="error-text">{error.clone()}</p> };
    }

    html! {
        <TicketList
            title={title}
            tickets={state.tickets.clone()}
            on_report={props.on_report.clone()}
        />
    }
}
