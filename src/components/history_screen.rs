// ============================================================================
// HISTORY SCREEN - Reportes propios: lista + detalle
// ============================================================================

use chrono::Local;
use yew::prelude::*;

use crate::models::Report;
use crate::utils::{file_name, format_datetime_es, ticket_number};
use crate::viewmodels::{HistoryState, HistoryViewModel};

fn report_date(report: &Report) -> String {
    report
        .created_at
        .map(|dt| format_datetime_es(&dt.with_timezone(&Local).naive_local()))
        .unwrap_or_else(|| "—".to_string())
}

fn report_title(report: &Report) -> String {
    report
        .ticket
        .title
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Ticket".to_string())
}

fn report_content(report: &Report) -> &str {
    if report.content.trim().is_empty() {
        "(sin contenido)"
    } else {
        &report.content
    }
}

#[function_component(HistoryScreen)]
pub fn history_screen() -> Html {
    let state = use_state(HistoryState::loading);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let vm = HistoryViewModel::new();
                state.set(vm.load().await);
            });
            || ()
        });
    }

    if state.loading {
        return html! { <p class="loading-text">{"Cargando historial…"}</p> };
    }
    if let Some(error) = &state.error {
        return html! { <p class="error-text">{error.clone()}</p> };
    }
    if state.is_empty() {
        return html! { <p class="empty-text">{"Sin reportes todavía."}</p> };
    }

    let selected_id = state.selected_id.clone();

    html! {
        <div class="history-container">
            <h2>{"Historial"}</h2>
            <div class="history-layout">
                <ul class="history-list">
                    { for state.reports.iter().map(|report| {
                        let on_select = {
                            let state = state.clone();
                            let id = report.id.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*state).clone();
                                next.select(&id);
                                state.set(next);
                            })
                        };
                        let selected = selected_id.as_deref() == Some(report.id.as_str());
                        html! {
                            <li
                                key={report.id.clone()}
                                class={classes!("history-item", selected.then_some("selected"))}
                                onclick={on_select}
                            >
                                <strong>{report_title(report)}</strong>
                                if let Some(priority) = report.ticket.priority {
                                    {format!(" — {}", priority.label())}
                                }
                                <div>{format!("Reporte: {}", report_content(report))}</div>
                                <div>{format!("Fecha: {}", report_date(report))}</div>
                                if let Some(path) = &report.excel_path {
                                    <div>{format!("Excel: {}", file_name(path))}</div>
                                }
                            </li>
                        }
                    }) }
                </ul>

                <div class="history-detail">
                    { match state.selected_report() {
                        Some(report) => render_detail(report),
                        None => html! {
                            <div class="no-selection">
                                <div class="no-selection-icon">{"📋"}</div>
                                <h3>{"Selecciona un reporte"}</h3>
                                <p>{"Elige un reporte del historial para ver los detalles completos"}</p>
                            </div>
                        },
                    } }
                </div>
            </div>
        </div>
    }
}

fn render_detail(report: &Report) -> Html {
    let technician = report
        .reporter
        .name
        .clone()
        .unwrap_or_else(|| "—".to_string());

    html! {
        <>
            <div class="report-header">
                <h2>{report_title(report)}</h2>
            </div>

            <div class="report-meta">
                <div class="meta-item">
                    <p class="meta-label">{"Fecha"}</p>
                    <p class="meta-value">{report_date(report)}</p>
                </div>
                <div class="meta-item">
                    <p class="meta-label">{"Técnico"}</p>
                    <p class="meta-value">{technician}</p>
                </div>
                <div class="meta-item">
                    <p class="meta-label">{"Ticket ID"}</p>
                    <p class="meta-value">{ticket_number(&report.ticket.id)}</p>
                </div>
            </div>

            <div class="report-content">
                <h3>{"Descripción del trabajo realizado:"}</h3>
                <div class="content-text">
                    { for report_content(report).lines().map(|line| html! { <p>{line.to_string()}</p> }) }
                </div>
            </div>

            if !report.attachments.is_empty() {
                <div class="report-attachments">
                    <h3>{"Adjuntos"}</h3>
                    <ul>
                        { for report.attachments.iter().map(|name| html! { <li>{file_name(name).to_string()}</li> }) }
                    </ul>
                </div>
            }
        </>
    }
}
