// ============================================================================
// REPORT SCREEN - Formulario de reporte de trabajo para un ticket
// ============================================================================

use chrono::Datelike;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_clock;
use crate::models::{Attachment, Ticket, User};
use crate::utils::files::read_input_files;
use crate::utils::{format_date_es, format_time_24h, weekday_es, DEFAULT_AVATAR_URL};
use crate::viewmodels::{ReportFormState, ReportViewModel};

#[derive(Properties, PartialEq)]
pub struct ReportScreenProps {
    pub ticket: Ticket,
    pub user: Option<User>,
    pub on_cancel: Callback<()>,
    /// Reporte aceptado por el backend
    pub on_success: Callback<()>,
}

#[function_component(ReportScreen)]
pub fn report_screen(props: &ReportScreenProps) -> Html {
    let form = use_state(ReportFormState::default);
    // Separado del formulario: se rellena tras leer los archivos (async)
    let attachments = use_state(Vec::<Attachment>::new);
    let now = use_clock();

    let on_content = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ReportFormState {
                content: textarea.value(),
                ..(*form).clone()
            });
        })
    };

    let on_files = {
        let attachments = attachments.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let attachments = attachments.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match read_input_files(&input).await {
                    Ok(files) => {
                        log::info!("📎 {} adjuntos seleccionados", files.len());
                        attachments.set(files);
                    }
                    Err(e) => log::error!("❌ {}", e),
                }
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let attachments = attachments.clone();
        let ticket_id = props.ticket.id.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.loading {
                return;
            }

            let submitting = ReportFormState {
                attachments: (*attachments).clone(),
                ..(*form).clone()
            }
            .submitting();
            form.set(submitting.clone());

            let form = form.clone();
            let ticket_id = ticket_id.clone();
            let on_success = on_success.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = ReportViewModel::new();
                let result = vm
                    .submit(&ticket_id, submitting, |_report| on_success.emit(()))
                    .await;
                form.set(result);
            });
        })
    };

    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    let user = props.user.as_ref();
    let avatar = user
        .and_then(|u| u.avatar_url.clone())
        .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string());
    let name = user.map(|u| u.name.clone()).filter(|n| !n.is_empty());
    let user_id = user.map(|u| u.id.clone()).filter(|id| !id.is_empty());
    let title = Some(props.ticket.title.clone())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Ticket".to_string());
    let attachments_label = ReportFormState {
        attachments: (*attachments).clone(),
        ..ReportFormState::default()
    }
    .attachments_label();

    html! {
        <div class="report-container">
            <form class="report-form" onsubmit={on_submit}>
                <div class="report-form-header">
                    <div class="user-info">
                        <img class="user-photo" src={avatar} alt="Foto de usuario" />
                        <div>
                            <div class="meta-row"><strong>{"Nombre: "}</strong>{name.unwrap_or_else(|| "—".to_string())}</div>
                            <div class="meta-row"><strong>{"Puesto: "}</strong>{"Ingeniero en Sistemas"}</div>
                            <div class="meta-row"><strong>{"ID: "}</strong>{user_id.unwrap_or_else(|| "—".to_string())}</div>
                        </div>
                    </div>

                    <div class="ticket-info">
                        <h3>{title}</h3>
                        <p>
                            {format!(
                                "Fecha: {} | Hora: {} | Día: {}",
                                format_date_es(&now),
                                format_time_24h(&now),
                                weekday_es(now.weekday())
                            )}
                        </p>
                    </div>
                </div>

                if let Some(error) = &form.error {
                    <p class="error-text">{error.clone()}</p>
                }

                <div class="form-group">
                    <label>{"Contenido del reporte"}</label>
                    <textarea
                        value={form.content.clone()}
                        oninput={on_content}
                        required=true
                        disabled={form.loading}
                        placeholder="Describe el trabajo realizado, hallazgos, evidencias, etc."
                    />
                </div>

                <div class="form-group">
                    <label>{"Adjuntos"}</label>
                    <div class="inline-file">
                        <input
                            id="attachmentsInput"
                            type="file"
                            multiple=true
                            class="hidden-file"
                            onchange={on_files}
                            disabled={form.loading}
                        />
                        <label for="attachmentsInput" class="file-button">{"Elegir archivos"}</label>
                        <span class="file-note">{attachments_label}</span>
                    </div>
                </div>

                <div class="report-actions">
                    <button type="button" class="btn-cancel" onclick={on_cancel} disabled={form.loading}>
                        {"Cancelar"}
                    </button>
                    <button type="submit" class="btn-submit" disabled={form.loading}>
                        { if form.loading { "Enviando…" } else { "Enviar Reporte" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
