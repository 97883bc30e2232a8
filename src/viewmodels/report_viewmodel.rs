// ============================================================================
// REPORT VIEWMODEL - Formulario de reporte de trabajo
// ============================================================================

use crate::models::{Attachment, Report};
use crate::services::{ApiClient, GlooTransport, HttpTransport};
use crate::utils::{attachments_label, BrowserStorage, KeyValueStore};

use super::error_text;

const SUBMIT_ERROR_FALLBACK: &str = "No se pudo enviar el reporte";
const EMPTY_CONTENT_ERROR: &str = "Describe el trabajo realizado antes de enviar";

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ReportFormState {
    pub content: String,
    pub attachments: Vec<Attachment>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ReportFormState {
    pub fn attachments_label(&self) -> String {
        attachments_label(self.attachments.iter().map(|a| a.file_name.as_str()))
    }

    /// Estado mientras la petición está en vuelo
    pub fn submitting(&self) -> Self {
        Self {
            loading: true,
            error: None,
            ..self.clone()
        }
    }
}

pub struct ReportViewModel<T = GlooTransport, S = BrowserStorage> {
    api: ApiClient<T, S>,
}

impl ReportViewModel {
    pub fn new() -> Self {
        Self::with_api(ApiClient::new())
    }
}

impl<T: HttpTransport, S: KeyValueStore> ReportViewModel<T, S> {
    pub fn with_api(api: ApiClient<T, S>) -> Self {
        Self { api }
    }

    /// Envía el reporte. `on_success` solo se llama si el backend lo acepta;
    /// en cualquier otro caso el error queda en el estado devuelto.
    pub async fn submit<F>(&self, ticket_id: &str, form: ReportFormState, on_success: F) -> ReportFormState
    where
        F: FnOnce(Report),
    {
        if form.content.trim().is_empty() {
            return ReportFormState {
                loading: false,
                error: Some(EMPTY_CONTENT_ERROR.to_string()),
                ..form
            };
        }

        let result = self
            .api
            .send_report(ticket_id, &form.content, form.attachments.clone())
            .await;

        match result {
            Ok(report) => {
                on_success(report);
                ReportFormState {
                    loading: false,
                    error: None,
                    ..form
                }
            }
            Err(e) => {
                log::error!("❌ Error enviando reporte: {}", e);
                ReportFormState {
                    loading: false,
                    error: Some(error_text(&e, SUBMIT_ERROR_FALLBACK)),
                    ..form
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock_transport::MockTransport;
    use crate::stores::SessionStore;
    use crate::utils::storage::memory::MemoryStorage;
    use futures::executor::block_on;

    fn view_model(transport: MockTransport) -> ReportViewModel<MockTransport, MemoryStorage> {
        let session = SessionStore::new(MemoryStorage::new());
        session.set_session("tok", None);
        ReportViewModel::with_api(ApiClient::with_parts("http://api.test", transport, session))
    }

    fn filled_form() -> ReportFormState {
        ReportFormState {
            content: "Se reemplazó el módem".into(),
            attachments: vec![Attachment::new("foto.jpg", "image/jpeg", vec![1])],
            ..ReportFormState::default()
        }
    }

    #[test]
    fn server_error_sets_message_and_skips_callback() {
        let transport = MockTransport::new();
        transport.respond(413, "Payload Too Large", r#"{"message":"quota exceeded"}"#);
        let vm = view_model(transport);

        let mut called = false;
        let state = block_on(vm.submit("t1", filled_form().submitting(), |_| called = true));

        assert!(!called);
        assert_eq!(state.error.as_deref(), Some("quota exceeded"));
        assert!(!state.loading);
        assert_eq!(state.content, "Se reemplazó el módem");
    }

    #[test]
    fn success_calls_callback_once() {
        let transport = MockTransport::new();
        transport.respond_json(201, r#"{"_id":"r1","ticketId":"t1","content":"Se reemplazó el módem"}"#);
        let vm = view_model(transport);

        let mut reports = Vec::new();
        let state = block_on(vm.submit("t1", filled_form().submitting(), |report| reports.push(report.id)));

        assert_eq!(reports, vec!["r1".to_string()]);
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[test]
    fn empty_content_is_rejected_locally() {
        let transport = MockTransport::new();
        let vm = view_model(transport.clone());

        let form = ReportFormState {
            content: "   ".into(),
            ..ReportFormState::default()
        };
        let state = block_on(vm.submit("t1", form, |_| panic!("no debe enviarse")));

        assert_eq!(state.error.as_deref(), Some(EMPTY_CONTENT_ERROR));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn submitting_clears_previous_error() {
        let form = ReportFormState {
            error: Some("anterior".into()),
            ..filled_form()
        };
        let pending = form.submitting();
        assert!(pending.loading);
        assert_eq!(pending.error, None);
        assert_eq!(pending.attachments_label(), "foto.jpg");
    }
}
