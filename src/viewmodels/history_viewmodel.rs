use crate::models::Report;
use crate::services::{ApiClient, GlooTransport, HttpTransport};
use crate::utils::{BrowserStorage, KeyValueStore};

use super::error_text;

#[derive(Clone, PartialEq, Debug, Default)]
pub struct HistoryState {
    pub reports: Vec<Report>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_id: Option<String>,
}

impl HistoryState {
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.reports.is_empty()
    }

    pub fn select(&mut self, report_id: &str) {
        self.selected_id = Some(report_id.to_string());
    }

    pub fn selected_report(&self) -> Option<&Report> {
        let id = self.selected_id.as_deref()?;
        self.reports.iter().find(|report| report.id == id)
    }
}

pub struct HistoryViewModel<T = GlooTransport, S = BrowserStorage> {
    api: ApiClient<T, S>,
}

impl HistoryViewModel {
    pub fn new() -> Self {
        Self::with_api(ApiClient::new())
    }
}

impl<T: HttpTransport, S: KeyValueStore> HistoryViewModel<T, S> {
    pub fn with_api(api: ApiClient<T, S>) -> Self {
        Self { api }
    }

    pub async fn load(&self) -> HistoryState {
        match self.api.list_my_reports().await {
            Ok(reports) => HistoryState {
                reports,
                ..HistoryState::default()
            },
            Err(e) => {
                log::error!("❌ Error cargando historial: {}", e);
                HistoryState {
                    error: Some(error_text(&e, "Error al cargar historial")),
                    ..HistoryState::default()
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

    fn view_model(transport: MockTransport) -> HistoryViewModel<MockTransport, MemoryStorage> {
        let session = SessionStore::new(MemoryStorage::new());
        session.set_session("tok", None);
        HistoryViewModel::with_api(ApiClient::with_parts("http://api.test", transport, session))
    }

    #[test]
    fn loads_and_selects_reports() {
        let transport = MockTransport::new();
        transport.respond_json(
            200,
            r#"[
                {"_id":"r1","ticketId":{"_id":"t1","title":"Sin red","priority":"urgent"},"content":"Uno"},
                {"_id":"r2","ticketId":"t2","content":"Dos"}
            ]"#,
        );
        let vm = view_model(transport.clone());

        let mut state = block_on(vm.load());
        assert_eq!(state.reports.len(), 2);
        assert_eq!(state.selected_report(), None);

        state.select("r2");
        assert_eq!(state.selected_report().map(|r| r.content.as_str()), Some("Dos"));
        assert_eq!(
            transport.last_request().unwrap().url,
            "http://api.test/api/reports?mine=true"
        );
    }

    #[test]
    fn empty_history() {
        let transport = MockTransport::new();
        transport.respond_json(200, "[]");
        let state = block_on(view_model(transport).load());
        assert!(state.is_empty());
    }

    #[test]
    fn failure_keeps_message() {
        let transport = MockTransport::new();
        transport.respond(401, "Unauthorized", "");
        let state = block_on(view_model(transport).load());
        assert_eq!(state.error.as_deref(), Some("Unauthorized"));
        assert!(!state.is_empty());
    }
}
