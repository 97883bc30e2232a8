// ============================================================================
// VIEWMODELS - Estado de cada pantalla + lógica que llama al ApiClient
// ============================================================================
// Devuelven el nuevo estado; los componentes solo lo guardan y lo pintan
// ============================================================================

pub mod history_viewmodel;
pub mod login_viewmodel;
pub mod profile_viewmodel;
pub mod report_viewmodel;
pub mod tickets_viewmodel;

pub use history_viewmodel::{HistoryState, HistoryViewModel};
pub use login_viewmodel::{LoginFormState, LoginViewModel};
pub use profile_viewmodel::{AvatarFormState, ProfileViewModel};
pub use report_viewmodel::{ReportFormState, ReportViewModel};
pub use tickets_viewmodel::{LoadGuard, TicketListState, TicketsViewModel};

use crate::services::RequestError;

/// Mensaje para la vista; `fallback` si el error viene vacío
pub(crate) fn error_text(error: &RequestError, fallback: &str) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
