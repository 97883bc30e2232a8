// ============================================================================
// NAVIGATION STATE - Máquina de estados de las pantallas (fragmento de la URL)
// ============================================================================
// Invariante: `pending_report_ticket` es Some si y solo si la vista activa es
// `Report`. A `Report` solo se entra con `open_report`.
// ============================================================================

use crate::models::Ticket;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum View {
    Tickets,
    Urgent,
    History,
    Profile,
    Report,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Tickets,
        View::Urgent,
        View::History,
        View::Profile,
        View::Report,
    ];

    /// Valor del fragmento en la URL (`#urgentes`, ...)
    pub fn fragment(&self) -> &'static str {
        match self {
            View::Tickets => "tickets",
            View::Urgent => "urgentes",
            View::History => "history",
            View::Profile => "profile",
            View::Report => "report",
        }
    }

    /// Interpreta un fragmento sin distinguir mayúsculas; ignora `#` y espacios
    pub fn from_fragment(raw: &str) -> Option<View> {
        let normalized = raw.trim().trim_start_matches('#').trim().to_lowercase();
        View::ALL
            .into_iter()
            .find(|view| view.fragment() == normalized)
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Tickets => "Tickets",
            View::Urgent => "Urgentes",
            View::History => "Historial",
            View::Profile => "Mi Perfil",
            View::Report => "Reporte",
        }
    }
}

/// Resultado de aplicar un cambio de fragmento externo
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FragmentOutcome {
    /// La URL ya refleja la vista activa
    Accepted,
    /// La URL pedía un estado inválido; hay que reescribirla con `fragment()`
    Redirected,
}

#[derive(Clone, PartialEq, Debug)]
pub struct NavigationState {
    active_view: View,
    pending_report_ticket: Option<Ticket>,
    refresh_key: u32,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_view: View::Tickets,
            pending_report_ticket: None,
            refresh_key: 0,
        }
    }
}

impl NavigationState {
    /// Estado inicial desde el fragmento al cargar (nunca hay ticket pendiente)
    pub fn from_fragment(fragment: &str) -> Self {
        let active_view = match View::from_fragment(fragment) {
            Some(View::Report) | None => View::Tickets,
            Some(view) => view,
        };
        Self {
            active_view,
            ..Self::default()
        }
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn pending_report_ticket(&self) -> Option<&Ticket> {
        self.pending_report_ticket.as_ref()
    }

    pub fn refresh_key(&self) -> u32 {
        self.refresh_key
    }

    pub fn fragment(&self) -> &'static str {
        self.active_view.fragment()
    }

    /// ¿El fragmento dado ya corresponde a la vista activa?
    pub fn matches_fragment(&self, fragment: &str) -> bool {
        View::from_fragment(fragment) == Some(self.active_view)
    }

    /// Transición genérica (menú). `Report` se rechaza: requiere `open_report`.
    pub fn goto(&mut self, view: View) -> bool {
        if view == View::Report {
            log::warn!("⚠️ No se puede abrir el reporte sin ticket seleccionado");
            return false;
        }
        self.active_view = view;
        self.pending_report_ticket = None;
        true
    }

    pub fn open_report(&mut self, ticket: Ticket) {
        log::info!("📝 Reporte para ticket {}", ticket.id);
        self.active_view = View::Report;
        self.pending_report_ticket = Some(ticket);
    }

    /// Vuelve a tickets; con `refresh` las listas recargan
    pub fn close_report(&mut self, refresh: bool) {
        self.active_view = View::Tickets;
        self.pending_report_ticket = None;
        if refresh {
            self.refresh_key = self.refresh_key.wrapping_add(1);
        }
    }

    /// Back/forward o edición manual de la URL
    pub fn on_fragment_change(&mut self, fragment: &str) -> FragmentOutcome {
        match View::from_fragment(fragment) {
            Some(View::Report) if self.pending_report_ticket.is_some() => {
                self.active_view = View::Report;
                FragmentOutcome::Accepted
            }
            Some(View::Report) | None => {
                log::warn!("⚠️ Fragmento '{}' no navegable, volviendo a tickets", fragment);
                self.active_view = View::Tickets;
                self.pending_report_ticket = None;
                FragmentOutcome::Redirected
            }
            Some(view) => {
                self.active_view = view;
                self.pending_report_ticket = None;
                FragmentOutcome::Accepted
            }
        }
    }

    /// Al cerrar sesión
    pub fn reset(&mut self) {
        self.active_view = View::Tickets;
        self.pending_report_ticket = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, TicketStatus};

    fn ticket(id: &str) -> Ticket {
        Ticket {
            id: id.into(),
            title: format!("Ticket {}", id),
            description: String::new(),
            priority: Priority::Normal,
            status: TicketStatus::Open,
            created_at: None,
            closed_at: None,
        }
    }

    fn assert_invariant(state: &NavigationState) {
        assert_eq!(
            state.pending_report_ticket().is_some(),
            state.active_view() == View::Report
        );
    }

    #[test]
    fn initial_view_from_recognized_fragments() {
        let cases = [
            ("tickets", View::Tickets),
            ("#URGENTES", View::Urgent),
            ("History", View::History),
            (" profile ", View::Profile),
            ("report", View::Tickets),
            ("#Report", View::Tickets),
        ];
        for (fragment, expected) in cases {
            let state = NavigationState::from_fragment(fragment);
            assert_eq!(state.active_view(), expected, "fragmento {:?}", fragment);
            assert_invariant(&state);
        }
    }

    #[test]
    fn unrecognized_fragments_start_on_tickets() {
        for fragment in ["", "#", "urgent", "perfil", "tickets/1", "reports"] {
            assert_eq!(
                NavigationState::from_fragment(fragment).active_view(),
                View::Tickets
            );
        }
    }

    #[test]
    fn open_report_sets_pending_ticket() {
        let mut state = NavigationState::from_fragment("urgentes");
        state.open_report(ticket("T"));

        assert_eq!(state.active_view(), View::Report);
        assert_eq!(state.pending_report_ticket(), Some(&ticket("T")));
        assert_eq!(state.fragment(), "report");
        assert_invariant(&state);
    }

    #[test]
    fn back_navigation_clears_pending_ticket() {
        let mut state = NavigationState::default();
        state.open_report(ticket("T"));

        let outcome = state.on_fragment_change("#tickets");
        assert_eq!(outcome, FragmentOutcome::Accepted);
        assert_eq!(state.active_view(), View::Tickets);
        assert_eq!(state.pending_report_ticket(), None);
    }

    #[test]
    fn goto_never_enters_report() {
        let mut state = NavigationState::from_fragment("history");
        assert!(!state.goto(View::Report));
        assert_eq!(state.active_view(), View::History);

        state.open_report(ticket("T"));
        assert!(!state.goto(View::Report));
        assert_eq!(state.pending_report_ticket(), Some(&ticket("T")));
    }

    #[test]
    fn goto_out_of_report_drops_ticket() {
        let mut state = NavigationState::default();
        state.open_report(ticket("T"));

        assert!(state.goto(View::History));
        assert_eq!(state.active_view(), View::History);
        assert_invariant(&state);
    }

    #[test]
    fn report_fragment_without_ticket_redirects() {
        let mut state = NavigationState::from_fragment("history");
        let outcome = state.on_fragment_change("report");

        assert_eq!(outcome, FragmentOutcome::Redirected);
        assert_eq!(state.active_view(), View::Tickets);
        assert!(!state.matches_fragment("report"));
        assert!(state.matches_fragment("tickets"));
    }

    #[test]
    fn report_fragment_with_ticket_is_kept() {
        let mut state = NavigationState::default();
        state.open_report(ticket("T"));

        assert_eq!(state.on_fragment_change("report"), FragmentOutcome::Accepted);
        assert_eq!(state.active_view(), View::Report);
        assert_invariant(&state);
    }

    #[test]
    fn unknown_fragment_change_falls_back() {
        let mut state = NavigationState::from_fragment("profile");
        assert_eq!(state.on_fragment_change("#nada"), FragmentOutcome::Redirected);
        assert_eq!(state.active_view(), View::Tickets);
    }

    #[test]
    fn close_report_refresh_bumps_key() {
        let mut state = NavigationState::default();
        state.open_report(ticket("T"));
        state.close_report(false);
        assert_eq!(state.refresh_key(), 0);
        assert_eq!(state.active_view(), View::Tickets);

        state.open_report(ticket("T"));
        state.close_report(true);
        assert_eq!(state.refresh_key(), 1);
        assert_invariant(&state);
    }

    #[test]
    fn reset_returns_to_tickets() {
        let mut state = NavigationState::from_fragment("history");
        state.open_report(ticket("T"));
        state.reset();
        assert_eq!(state.active_view(), View::Tickets);
        assert_invariant(&state);
    }
}
