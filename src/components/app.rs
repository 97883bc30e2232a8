// ============================================================================
// APP - Login o shell autenticado (header + vista activa)
// ============================================================================

use yew::prelude::*;

use super::{Header, HistoryScreen, LoginScreen, ProfileScreen, ReportScreen, TicketsPage};
use crate::hooks::{use_navigation, use_session};
use crate::models::{Priority, Session};
use crate::state::View;

#[function_component(App)]
pub fn app() -> Html {
    let session = use_session();
    let nav = use_navigation();

    let on_login = {
        let on_login = session.on_login.clone();
        let ensure_fragment = nav.ensure_fragment.clone();
        Callback::from(move |new_session: Session| {
            on_login.emit(new_session);
            ensure_fragment.emit(());
        })
    };

    if !session.is_authenticated() {
        return html! { <LoginScreen {on_login} /> };
    }

    let on_logout = {
        let logout = session.logout.clone();
        let reset = nav.reset.clone();
        Callback::from(move |_: ()| {
            logout.emit(());
            reset.emit(());
        })
    };

    let content = match (nav.view, nav.pending_ticket.clone()) {
        (View::Tickets, _) => html! {
            <TicketsPage
                key="tickets"
                priority={Priority::Normal}
                refresh_key={nav.refresh_key}
                on_report={nav.open_report.clone()}
            />
        },
        (View::Urgent, _) => html! {
            <TicketsPage
                key="urgentes"
                priority={Priority::Urgent}
                refresh_key={nav.refresh_key}
                on_report={nav.open_report.clone()}
            />
        },
        (View::History, _) => html! { <HistoryScreen /> },
        (View::Profile, _) => html! {
            <ProfileScreen on_avatar_updated={session.refresh_user.clone()} />
        },
        (View::Report, Some(ticket)) => html! {
            <ReportScreen
                key={ticket.id.clone()}
                ticket={ticket.clone()}
                user={session.user().cloned()}
                on_cancel={nav.close_report.reform(|_: ()| false)}
                on_success={nav.close_report.reform(|_: ()| true)}
            />
        },
        (View::Report, None) => html! {},
    };

    html! {
        <div class="app">
            <Header
                active_view={nav.view}
                user={session.user().cloned()}
                on_navigate={nav.goto.clone()}
                {on_logout}
                on_avatar_updated={session.refresh_user.clone()}
            />
            <main class="main-content">
                <div class="content">
                    {content}
                </div>
            </main>
        </div>
    }
}
