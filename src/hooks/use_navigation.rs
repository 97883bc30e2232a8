// ============================================================================
// USE NAVIGATION HOOK - NavigationState <-> fragmento de la URL
// ============================================================================
// Las transiciones del menú hacen push (entrada de historial); los fragmentos
// inválidos que llegan por back/forward se reescriben con replace.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::models::Ticket;
use crate::services::router;
use crate::state::navigation::{FragmentOutcome, NavigationState, View};

#[derive(Clone)]
pub struct UseNavigationHandle {
    pub view: View,
    pub pending_ticket: Option<Ticket>,
    pub refresh_key: u32,
    pub goto: Callback<View>,
    pub open_report: Callback<Ticket>,
    pub close_report: Callback<bool>,
    pub reset: Callback<()>,
    /// Tras el login: si la URL no tiene fragmento, pone el de la vista activa
    pub ensure_fragment: Callback<()>,
}

#[hook]
pub fn use_navigation() -> UseNavigationHandle {
    let state = use_mut_ref(|| NavigationState::from_fragment(&router::current_fragment()));
    let update = use_force_update();

    // Escucha hashchange (back/forward, edición manual)
    {
        let state = state.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            let initial = router::current_fragment();
            if !initial.is_empty() && !state.borrow().matches_fragment(&initial) {
                let target = state.borrow().fragment();
                log::warn!("⚠️ Fragmento inicial '#{}' reescrito a '#{}'", initial, target);
                router::replace_fragment(target);
            }

            let listener = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                let fragment = router::current_fragment();
                let outcome = state.borrow_mut().on_fragment_change(&fragment);
                if outcome == FragmentOutcome::Redirected {
                    let target = state.borrow().fragment();
                    router::replace_fragment(target);
                }
                update.force_update();
            }) as Box<dyn FnMut(web_sys::Event)>);

            let window = web_sys::window();
            if let Some(window) = &window {
                if window
                    .add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("⚠️ No se pudo escuchar hashchange");
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "hashchange",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }

    let goto = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |view: View| {
            if state.borrow_mut().goto(view) {
                let fragment = state.borrow().fragment();
                router::push_fragment(fragment);
                update.force_update();
            }
        })
    };

    let open_report = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |ticket: Ticket| {
            state.borrow_mut().open_report(ticket);
            router::push_fragment(View::Report.fragment());
            update.force_update();
        })
    };

    let close_report = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |refresh: bool| {
            state.borrow_mut().close_report(refresh);
            let fragment = state.borrow().fragment();
            router::push_fragment(fragment);
            update.force_update();
        })
    };

    let reset = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |_| {
            state.borrow_mut().reset();
            let fragment = state.borrow().fragment();
            router::push_fragment(fragment);
            update.force_update();
        })
    };

    let ensure_fragment = {
        let state = state.clone();
        Callback::from(move |_| {
            if router::current_fragment().is_empty() {
                let fragment = state.borrow().fragment();
                router::push_fragment(fragment);
            }
        })
    };

    let current = state.borrow();
    UseNavigationHandle {
        view: current.active_view(),
        pending_ticket: current.pending_report_ticket().cloned(),
        refresh_key: current.refresh_key(),
        goto,
        open_report,
        close_report,
        reset,
        ensure_fragment,
    }
}
