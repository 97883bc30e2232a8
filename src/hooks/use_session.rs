// ============================================================================
// USE SESSION HOOK - Sesión del SessionStore como estado de Yew
// ============================================================================

use yew::prelude::*;

use crate::models::{Session, User};
use crate::services::ApiClient;
use crate::stores::SessionStore;

#[derive(Clone)]
pub struct UseSessionHandle {
    pub session: Option<Session>,
    pub on_login: Callback<Session>,
    pub logout: Callback<()>,
    /// Relee el perfil guardado (p. ej. después de subir el avatar)
    pub refresh_user: Callback<()>,
}

impl UseSessionHandle {
    pub fn is_authenticated(&self) -> bool {
        self.session.as_ref().is_some_and(|s| !s.token.is_empty())
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().and_then(|s| s.user.as_ref())
    }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let state = use_state(|| {
        let session = SessionStore::browser().get_session();
        if session.is_some() {
            log::info!("✅ Sesión guardada encontrada");
        }
        session
    });

    let on_login = {
        let state = state.clone();
        Callback::from(move |session: Session| {
            state.set(Some(session));
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            ApiClient::new().logout();
            state.set(None);
        })
    };

    let refresh_user = {
        let state = state.clone();
        Callback::from(move |_| {
            state.set(SessionStore::browser().get_session());
        })
    };

    UseSessionHandle {
        session: (*state).clone(),
        on_login,
        logout,
        refresh_user,
    }
}
