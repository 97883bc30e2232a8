use crate::models::Session;
use crate::services::{ApiClient, GlooTransport, HttpTransport};
use crate::utils::{BrowserStorage, KeyValueStore};

use super::error_text;

#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl LoginFormState {
    pub fn submitting(&self) -> Self {
        Self {
            loading: true,
            error: None,
            ..self.clone()
        }
    }
}

pub struct LoginViewModel<T = GlooTransport, S = BrowserStorage> {
    api: ApiClient<T, S>,
}

impl LoginViewModel {
    pub fn new() -> Self {
        Self::with_api(ApiClient::new())
    }
}

impl<T: HttpTransport, S: KeyValueStore> LoginViewModel<T, S> {
    pub fn with_api(api: ApiClient<T, S>) -> Self {
        Self { api }
    }

    pub async fn submit<F>(&self, form: LoginFormState, on_success: F) -> LoginFormState
    where
        F: FnOnce(Session),
    {
        match self.api.login(form.email.trim(), &form.password).await {
            Ok(session) => {
                on_success(session);
                LoginFormState {
                    loading: false,
                    error: None,
                    password: String::new(),
                    ..form
                }
            }
            Err(e) => LoginFormState {
                loading: false,
                error: Some(error_text(&e, "Login inválido")),
                ..form
            },
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

    fn form() -> LoginFormState {
        LoginFormState {
            email: " a@x.com ".into(),
            password: "secreto".into(),
            ..LoginFormState::default()
        }
    }

    #[test]
    fn successful_login_reports_session() {
        let transport = MockTransport::new();
        transport.respond_json(200, r#"{"token":"abc","user":{"id":"1","name":"A","email":"a@x.com"}}"#);
        let storage = MemoryStorage::new();
        let vm = LoginViewModel::with_api(ApiClient::with_parts(
            "http://api.test",
            transport.clone(),
            SessionStore::new(storage.clone()),
        ));

        let mut logged = None;
        let state = block_on(vm.submit(form().submitting(), |session| logged = Some(session)));

        assert_eq!(logged.map(|s| s.token), Some("abc".to_string()));
        assert_eq!(state.password, "");
        assert_eq!(SessionStore::new(storage).get_token(), "abc");
        assert_eq!(
            transport.last_request().unwrap().body,
            crate::services::http::RequestBody::Json(
                serde_json::json!({"email": "a@x.com", "password": "secreto"})
            )
        );
    }

    #[test]
    fn rejected_login_shows_server_message() {
        let transport = MockTransport::new();
        transport.respond(401, "Unauthorized", r#"{"message":"Credenciales inválidas"}"#);
        let vm = LoginViewModel::with_api(ApiClient::with_parts(
            "http://api.test",
            transport,
            SessionStore::new(MemoryStorage::new()),
        ));

        let state = block_on(vm.submit(form().submitting(), |_| panic!("no debe iniciar sesión")));
        assert_eq!(state.error.as_deref(), Some("Credenciales inválidas"));
        assert!(!state.loading);
        assert_eq!(state.password, "secreto");
    }
}
