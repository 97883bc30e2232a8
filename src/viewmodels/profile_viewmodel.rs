use crate::models::{Attachment, User};
use crate::services::{ApiClient, GlooTransport, HttpTransport};
use crate::utils::{BrowserStorage, KeyValueStore};

use super::error_text;

const AVATAR_UPDATED: &str = "Foto actualizada. Se usará en los reportes.";

/// Formulario de foto de perfil (popover del header y pantalla "Mi Perfil")
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AvatarFormState {
    pub file: Option<Attachment>,
    pub uploading: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl AvatarFormState {
    pub fn with_file(file: Option<Attachment>) -> Self {
        Self {
            file,
            ..Self::default()
        }
    }

    pub fn uploading(&self) -> Self {
        Self {
            uploading: true,
            message: None,
            error: None,
            ..self.clone()
        }
    }
}

pub struct ProfileViewModel<T = GlooTransport, S = BrowserStorage> {
    api: ApiClient<T, S>,
}

impl ProfileViewModel {
    pub fn new() -> Self {
        Self::with_api(ApiClient::new())
    }
}

impl<T: HttpTransport, S: KeyValueStore> ProfileViewModel<T, S> {
    pub fn with_api(api: ApiClient<T, S>) -> Self {
        Self { api }
    }

    /// Sube la foto elegida; `on_success` recibe el perfil ya guardado
    pub async fn upload<F>(&self, form: AvatarFormState, on_success: F) -> AvatarFormState
    where
        F: FnOnce(User),
    {
        let Some(file) = form.file.clone() else {
            return AvatarFormState {
                uploading: false,
                message: None,
                error: Some("Selecciona una imagen".to_string()),
                ..form
            };
        };

        match self.api.upload_avatar(file).await {
            Ok(user) => {
                on_success(user);
                AvatarFormState {
                    file: None,
                    uploading: false,
                    message: Some(AVATAR_UPDATED.to_string()),
                    error: None,
                }
            }
            Err(e) => AvatarFormState {
                uploading: false,
                message: None,
                error: Some(error_text(&e, "No se pudo subir el avatar")),
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

    fn view_model(transport: MockTransport) -> ProfileViewModel<MockTransport, MemoryStorage> {
        let session = SessionStore::new(MemoryStorage::new());
        session.set_session(
            "tok",
            Some(&User {
                id: "1".into(),
                name: "Ana".into(),
                email: "a@x.com".into(),
                avatar_url: None,
            }),
        );
        ProfileViewModel::with_api(ApiClient::with_parts("http://api.test", transport, session))
    }

    fn photo() -> Attachment {
        Attachment::new("yo.png", "image/png", vec![1, 2, 3])
    }

    #[test]
    fn missing_file_is_rejected_locally() {
        let transport = MockTransport::new();
        let vm = view_model(transport.clone());

        let state = block_on(vm.upload(AvatarFormState::default().uploading(), |_| {
            panic!("sin archivo no hay subida")
        }));
        assert_eq!(state.error.as_deref(), Some("Selecciona una imagen"));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn upload_updates_profile() {
        let transport = MockTransport::new();
        transport.respond_json(200, r#"{"user":{"avatarUrl":"/uploads/avatars/yo.png"}}"#);
        let vm = view_model(transport);

        let mut updated = None;
        let form = AvatarFormState::with_file(Some(photo())).uploading();
        let state = block_on(vm.upload(form, |user| updated = Some(user)));

        let user = updated.unwrap();
        assert_eq!(user.name, "Ana");
        assert_eq!(user.avatar_url.as_deref(), Some("/uploads/avatars/yo.png"));
        assert_eq!(state.message.as_deref(), Some(AVATAR_UPDATED));
        assert_eq!(state.file, None);
    }

    #[test]
    fn failed_upload_keeps_file() {
        let transport = MockTransport::new();
        transport.respond(400, "Bad Request", r#"{"message":"Formato no soportado"}"#);
        let vm = view_model(transport);

        let form = AvatarFormState::with_file(Some(photo())).uploading();
        let state = block_on(vm.upload(form, |_| {}));
        assert_eq!(state.error.as_deref(), Some("Formato no soportado"));
        assert_eq!(state.file, Some(photo()));
        assert!(!state.uploading);
    }
}
