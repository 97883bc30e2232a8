// ============================================================================
// SESSION STORE - Token + perfil persistidos en localStorage
// ============================================================================
// Único punto de acceso a la sesión: ningún componente lee localStorage directo
// ============================================================================

use crate::models::{Session, User};
use crate::utils::{
    BrowserStorage, KeyValueStore, STORAGE_KEY_PROFILE_FALLBACK, STORAGE_KEY_TOKEN,
    STORAGE_KEY_USER,
};

#[derive(Clone, Default)]
pub struct SessionStore<S = BrowserStorage> {
    storage: S,
}

impl SessionStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage::new())
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Token actual ("" si no hay sesión)
    pub fn get_token(&self) -> String {
        self.storage.get_item(STORAGE_KEY_TOKEN).unwrap_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.get_token().is_empty()
    }

    /// Perfil cacheado; JSON corrupto cuenta como "sin usuario"
    pub fn get_user(&self) -> Option<User> {
        let raw = self
            .storage
            .get_item(STORAGE_KEY_USER)
            .filter(|raw| !raw.is_empty())
            .or_else(|| self.storage.get_item(STORAGE_KEY_PROFILE_FALLBACK))
            .filter(|raw| !raw.is_empty())?;

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("⚠️ Perfil guardado ilegible, se ignora: {}", e);
                None
            }
        }
    }

    pub fn get_session(&self) -> Option<Session> {
        let token = self.get_token();
        if token.is_empty() {
            return None;
        }
        Some(Session {
            token,
            user: self.get_user(),
        })
    }

    /// Guarda token y perfil juntos
    pub fn set_session(&self, token: &str, user: Option<&User>) {
        self.storage.set_item(STORAGE_KEY_TOKEN, token);
        match user {
            Some(user) => self.set_user(user),
            None => self.storage.remove_item(STORAGE_KEY_USER),
        }
    }

    /// Reemplaza el perfil (y la clave antigua `profile` si todavía existe)
    pub fn set_user(&self, user: &User) {
        let json = match serde_json::to_string(user) {
            Ok(json) => json,
            Err(e) => {
                log::error!("❌ Error serializando perfil: {}", e);
                return;
            }
        };
        self.storage.set_item(STORAGE_KEY_USER, &json);
        if self.storage.get_item(STORAGE_KEY_PROFILE_FALLBACK).is_some() {
            self.storage.set_item(STORAGE_KEY_PROFILE_FALLBACK, &json);
        }
    }

    pub fn clear_session(&self) {
        self.storage.remove_item(STORAGE_KEY_TOKEN);
        self.storage.remove_item(STORAGE_KEY_USER);
        self.storage.remove_item(STORAGE_KEY_PROFILE_FALLBACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::memory::MemoryStorage;

    fn user(name: &str) -> User {
        User {
            id: "1".into(),
            name: name.into(),
            email: "a@x.com".into(),
            avatar_url: None,
        }
    }

    #[test]
    fn empty_store_has_no_session() {
        let store = SessionStore::new(MemoryStorage::new());
        assert_eq!(store.get_token(), "");
        assert_eq!(store.get_user(), None);
        assert!(!store.is_authenticated());
        assert_eq!(store.get_session(), None);
    }

    #[test]
    fn set_and_clear_session() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());

        store.set_session("abc", Some(&user("A")));
        assert_eq!(store.get_token(), "abc");
        assert_eq!(store.get_user().map(|u| u.name), Some("A".to_string()));

        store.clear_session();
        assert_eq!(store.get_token(), "");
        assert_eq!(store.get_user(), None);
        assert!(!storage.contains(STORAGE_KEY_USER));
    }

    #[test]
    fn corrupted_profile_degrades_to_none() {
        let storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY_TOKEN, "abc");
        storage.set_item(STORAGE_KEY_USER, "{not json");

        let store = SessionStore::new(storage);
        assert_eq!(store.get_user(), None);
        assert_eq!(store.get_session().map(|s| s.token), Some("abc".to_string()));
    }

    #[test]
    fn legacy_profile_key_is_read_and_kept_in_sync() {
        let storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY_PROFILE_FALLBACK, r#"{"_id":"7","name":"Viejo","email":"v@x.com"}"#);

        let store = SessionStore::new(storage.clone());
        assert_eq!(store.get_user().map(|u| u.id), Some("7".to_string()));

        store.set_user(&user("Nuevo"));
        let legacy = storage.get_item(STORAGE_KEY_PROFILE_FALLBACK).unwrap();
        assert!(legacy.contains("Nuevo"));

        store.clear_session();
        assert_eq!(store.get_user(), None);
    }
}
