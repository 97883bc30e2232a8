use web_sys::{window, Storage};

/// Almacenamiento clave/valor síncrono (localStorage en el navegador)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `KeyValueStore` sobre `window.localStorage`.
///
/// Si localStorage no está disponible (modo privado, sin `window`) las lecturas
/// devuelven `None` y las escrituras se descartan con un warning.
#[derive(Clone, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) {
        match get_local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("⚠️ No se pudo guardar '{}' en localStorage", key);
                }
            }
            None => log::warn!("⚠️ localStorage no disponible, '{}' no se guardó", key),
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            if storage.remove_item(key).is_err() {
                log::warn!("⚠️ No se pudo eliminar '{}' de localStorage", key);
            }
        }
    }
}
