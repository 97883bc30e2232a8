// ============================================================================
// ROUTER - Lectura/escritura del fragmento de la URL (#tickets, #report, ...)
// ============================================================================

use web_sys::{window, Location};

fn location() -> Option<Location> {
    window().map(|w| w.location())
}

/// Fragmento actual sin `#` ("" si no hay)
pub fn current_fragment() -> String {
    location()
        .and_then(|l| l.hash().ok())
        .map(|hash| hash.trim_start_matches('#').to_string())
        .unwrap_or_default()
}

/// Navega al fragmento creando entrada de historial (si cambia)
pub fn push_fragment(fragment: &str) {
    if current_fragment() == fragment {
        return;
    }
    if let Some(location) = location() {
        if location.set_hash(fragment).is_err() {
            log::warn!("⚠️ No se pudo actualizar el fragmento a #{}", fragment);
        }
    }
}

/// Reescribe el fragmento sin crear entrada de historial
pub fn replace_fragment(fragment: &str) {
    if current_fragment() == fragment {
        return;
    }
    if let Some(location) = location() {
        if location.replace(&format!("#{}", fragment)).is_err() {
            log::warn!("⚠️ No se pudo reemplazar el fragmento por #{}", fragment);
        }
    }
}
