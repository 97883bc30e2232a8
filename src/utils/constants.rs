// Claves de localStorage (compartidas con versiones anteriores del front)
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_USER: &str = "user";
/// Clave antigua del perfil; solo se lee como respaldo
pub const STORAGE_KEY_PROFILE_FALLBACK: &str = "profile";

/// URL del backend cuando no se configura `API_URL` ni `window.__API_BASE__`
pub const DEFAULT_API_URL: &str = "http://localhost:5001";

/// Propiedad global que `index.html` puede inyectar con la URL del backend
pub const INJECTED_API_BASE_PROPERTY: &str = "__API_BASE__";

/// Mensaje cuando ni el cuerpo ni el status text explican el error
pub const GENERIC_REQUEST_ERROR: &str = "Error en la petición";

/// Refresco del reloj de la pantalla de reporte
pub const REPORT_CLOCK_INTERVAL_MS: u32 = 30_000;

pub const DEFAULT_AVATAR_URL: &str = "/default-avatar.png";
