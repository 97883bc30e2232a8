use thiserror::Error;

/// Error único de las llamadas al backend.
///
/// `Display` es exactamente el mensaje legible que muestran las vistas.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Fallo de transporte (sin respuesta) o al construir la petición
    #[error("{0}")]
    Network(String),

    /// Respuesta no-2xx; `message` sale del cuerpo o del status text
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Respuesta 2xx con un cuerpo que no cumple el esquema esperado
    #[error("{0}")]
    Decode(String),
}

impl RequestError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
