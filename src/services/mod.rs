pub mod api_client;
pub mod error;
pub mod http;
pub mod router;

#[cfg(test)]
pub mod mock_transport;

pub use api_client::ApiClient;
pub use error::RequestError;
pub use http::{GlooTransport, HttpTransport};
