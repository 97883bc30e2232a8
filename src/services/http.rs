// ============================================================================
// HTTP - Petición/respuesta planas + transporte gloo-net
// ============================================================================
// El ApiClient construye `HttpRequest` y solo habla con `HttpTransport`,
// así puede probarse sin navegador.
// ============================================================================

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use super::error::RequestError;
use crate::models::Attachment;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, attachment: Attachment },
}

impl FormPart {
    pub fn text(name: &str, value: &str) -> Self {
        FormPart::Text {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn file(name: &str, attachment: Attachment) -> Self {
        FormPart::File {
            name: name.to_string(),
            attachment,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub bearer_token: Option<String>,
    pub body: RequestBody,
}

impl HttpRequest {
    fn new(method: HttpMethod, url: String) -> Self {
        Self {
            method,
            url,
            bearer_token: None,
            body: RequestBody::Empty,
        }
    }

    pub fn get(url: String) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    pub fn post(url: String) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Adjunta `Authorization: Bearer` solo si hay token
    pub fn bearer(mut self, token: String) -> Self {
        self.bearer_token = Some(token).filter(|t| !t.is_empty());
        self
    }

    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = RequestBody::Json(value);
        self
    }

    pub fn multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Una petición, una respuesta. Sin reintentos ni timeout propio.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError>;
}

/// Transporte del navegador (fetch vía gloo-net)
#[derive(Clone, Copy, Default)]
pub struct GlooTransport;

impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        let HttpRequest {
            method,
            url,
            bearer_token,
            body,
        } = request;

        let mut builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
        };
        if let Some(token) = bearer_token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        // Con FormData no se pone Content-Type: el navegador añade el boundary
        let request = match body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(parts) => builder.body(build_form_data(&parts)?),
        }
        .map_err(|e| RequestError::Network(format!("Error construyendo la petición: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| RequestError::Network(format!("Error de red: {}", e)))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

fn build_form_data(parts: &[FormPart]) -> Result<FormData, RequestError> {
    let form = FormData::new().map_err(form_error)?;
    for part in parts {
        match part {
            FormPart::Text { name, value } => form.append_with_str(name, value).map_err(form_error)?,
            FormPart::File { name, attachment } => {
                let blob = attachment_blob(attachment)?;
                form.append_with_blob_and_filename(name, &blob, &attachment.file_name)
                    .map_err(form_error)?;
            }
        }
    }
    Ok(form)
}

fn attachment_blob(attachment: &Attachment) -> Result<Blob, RequestError> {
    let bytes = js_sys::Uint8Array::from(attachment.bytes.as_slice());
    let sequence = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&attachment.content_type);
    Blob::new_with_u8_array_sequence_and_options(&sequence, &options).map_err(form_error)
}

fn form_error(e: JsValue) -> RequestError {
    RequestError::Network(format!("Error preparando el formulario: {:?}", e))
}
