// ============================================================================
// API CLIENT - Comunicación con el backend del helpdesk
// ============================================================================
// Cada operación: una petición, un resultado tipado o un `RequestError`.
// Lee el token del SessionStore; login/logout/avatar lo escriben.
// ============================================================================

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::RequestError;
use super::http::{FormPart, GlooTransport, HttpRequest, HttpResponse, HttpTransport};
use crate::config::CONFIG;
use crate::models::{
    Attachment, AvatarResponse, LoginRequest, LoginResponse, NewTicket, Report, ReportDto,
    Session, Ticket, TicketDto, User,
};
use crate::stores::SessionStore;
use crate::utils::{BrowserStorage, KeyValueStore, GENERIC_REQUEST_ERROR};

pub struct ApiClient<T = GlooTransport, S = BrowserStorage> {
    base_url: String,
    transport: T,
    session: SessionStore<S>,
}

impl ApiClient {
    /// Cliente del navegador: fetch + localStorage
    pub fn new() -> Self {
        Self::with_parts(CONFIG.api_base_url(), GlooTransport, SessionStore::browser())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport, S: KeyValueStore> ApiClient<T, S> {
    pub fn with_parts(base_url: impl Into<String>, transport: T, session: SessionStore<S>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            session,
        }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: HttpRequest) -> HttpRequest {
        request.bearer(self.session.get_token())
    }

    async fn execute(&self, request: HttpRequest) -> Result<Value, RequestError> {
        let response = self.transport.send(request).await?;
        handle_response(response)
    }

    /// `POST /api/auth/login` - guarda token y perfil si tiene éxito
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, RequestError> {
        log::info!("🔐 Iniciando sesión: {}", email);

        let body = serde_json::to_value(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| RequestError::Network(format!("Error serializando login: {}", e)))?;

        let data = self
            .execute(HttpRequest::post(self.url("/api/auth/login")).json(body))
            .await?;
        let response: LoginResponse = decode(data)?;

        let token = response
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| RequestError::Decode("La respuesta de login no incluye token".to_string()))?;
        let user = response.user.map(User::from);

        self.session.set_session(&token, user.as_ref());
        log::info!("✅ Sesión iniciada");

        Ok(Session { token, user })
    }

    /// Solo limpia la sesión local (sin llamada al servidor)
    pub fn logout(&self) {
        log::info!("👋 Logout");
        self.session.clear_session();
    }

    /// `POST /api/user/avatar` - actualiza el perfil guardado con el nuevo avatar
    pub async fn upload_avatar(&self, file: Attachment) -> Result<User, RequestError> {
        log::info!("🖼️ Subiendo avatar: {} ({} bytes)", file.file_name, file.size());

        let request = self.authorized(
            HttpRequest::post(self.url("/api/user/avatar")).multipart(vec![FormPart::file("avatar", file)]),
        );
        let response: AvatarResponse = decode(self.execute(request).await?)?;
        let dto = response
            .user
            .ok_or_else(|| RequestError::Decode("La respuesta no incluye el usuario".to_string()))?;

        let previous = self.session.get_user();
        let user = dto.merge_over(previous.as_ref());
        self.session.set_user(&user);
        log::info!("✅ Avatar actualizado");

        Ok(user)
    }

    /// `POST /api/tickets`
    pub async fn create_ticket(&self, input: &NewTicket) -> Result<Ticket, RequestError> {
        let body = serde_json::to_value(input)
            .map_err(|e| RequestError::Network(format!("Error serializando ticket: {}", e)))?;
        let request = self.authorized(HttpRequest::post(self.url("/api/tickets")).json(body));

        let ticket: TicketDto = decode(self.execute(request).await?)?;
        log::info!("✅ Ticket creado: {}", input.title);
        Ok(ticket.into())
    }

    /// `GET /api/tickets?status=open` - el filtro por prioridad lo hace quien llama
    pub async fn list_open_tickets(&self) -> Result<Vec<Ticket>, RequestError> {
        let request = self.authorized(HttpRequest::get(self.url("/api/tickets?status=open")));
        let data = self.execute(request).await?;

        let items = match data {
            Value::Object(mut envelope) => envelope.remove("items").unwrap_or(Value::Null),
            _ => Value::Null,
        };
        let tickets: Vec<TicketDto> = decode_list(items)?;
        log::info!("📋 Tickets abiertos: {}", tickets.len());

        Ok(tickets.into_iter().map(Ticket::from).collect())
    }

    /// `POST /api/tickets/:id/report` (multipart: content + attachments)
    pub async fn send_report(
        &self,
        ticket_id: &str,
        content: &str,
        attachments: Vec<Attachment>,
    ) -> Result<Report, RequestError> {
        log::info!("📝 Enviando reporte del ticket {} ({} adjuntos)", ticket_id, attachments.len());

        let mut parts = vec![FormPart::text("content", content)];
        parts.extend(
            attachments
                .into_iter()
                .map(|attachment| FormPart::file("attachments", attachment)),
        );

        let path = format!("/api/tickets/{}/report", ticket_id);
        let request = self.authorized(HttpRequest::post(self.url(&path)).multipart(parts));
        let report: ReportDto = decode(self.execute(request).await?)?;

        log::info!("✅ Reporte enviado");
        Ok(report.into())
    }

    /// `GET /api/reports?mine=true`
    pub async fn list_my_reports(&self) -> Result<Vec<Report>, RequestError> {
        let request = self.authorized(HttpRequest::get(self.url("/api/reports?mine=true")));
        let reports: Vec<ReportDto> = decode_list(self.execute(request).await?)?;
        log::info!("📋 Reportes propios: {}", reports.len());

        Ok(reports.into_iter().map(Report::from).collect())
    }
}

/// Normaliza cualquier respuesta: JSON (o null) si es 2xx, `RequestError` si no
fn handle_response(response: HttpResponse) -> Result<Value, RequestError> {
    let data: Option<Value> = serde_json::from_str(&response.body).ok();

    if response.ok() {
        return Ok(data.unwrap_or(Value::Null));
    }

    let message = data
        .as_ref()
        .and_then(body_message)
        .or_else(|| Some(response.status_text.trim().to_string()).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| GENERIC_REQUEST_ERROR.to_string());

    log::error!("❌ HTTP {}: {}", response.status, message);
    Err(RequestError::Server {
        status: response.status,
        message,
    })
}

/// `{message}` o `{error}` del cuerpo de error
fn body_message(data: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|key| data.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(str::to_string)
}

fn decode<D: DeserializeOwned>(data: Value) -> Result<D, RequestError> {
    serde_json::from_value(data)
        .map_err(|e| RequestError::Decode(format!("Respuesta inesperada del servidor: {}", e)))
}

/// Lista JSON; cualquier otra cosa cuenta como lista vacía
fn decode_list<D: DeserializeOwned>(data: Value) -> Result<Vec<D>, RequestError> {
    match data {
        Value::Array(_) => decode(data),
        _ => Ok(Vec::new()),
    }
}
