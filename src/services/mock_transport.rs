// Transporte de prueba: respuestas en cola + registro de peticiones

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::error::RequestError;
use super::http::{HttpRequest, HttpResponse, HttpTransport};

#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, RequestError>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, status_text: &str, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }));
    }

    pub fn respond_json(&self, status: u16, body: &str) {
        self.respond(status, "", body);
    }

    pub fn fail(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(RequestError::Network(message.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(RequestError::Network("sin respuesta programada".to_string())))
    }
}
