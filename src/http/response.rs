/// HTTP status codes the server produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// A response ready for serialization: status, content type and body. The
/// writer derives Content-Length (and Content-Encoding, when compression
/// applies) at serialization time so the header always matches the bytes
/// actually written.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: StatusCode, content_type: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            body,
        }
    }

    /// 200 with an explicit content type, used for resolved static files.
    pub fn ok(content_type: impl Into<String>, body: Vec<u8>) -> Self {
        Self::new(StatusCode::Ok, content_type, body)
    }

    /// Fixed 404 page served when a file does not resolve.
    pub fn not_found() -> Self {
        Self::new(
            StatusCode::NotFound,
            "text/html",
            "<html><body><h1>404 - Página No Encontrada</h1></body></html>".into(),
        )
    }

    pub fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::MethodNotAllowed,
            "text/plain",
            "Método no permitido".into(),
        )
    }

    pub fn internal_error() -> Self {
        Self::new(
            StatusCode::InternalServerError,
            "text/plain",
            "Error interno del servidor".into(),
        )
    }

    /// Plain-text acknowledgment for accepted POST bodies.
    pub fn post_received() -> Self {
        Self::new(
            StatusCode::Ok,
            "text/plain",
            "POST recibido correctamente".into(),
        )
    }
}
