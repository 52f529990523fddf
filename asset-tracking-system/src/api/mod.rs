pub mod auth;
pub mod department;
pub mod dtos;
pub mod repair;
pub mod software;
pub mod statistics;
pub mod ticket;
pub mod user;
pub mod workstation;

use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use domain_helpdesk::exception::{ExceptionKind, HelpdeskException};
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

/// A domain failure on its way to the client.
#[derive(Debug)]
pub struct ApiError(pub HelpdeskException);

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<HelpdeskException> for ApiError {
    fn from(e: HelpdeskException) -> Self {
        Self(e)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0.kind() {
            ExceptionKind::Validation | ExceptionKind::Conflict => StatusCode::BAD_REQUEST,
            ExceptionKind::Authentication => StatusCode::UNAUTHORIZED,
            ExceptionKind::NotFound => StatusCode::NOT_FOUND,
            ExceptionKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match &self.0 {
            HelpdeskException::InternalError { source } => {
                tracing::error!("Request failed: {source:?}");
                json!({ "error": "Internal server error" })
            }
            HelpdeskException::MissingFields { fields } => {
                json!({ "error": self.0.to_string(), "fields": fields })
            }
            HelpdeskException::ReferencedBy { references, .. } => {
                json!({ "error": self.0.to_string(), "references": references })
            }
            e => json!({ "error": e.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

fn bad_request(message: String) -> actix_web::Error {
    actix_web::error::InternalError::from_response(
        message.clone(),
        HttpResponse::BadRequest().json(json!({ "error": message })),
    )
    .into()
}

/// Malformed bodies and unknown fields are rejected with the usual error shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("Rejected request body: {err}");
    bad_request(format!("Invalid request body: {err}"))
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    bad_request(format!("Invalid query: {err}"))
}
