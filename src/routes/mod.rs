//! Actix-web handlers for the JSON API.

use std::fmt::{Debug, Display};

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;

use crate::services::ServiceError;

pub mod contacts;
pub mod main;

/// Registers every route on the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(malformed_request::<QueryPayloadError>))
        .app_data(web::JsonConfig::default().error_handler(malformed_request::<JsonPayloadError>))
        .service(main::health)
        .service(
            web::scope("/api/v1")
                .service(contacts::list_contacts)
                .service(contacts::get_contact)
                .service(contacts::create_contact)
                .service(contacts::update_contact)
                .service(contacts::delete_contact),
        );
}

/// Turns an extractor failure into the same `400 {error}` body the handlers
/// return for invalid input.
fn malformed_request<E>(err: E, _req: &HttpRequest) -> actix_web::Error
where
    E: Debug + Display + 'static,
{
    log::warn!("Rejected malformed request: {err}");
    let response = error_response(ServiceError::Validation(err.to_string()), "parse request");
    InternalError::from_response(err, response).into()
}

/// Maps a service failure onto an HTTP response with a JSON `error` body.
///
/// Store errors are logged and returned without their details.
pub fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::Validation(message) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(json!({ "error": "Contact not found" }))
        }
        ServiceError::Conflict(message) => {
            HttpResponse::Conflict().json(json!({ "error": message }))
        }
        ServiceError::Store(message) => {
            log::error!("Failed to {action}: {message}");
            HttpResponse::InternalServerError().json(json!({ "error": format!("Failed to {action}") }))
        }
    }
}
