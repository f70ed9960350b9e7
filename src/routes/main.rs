use actix_web::{HttpResponse, Responder, get};
use serde_json::json;

#[get("/")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Contacts API is running",
        "endpoints": {
            "health": "/",
            "contacts": "/api/v1/contacts",
        },
    }))
}
