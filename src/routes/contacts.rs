use actix_web::{HttpResponse, Responder, delete, get, patch, post, web};

use crate::dto::contacts::{ContactsPage, ListContactsParams};
use crate::forms::contact::{CreateContactForm, UpdateContactForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::contacts as contacts_service;

#[get("/contacts")]
pub async fn list_contacts(
    params: web::Query<ListContactsParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match contacts_service::list_contacts(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(ContactsPage::from(page)),
        Err(err) => error_response(err, "fetch contacts"),
    }
}

#[get("/contacts/{contact_id}")]
pub async fn get_contact(
    contact_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match contacts_service::get_contact(repo.get_ref(), &contact_id) {
        Ok(contact) => HttpResponse::Ok().json(contact),
        Err(err) => error_response(err, "fetch contact"),
    }
}

#[post("/contacts")]
pub async fn create_contact(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateContactForm>,
) -> impl Responder {
    match contacts_service::create_contact(repo.get_ref(), form) {
        Ok(contact) => HttpResponse::Created().json(contact),
        Err(err) => error_response(err, "create contact"),
    }
}

#[patch("/contacts/{contact_id}")]
pub async fn update_contact(
    contact_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateContactForm>,
) -> impl Responder {
    match contacts_service::update_contact(repo.get_ref(), &contact_id, form) {
        Ok(contact) => HttpResponse::Ok().json(contact),
        Err(err) => error_response(err, "update contact"),
    }
}

#[delete("/contacts/{contact_id}")]
pub async fn delete_contact(
    contact_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match contacts_service::delete_contact(repo.get_ref(), &contact_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete contact"),
    }
}
