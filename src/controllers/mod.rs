//! HTTP controllers, one module per resource.

pub mod files;
pub mod notes;

use actix_web::http::header;
use actix_web::HttpResponse;

use crate::repository::RepositoryError;

/// Names are a flat namespace: reject path traversal before touching the
/// repository.
pub fn valid_entry_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.contains('\\')
        && name != "."
        && name != ".."
}

/// 303 redirect after a mutation (POST-redirect-GET).
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

pub fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().body(message.to_string())
}

/// Map a repository failure to a response. NotFound is handled per-route
/// (redirect vs 404), so it never reaches this path.
pub fn storage_error(context: &str, err: RepositoryError) -> HttpResponse {
    log::error!("{}: {}", context, err);
    HttpResponse::InternalServerError().body("storage error")
}
