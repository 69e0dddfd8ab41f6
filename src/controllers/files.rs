//! File routes: listing page, multipart upload, raw download, delete.

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::StreamExt as _;

use super::{bad_request, see_other, storage_error, valid_entry_name};
use crate::repository::RepositoryError;
use crate::views;
use crate::AppState;

/// Infer a Content-Type for a download from the filename extension.
fn mime_for_name(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "txt" | "md" | "log" => "text/plain; charset=utf-8",
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "csv" => "text/csv",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        _ => "application/octet-stream",
    }
}

/// Browsers may send a full client-side path; keep only the final component.
fn bare_filename(supplied: &str) -> &str {
    supplied
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or("")
}

/// GET / — render the listing.
async fn index(data: web::Data<AppState>) -> impl Responder {
    match data.repository.list() {
        Ok(entries) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(views::index_page(&entries)),
        Err(e) => storage_error("Failed to list uploads", e),
    }
}

/// POST / — multipart upload, field `file`.
///
/// A submission with no filename is treated as "no file chosen": nothing is
/// stored and the client is redirected back to the listing.
async fn upload(data: web::Data<AppState>, mut payload: Multipart) -> impl Responder {
    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(f) => f,
            Err(e) => {
                log::warn!("Malformed multipart payload: {}", e);
                return bad_request("malformed upload");
            }
        };

        if field.name() != "file" {
            continue;
        }

        let filename = field
            .content_disposition()
            .get_filename()
            .map(bare_filename)
            .unwrap_or("")
            .to_string();

        let mut content = web::BytesMut::new();
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(bytes) => content.extend_from_slice(&bytes),
                Err(e) => {
                    log::warn!("Upload stream error for {:?}: {}", filename, e);
                    return bad_request("malformed upload");
                }
            }
        }

        // Empty filename: idempotent no-op, matching store() semantics.
        if let Err(e) = data.repository.store(&filename, &content) {
            return storage_error("Failed to store upload", e);
        }
    }

    see_other("/")
}

/// GET /files/{name} — raw bytes with inferred content type.
///
/// The whole entry is buffered in memory before the response is built, not
/// streamed. Entries here are LAN uploads, bounded by what the listing page
/// accepts in one multipart request.
async fn download(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    if !valid_entry_name(&name) {
        return bad_request("invalid filename");
    }

    match data.repository.read(&name) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type(mime_for_name(&name))
            .body(bytes),
        Err(RepositoryError::NotFound) => HttpResponse::NotFound().body("file not found"),
        Err(e) => storage_error("Failed to read file", e),
    }
}

/// POST /delete/{name} — always redirects to the listing; a name that is
/// already gone is not an error.
async fn delete(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    if !valid_entry_name(&name) {
        return bad_request("invalid filename");
    }

    match data.repository.delete(&name) {
        Ok(()) => see_other("/"),
        Err(e) => storage_error("Failed to delete file", e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/", web::post().to(upload))
        .route("/files/{name}", web::get().to(download))
        .route("/delete/{name}", web::post().to(delete));
}
