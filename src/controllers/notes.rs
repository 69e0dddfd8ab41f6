//! Note routes: create, view, edit.
//!
//! A missing note never shows an error page: the user is silently sent back
//! to the listing, which is also where stale links end up after a delete.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use super::{bad_request, see_other, storage_error, valid_entry_name};
use crate::repository::RepositoryError;
use crate::views;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct CreateNoteForm {
    note_title: String,
    note_content: String,
}

#[derive(Debug, Deserialize)]
struct EditNoteForm {
    note_content: String,
}

/// POST /note — create (or overwrite) a note from the listing-page form.
async fn create_note(
    data: web::Data<AppState>,
    form: web::Form<CreateNoteForm>,
) -> impl Responder {
    if !valid_entry_name(&form.note_title) {
        return bad_request("invalid note title");
    }

    match data.repository.create_note(&form.note_title, &form.note_content) {
        Ok(name) => {
            log::info!("Created note {}", name);
            see_other("/")
        }
        Err(e) => storage_error("Failed to create note", e),
    }
}

/// GET /view-note/{name} — render the note with client-side markdown.
async fn view_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    if !valid_entry_name(&name) {
        return bad_request("invalid filename");
    }

    match data.repository.read_note(&name) {
        Ok(content) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(views::view_note_page(&name, &content)),
        Err(RepositoryError::NotFound) => see_other("/"),
        Err(e) => storage_error("Failed to read note", e),
    }
}

/// GET /edit-note/{name} — editor pre-filled with the current content.
async fn edit_note_form(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    if !valid_entry_name(&name) {
        return bad_request("invalid filename");
    }

    match data.repository.read_note(&name) {
        Ok(content) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(views::edit_note_page(&name, &content)),
        Err(RepositoryError::NotFound) => see_other("/"),
        Err(e) => storage_error("Failed to read note", e),
    }
}

/// POST /edit-note/{name} — full content replacement, then back to the
/// viewer. Upsert: saving an edit of a just-deleted note recreates it.
async fn edit_note_submit(
    data: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<EditNoteForm>,
) -> impl Responder {
    let name = path.into_inner();
    if !valid_entry_name(&name) {
        return bad_request("invalid filename");
    }

    match data.repository.update_note(&name, &form.note_content) {
        Ok(()) => see_other(&format!("/view-note/{}", views::urlencode(&name))),
        Err(e) => storage_error("Failed to update note", e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/note", web::post().to(create_note))
        .route("/view-note/{name}", web::get().to(view_note))
        .route("/edit-note/{name}", web::get().to(edit_note_form))
        .route("/edit-note/{name}", web::post().to(edit_note_submit));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::FileRepository;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use tempfile::tempdir;

    macro_rules! test_app {
        ($repo:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(crate::AppState {
                        repository: $repo.clone(),
                    }))
                    .configure(config),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_note_normalizes_title() {
        let dir = tempdir().unwrap();
        let repo = FileRepository::open(dir.path()).unwrap();

        let app = test_app!(repo.clone());
        let req = test::TestRequest::post()
            .uri("/note")
            .set_form([("note_title", "report"), ("note_content", "# heading")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
        assert_eq!(repo.read_note("report.md").unwrap(), "# heading");
    }

    #[actix_web::test]
    async fn test_create_note_rejects_traversal_title() {
        let dir = tempdir().unwrap();
        let repo = FileRepository::open(dir.path()).unwrap();

        let app = test_app!(repo.clone());
        let req = test::TestRequest::post()
            .uri("/note")
            .set_form([("note_title", "../escape"), ("note_content", "x")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(repo.list().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_view_note_renders_content_payload() {
        let dir = tempdir().unwrap();
        let repo = FileRepository::open(dir.path()).unwrap();
        repo.create_note("todo", "# Things\n- one").unwrap();

        let app = test_app!(repo);
        let req = test::TestRequest::get().uri("/view-note/todo.md").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("marked.parse"));
        assert!(html.contains("# Things"));
    }

    #[actix_web::test]
    async fn test_view_missing_note_redirects_to_listing() {
        let dir = tempdir().unwrap();
        let repo = FileRepository::open(dir.path()).unwrap();

        let app = test_app!(repo);
        let req = test::TestRequest::get()
            .uri("/view-note/missing.md")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    }

    #[actix_web::test]
    async fn test_edit_form_prefills_and_missing_redirects() {
        let dir = tempdir().unwrap();
        let repo = FileRepository::open(dir.path()).unwrap();
        repo.create_note("draft", "original text").unwrap();

        let app = test_app!(repo);
        let req = test::TestRequest::get().uri("/edit-note/draft.md").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("original text"));

        let req = test::TestRequest::get()
            .uri("/edit-note/missing.md")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    #[actix_web::test]
    async fn test_edit_submit_replaces_content_and_redirects_to_viewer() {
        let dir = tempdir().unwrap();
        let repo = FileRepository::open(dir.path()).unwrap();
        repo.create_note("draft", "old").unwrap();

        let app = test_app!(repo.clone());
        let req = test::TestRequest::post()
            .uri("/edit-note/draft.md")
            .set_form([("note_content", "new body")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/view-note/draft.md"
        );
        assert_eq!(repo.read_note("draft.md").unwrap(), "new body");
    }

    #[actix_web::test]
    async fn test_edit_submit_upserts_missing_note() {
        let dir = tempdir().unwrap();
        let repo = FileRepository::open(dir.path()).unwrap();

        let app = test_app!(repo.clone());
        let req = test::TestRequest::post()
            .uri("/edit-note/brand-new.md")
            .set_form([("note_content", "created on save")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(repo.read_note("brand-new.md").unwrap(), "created on save");
    }
}
