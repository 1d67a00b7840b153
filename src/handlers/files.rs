//! File upload, listing, and download handlers

use actix_files::NamedFile;
use actix_multipart::Multipart;
use actix_web::http::header::{
    ContentDisposition, DispositionParam, DispositionType, LOCATION,
};
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use futures_util::TryStreamExt;
use log::{error, warn};
use serde::Deserialize;

use crate::error::handlers::{log_error, user_message};
use crate::error::StorageError;
use crate::handlers::{AppState, pages};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(index))
            .route(web::post().to(upload)),
    );
    cfg.service(web::resource("/files/{filename}").route(web::get().to(serve_file)));
}

/// Flash message carried across the post-upload redirect
#[derive(Debug, Deserialize)]
struct FlashQuery {
    message: Option<String>,
    error: Option<String>,
}

/// `GET /` - upload form plus one download link per stored file
async fn index(state: web::Data<AppState>, query: web::Query<FlashQuery>) -> impl Responder {
    let storage = state.storage.clone();

    let listing = match web::block(move || storage.load_all()).await {
        Ok(result) => result,
        Err(e) => {
            error!("Listing task failed: {}", e);
            return HttpResponse::InternalServerError().body("Could not list stored files");
        }
    };

    match listing {
        Ok(mut names) => {
            names.sort();
            HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(pages::index_page(
                    &names,
                    query.message.as_deref(),
                    query.error.as_deref(),
                ))
        }
        Err(e) => {
            log_error(&e);
            HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(pages::index_page(&[], None, Some("Could not list stored files")))
        }
    }
}

/// `POST /` - multipart upload of a single `file` field
///
/// Every outcome redirects back to `/`; success and failure only differ in
/// the flash message carried along.
async fn upload(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, actix_web::Error> {
    while let Some(mut field) = payload.try_next().await? {
        if field.name() != "file" {
            continue;
        }

        let filename = field
            .content_disposition()
            .get_filename()
            .map(|name| name.to_string())
            .unwrap_or_default();

        let mut data: Vec<u8> = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if data.len() + chunk.len() > state.max_upload_size {
                warn!("Upload of {:?} exceeds the size limit", filename);
                return Ok(redirect_with_error("File exceeds the upload size limit"));
            }
            data.extend_from_slice(&chunk);
        }

        let storage = state.storage.clone();
        let name = filename.clone();
        let saved = match web::block(move || storage.save(&name, &data)).await {
            Ok(result) => result,
            Err(e) => {
                error!("Upload task failed: {}", e);
                return Ok(redirect_with_error("Could not store file"));
            }
        };

        return Ok(match saved {
            Ok(()) => {
                redirect_with_message(&format!("File uploaded successfully: {}!", filename))
            }
            Err(e) => {
                log_error(&e);
                redirect_with_error(user_message(&e))
            }
        });
    }

    Ok(redirect_with_error("Please select a file"))
}

/// `GET /files/{filename}` - stream a stored file back as an attachment
async fn serve_file(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let filename = path.into_inner();

    let storage = state.storage.clone();
    let lookup = filename.clone();
    let resolved = web::block(move || storage.load_as_resource(&lookup))
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?;

    match resolved {
        Ok(file_path) => {
            let file = NamedFile::open(file_path)?.set_content_disposition(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(filename)],
            });
            Ok(file.into_response(&req))
        }
        Err(StorageError::FileNotFound(name)) => {
            warn!("Requested file not found: {}", name);
            Ok(HttpResponse::NotFound().body(format!("Could not read file: {}", name)))
        }
        Err(e) => {
            log_error(&e);
            Ok(HttpResponse::InternalServerError().body("Could not read file"))
        }
    }
}

fn redirect_with_message(message: &str) -> HttpResponse {
    see_other(&format!("/?message={}", urlencoding::encode(message)))
}

fn redirect_with_error(error: &str) -> HttpResponse {
    see_other(&format!("/?error={}", urlencoding::encode(error)))
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}
