use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::requests::{UploadImageResponse, IMAGE_FIELD, UPLOADS_PATH};
use futures_util::StreamExt;
use log::{info, warn};
use std::error::Error;

/// Uploads larger than this are rejected.
const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024; // 10 MB

/// HTTP handler wrapper that converts the internal result to an `HttpResponse`.
///
/// - On success: `200 OK` with an `UploadImageResponse` JSON body.
/// - On failure: `400 Bad Request` with the error message.
pub async fn process(state: web::Data<AppState>, payload: Multipart) -> impl Responder {
    match upload_image(&state, payload).await {
        Ok(image_url) => HttpResponse::Ok().json(UploadImageResponse { image_url }),
        Err(e) => {
            warn!("Rejected image upload: {}", e);
            HttpResponse::BadRequest().body(format!("Error: {}", e))
        }
    }
}

/// Reads the `image` field, validates it and writes it to the uploads
/// directory. Returns the URL path of the stored file.
///
/// Files are named after the MD5 of their content, so uploading the same
/// image twice yields the same URL. Only the first `image` field is used.
pub async fn upload_image(state: &AppState, mut payload: Multipart) -> Result<String, Box<dyn Error>> {
    let mut image: Option<Vec<u8>> = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        if name.as_deref() != Some(IMAGE_FIELD) || image.is_some() {
            // drain parts we do not use
            while let Some(chunk) = field.next().await {
                chunk?;
            }
            continue;
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if bytes.len() + chunk.len() > MAX_IMAGE_BYTES {
                return Err(format!("image exceeds {} bytes", MAX_IMAGE_BYTES).into());
            }
            bytes.extend_from_slice(&chunk);
        }
        image = Some(bytes);
    }

    let bytes = image.ok_or("missing `image` field")?;
    if bytes.is_empty() {
        return Err("empty image".into());
    }

    let format = image::guess_format(&bytes).map_err(|_| "uploaded file is not a supported image")?;
    let extension = format.extensions_str().first().copied().unwrap_or("img");
    let file_name = format!("{:x}.{}", md5::compute(&bytes), extension);

    tokio::fs::write(state.uploads_dir.join(&file_name), &bytes).await?;
    info!("Stored image {} ({} bytes)", file_name, bytes.len());

    Ok(format!("{}/{}", UPLOADS_PATH, file_name))
}
