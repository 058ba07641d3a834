//! The three backend calls made by the composer.
//!
//! Each call resolves to a `ComposerResult`; transport failures, non-2xx
//! statuses and undecodable bodies map to distinct `ComposerError` variants
//! but callers treat them the same way.

use common::error::{ComposerError, ComposerResult};
use common::model::email_config::EmailConfig;
use common::requests::{
    absolute_image_url, check_status, endpoint, is_success, UploadImageResponse, GET_EMAIL_LAYOUT,
    IMAGE_FIELD, UPLOAD_EMAIL_CONFIG, UPLOAD_IMAGE,
};
use gloo_net::http::{Request, Response};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

/// `GET /getEmailLayout`, returning the layout HTML.
pub async fn fetch_layout(origin: &str) -> ComposerResult<String> {
    let response = Request::get(&endpoint(origin, GET_EMAIL_LAYOUT))
        .send()
        .await
        .map_err(transport)?;
    let response = ensure_success(response).await?;
    response
        .text()
        .await
        .map_err(|e| ComposerError::MalformedResponse(e.to_string()))
}

/// `POST /uploadImage` with `file` in the `image` multipart field.
///
/// Returns the absolute URL of the stored image.
pub async fn upload_image(origin: &str, file: File) -> ComposerResult<String> {
    let form = FormData::new().map_err(js_transport)?;
    form.append_with_blob_and_filename(IMAGE_FIELD, &file, &file.name())
        .map_err(js_transport)?;

    let response = Request::post(&endpoint(origin, UPLOAD_IMAGE))
        .body(form)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    let response = ensure_success(response).await?;

    let body: UploadImageResponse = response
        .json()
        .await
        .map_err(|e| ComposerError::MalformedResponse(e.to_string()))?;
    if body.image_url.is_empty() {
        return Err(ComposerError::MalformedResponse("empty imageUrl".to_string()));
    }
    Ok(absolute_image_url(origin, &body.image_url))
}

/// `POST /uploadEmailConfig` with the config as JSON. The body of a
/// successful response is not read.
pub async fn save_config(origin: &str, config: &EmailConfig) -> ComposerResult<()> {
    let response = Request::post(&endpoint(origin, UPLOAD_EMAIL_CONFIG))
        .json(config)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    ensure_success(response).await.map(|_| ())
}

async fn ensure_success(response: Response) -> ComposerResult<Response> {
    let status = response.status();
    if is_success(status) {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    check_status(status, body).map(|()| response)
}

fn transport(err: gloo_net::Error) -> ComposerError {
    ComposerError::Transport(err.to_string())
}

fn js_transport(err: JsValue) -> ComposerError {
    ComposerError::Transport(format!("{:?}", err))
}
