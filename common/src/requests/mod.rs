//! Backend routes and request/response payloads shared by client and server.

use crate::error::{ComposerError, ComposerResult};
use serde::{Deserialize, Serialize};

/// `GET`: returns the HTML layout.
pub const GET_EMAIL_LAYOUT: &str = "/getEmailLayout";
/// `POST` multipart: stores an image, answers with [`UploadImageResponse`].
pub const UPLOAD_IMAGE: &str = "/uploadImage";
/// `POST` JSON [`crate::model::email_config::EmailConfig`].
pub const UPLOAD_EMAIL_CONFIG: &str = "/uploadEmailConfig";
/// Prefix under which uploaded images are served.
pub const UPLOADS_PATH: &str = "/uploads";

/// Name of the multipart field carrying the image bytes.
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageResponse {
    /// Path relative to the backend origin, e.g. `/uploads/<md5>.png`.
    pub image_url: String,
}

/// Joins a backend origin and a route, tolerating a trailing slash on the origin.
pub fn endpoint(origin: &str, path: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), path)
}

/// Absolute URL for an image path returned by the upload endpoint.
pub fn absolute_image_url(origin: &str, relative: &str) -> String {
    if relative.starts_with('/') {
        endpoint(origin, relative)
    } else {
        format!("{}/{}", origin.trim_end_matches('/'), relative)
    }
}

/// 2xx.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Maps a non-2xx status and its body to [`ComposerError::Status`].
pub fn check_status(status: u16, body: String) -> ComposerResult<()> {
    if is_success(status) {
        Ok(())
    } else {
        Err(ComposerError::Status { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        assert_eq!(endpoint("http://localhost:8080/", GET_EMAIL_LAYOUT), "http://localhost:8080/getEmailLayout");
        assert_eq!(endpoint("http://localhost:8080", UPLOAD_IMAGE), "http://localhost:8080/uploadImage");
    }

    #[test]
    fn image_url_is_prefixed_with_origin() {
        assert_eq!(absolute_image_url("https://b.example", "/uploads/a.png"), "https://b.example/uploads/a.png");
        assert_eq!(absolute_image_url("https://b.example/", "uploads/a.png"), "https://b.example/uploads/a.png");
    }

    #[test]
    fn upload_response_uses_camel_case() {
        let parsed: UploadImageResponse = serde_json::from_str(r#"{"imageUrl":"/uploads/x.png"}"#).unwrap();
        assert_eq!(parsed.image_url, "/uploads/x.png");
    }

    #[test]
    fn non_2xx_statuses_become_status_errors() {
        assert_eq!(check_status(200, String::new()), Ok(()));
        assert_eq!(check_status(204, String::new()), Ok(()));
        assert_eq!(
            check_status(503, "Failed to save email configuration".into()),
            Err(ComposerError::Status {
                status: 503,
                body: "Failed to save email configuration".into(),
            })
        );
        assert!(check_status(302, String::new()).is_err());
        assert!(check_status(404, String::new()).is_err());
    }
}
