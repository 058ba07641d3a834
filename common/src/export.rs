//! The downloadable rendition of the preview.

use crate::composer::ComposerState;

pub const EXPORT_FILE_NAME: &str = "renderedOutput.html";
pub const EXPORT_MIME_TYPE: &str = "text/html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub body: String,
}

impl ExportDocument {
    /// Snapshot of the preview as it would be rendered right now.
    pub fn from_state(state: &ComposerState) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME,
            mime_type: EXPORT_MIME_TYPE,
            body: state.preview(),
        }
    }
}
