//! Failures the composer can run into.
//!
//! Every variant is handled the same way by the client: it is logged and the
//! mutation the operation would have made is skipped.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComposerError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// A 2xx response whose body could not be read or decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// An upload completed while the editor had no cursor to embed at.
    #[error("editor has no selection to embed the image at")]
    MissingSelection,

    #[error("layout has already been loaded")]
    LayoutAlreadyLoaded,
}

pub type ComposerResult<T> = Result<T, ComposerError>;
