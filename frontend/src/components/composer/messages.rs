use common::editor::Format;
use common::error::ComposerError;

#[derive(Clone)]
pub enum Msg {
    LayoutFetched(Result<String, ComposerError>),
    SetTitle(String),
    EditorInput(String),
    ApplyFormat(Format),
    FileSelected(web_sys::File),
    /// Absolute image URL, or why the upload failed.
    ImageUploaded(Result<String, ComposerError>),
    Save,
    Saved(Result<(), ComposerError>),
    DownloadHtml,
}
