//! Reducer-style state of the composer.
//!
//! All mutations go through [`ComposerState::apply`]. Asynchronous completions
//! (layout fetch, image upload) are turned into actions by the caller and
//! applied in the order they arrive, which makes last-write-wins on the image
//! URL explicit.

use crate::editor;
use crate::error::{ComposerError, ComposerResult};
use crate::model::email_config::{EmailConfig, EmailField};
use crate::model::layout::LayoutDocument;
use crate::render::render_preview;

/// Shown to the user once a save has been accepted by the backend.
pub const SAVE_CONFIRMATION: &str = "Configuration saved successfully!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposerState {
    layout: LayoutDocument,
    config: EmailConfig,
    /// Rich-text editor buffer. Equal to `config.content` after every action.
    editor: String,
    layout_loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerAction {
    /// The layout fetch completed successfully.
    LayoutLoaded(String),
    /// A single field changed. Setting `Content` also updates the editor buffer.
    SetField(EmailField, String),
    /// An upload completed. `cursor` is the editor caret (byte offset) read at
    /// completion time, `None` when the editor had no selection.
    ImageUploaded {
        image_url: String,
        cursor: Option<usize>,
    },
}

impl ComposerState {
    pub fn apply(&mut self, action: ComposerAction) -> ComposerResult<()> {
        match action {
            ComposerAction::LayoutLoaded(html) => {
                if self.layout_loaded {
                    return Err(ComposerError::LayoutAlreadyLoaded);
                }
                self.layout = LayoutDocument::from(html);
                self.layout_loaded = true;
            }
            ComposerAction::SetField(field, value) => {
                if field == EmailField::Content {
                    self.editor.clone_from(&value);
                }
                self.config.set_field(field, value);
            }
            ComposerAction::ImageUploaded { image_url, cursor } => {
                let cursor = cursor.ok_or(ComposerError::MissingSelection)?;
                let edit = editor::embed_image(&self.editor, cursor, &image_url);
                self.config.set_field(EmailField::ImageUrl, image_url);
                self.config.set_field(EmailField::Content, edit.text.clone());
                self.editor = edit.text;
            }
        }
        Ok(())
    }

    pub fn layout(&self) -> &LayoutDocument {
        &self.layout
    }

    pub fn config(&self) -> &EmailConfig {
        &self.config
    }

    pub fn editor(&self) -> &str {
        &self.editor
    }

    pub fn layout_loaded(&self) -> bool {
        self.layout_loaded
    }

    /// Outcome of a save request: the confirmation to show, or `None` when it
    /// failed. Saving never changes the state, whatever the outcome.
    pub fn save_completed(&self, result: ComposerResult<()>) -> Option<&'static str> {
        result.ok().map(|()| SAVE_CONFIRMATION)
    }

    /// Current merged HTML. Recomputed on every call.
    pub fn preview(&self) -> String {
        render_preview(&self.layout, &self.config)
    }
}
