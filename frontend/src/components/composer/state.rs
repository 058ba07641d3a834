//! Component state for the template composer.
//!
//! The editable data lives in `common::composer::ComposerState` and is only
//! changed through its reducer. This struct adds what the browser side needs
//! on top of it: DOM refs, the resolved backend origin, and the first-render
//! guard.

use common::composer::ComposerState;
use yew::prelude::*;

pub struct TemplateComposer {
    /// Layout, form fields and editor buffer.
    pub composer: ComposerState,

    /// Backend origin every request is sent to. Resolved once at creation.
    pub origin: String,

    /// Reference to the editor `<textarea>`.
    pub editor_ref: NodeRef,

    /// Reference to the image `<input type="file">`.
    pub file_input_ref: NodeRef,

    /// Guard so the layout is fetched once per component instance.
    pub loaded: bool,
}

impl TemplateComposer {
    pub fn new(origin: String) -> Self {
        Self {
            composer: ComposerState::default(),
            origin,
            editor_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
            loaded: false,
        }
    }
}
