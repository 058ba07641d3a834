//! Browser-side utilities for the template composer.
//!
//! - **Index conversion**: the textarea reports its selection in UTF-16 code
//!   units while the pure editing functions in `common::editor` work on UTF-8
//!   byte offsets.
//! - **Origin resolution**: where the backend lives.
//! - **Download and alert**: the two DOM side effects of the export/save paths.

use common::export::ExportDocument;
use gloo_file::{Blob, ObjectUrl};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlAnchorElement, HtmlTextAreaElement};
use yew::NodeRef;

/// Converts a UTF-8 byte index to its corresponding UTF-16 code unit index.
///
/// Used after an edit computed in Rust to put the selection back with
/// `set_selection_range`.
pub fn byte_to_utf16_idx(s: &str, byte_idx: usize) -> u32 {
    s[..byte_idx].encode_utf16().count() as u32
}

/// Converts a UTF-16 code unit index to its corresponding UTF-8 byte index.
///
/// Positions past the end map to `s.len()`. A position that falls between the
/// two halves of a surrogate pair maps to the start of the following char.
pub fn utf16_to_byte_idx(s: &str, utf16_idx: usize) -> usize {
    let mut units = 0;
    for (byte_idx, c) in s.char_indices() {
        if units >= utf16_idx {
            return byte_idx;
        }
        units += c.len_utf16();
    }
    s.len()
}

/// Current selection of the editor textarea as byte offsets into `text`.
///
/// `None` when the textarea is not mounted or reports no selection.
pub fn selection_bytes(editor_ref: &NodeRef, text: &str) -> Option<(usize, usize)> {
    let textarea = editor_ref.cast::<HtmlTextAreaElement>()?;
    let start = textarea.selection_start().ok().flatten()? as usize;
    let end = textarea.selection_end().ok().flatten().map_or(start, |e| e as usize);
    Some((utf16_to_byte_idx(text, start), utf16_to_byte_idx(text, end)))
}

/// Backend origin: the explicit prop, then the build-time
/// `COMPOSER_BACKEND_ORIGIN`, then the origin the page was served from.
pub fn resolve_origin(explicit: Option<&str>) -> String {
    if let Some(origin) = explicit.filter(|o| !o.is_empty()) {
        return origin.to_string();
    }
    if let Some(origin) = option_env!("COMPOSER_BACKEND_ORIGIN").filter(|o| !o.is_empty()) {
        return origin.to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Saves `document` through a temporary anchor.
///
/// The object URL is revoked as soon as the click has been dispatched.
pub fn trigger_download(document: &ExportDocument) -> Result<(), JsValue> {
    let dom = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let blob = Blob::new_with_options(document.body.as_str(), Some(document.mime_type));
    let url = ObjectUrl::from(blob);

    let anchor: HtmlAnchorElement = dom.create_element("a")?.dyn_into().map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(document.file_name);
    anchor.click();

    drop(url);
    Ok(())
}

/// Blocking confirmation dialog.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_offsets_are_identical() {
        let s = "<p>hello</p>";
        for i in 0..=s.len() {
            assert_eq!(utf16_to_byte_idx(s, i), i);
            assert_eq!(byte_to_utf16_idx(s, i) as usize, i);
        }
    }

    #[test]
    fn multibyte_chars_are_converted() {
        // 'é' is 2 bytes / 1 unit, '✉' 3 bytes / 1 unit, '😀' 4 bytes / 2 units
        let s = "é✉😀x";
        assert_eq!(utf16_to_byte_idx(s, 1), 2);
        assert_eq!(utf16_to_byte_idx(s, 2), 5);
        assert_eq!(utf16_to_byte_idx(s, 4), 9);
        assert_eq!(byte_to_utf16_idx(s, 9), 4);
        assert_eq!(byte_to_utf16_idx(s, 5), 2);
    }

    #[test]
    fn past_the_end_maps_to_len() {
        assert_eq!(utf16_to_byte_idx("ab", 10), 2);
    }
}
