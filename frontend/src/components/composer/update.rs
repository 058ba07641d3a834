//! Update function for the template composer.
//!
//! Elm-style: receives the component, the `Context` and a `Msg`, mutates state
//! and returns whether the view must re-render. State changes are expressed as
//! `ComposerAction`s and applied through the shared reducer; network calls are
//! spawned here and report back with another message when they complete.
//!
//! Failures are logged to the console and otherwise silent. The only
//! user-facing signal is the confirmation dialog after a successful save.

use common::composer::ComposerAction;
use common::editor::{apply_format, Edit};
use common::export::ExportDocument;
use common::model::email_config::EmailField;
use gloo_console::error;
use web_sys::HtmlTextAreaElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::api;
use super::helpers::{alert, byte_to_utf16_idx, selection_bytes, trigger_download, utf16_to_byte_idx};
use super::messages::Msg;
use super::state::TemplateComposer;

/// Central update function for the component.
pub fn update(component: &mut TemplateComposer, ctx: &Context<TemplateComposer>, msg: Msg) -> bool {
    match msg {
        Msg::LayoutFetched(Ok(html)) => apply(
            component,
            ComposerAction::LayoutLoaded(html),
            "Error fetching layout:",
        ),
        Msg::LayoutFetched(Err(err)) => {
            error!(format!("Error fetching layout: {}", err));
            false
        }
        Msg::SetTitle(value) => apply(
            component,
            ComposerAction::SetField(EmailField::Title, value),
            "Error updating title:",
        ),
        Msg::EditorInput(value) => apply(
            component,
            ComposerAction::SetField(EmailField::Content, value),
            "Error updating content:",
        ),
        Msg::ApplyFormat(format) => {
            let text = component.composer.editor();
            let (start, end) = selection_bytes(&component.editor_ref, text).unwrap_or((text.len(), text.len()));
            let edit = apply_format(text, start, end, format);
            let rendered = apply(
                component,
                ComposerAction::SetField(EmailField::Content, edit.text.clone()),
                "Error applying format:",
            );
            restore_selection(component, &edit);
            rendered
        }
        Msg::FileSelected(file) => {
            // Clear the picker so choosing the same file again fires `change`.
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.set_value("");
            }
            let origin = component.origin.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::upload_image(&origin, file).await;
                link.send_message(Msg::ImageUploaded(result));
            });
            false
        }
        Msg::ImageUploaded(Ok(image_url)) => {
            // The caret is read now, when the upload completes, not when it started.
            let cursor = component
                .editor_ref
                .cast::<HtmlTextAreaElement>()
                .and_then(|textarea| textarea.selection_start().ok().flatten())
                .map(|utf16| utf16_to_byte_idx(component.composer.editor(), utf16 as usize));
            apply(
                component,
                ComposerAction::ImageUploaded { image_url, cursor },
                "Error uploading image:",
            )
        }
        Msg::ImageUploaded(Err(err)) => {
            error!(format!("Error uploading image: {}", err));
            false
        }
        Msg::Save => {
            let origin = component.origin.clone();
            let config = component.composer.config().clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::save_config(&origin, &config).await;
                link.send_message(Msg::Saved(result));
            });
            false
        }
        Msg::Saved(result) => {
            if let Err(err) = &result {
                error!(format!("Error saving configuration: {}", err));
            }
            if let Some(confirmation) = component.composer.save_completed(result) {
                alert(confirmation);
            }
            false
        }
        Msg::DownloadHtml => {
            let document = ExportDocument::from_state(&component.composer);
            if let Err(err) = trigger_download(&document) {
                error!("Error downloading HTML:", err);
            }
            false
        }
    }
}

/// Runs `action` through the reducer. Logs with `context` and skips the
/// re-render when it is rejected.
fn apply(component: &mut TemplateComposer, action: ComposerAction, context: &str) -> bool {
    match component.composer.apply(action) {
        Ok(()) => true,
        Err(err) => {
            error!(format!("{} {}", context, err));
            false
        }
    }
}

/// Puts the textarea selection on `edit.selection` once the re-render that
/// rewrites the textarea value has happened.
fn restore_selection(component: &TemplateComposer, edit: &Edit) {
    let start = byte_to_utf16_idx(&edit.text, edit.selection.0);
    let end = byte_to_utf16_idx(&edit.text, edit.selection.1);
    let editor_ref = component.editor_ref.clone();
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(10).await;
        if let Some(textarea) = editor_ref.cast::<HtmlTextAreaElement>() {
            textarea.set_selection_range(start, end).ok();
            textarea.focus().ok();
        }
    });
}
