//! View rendering for the template composer.
//!
//! Two panels side by side: the editor form (title, rich-text content with a
//! formatting toolbar, image picker, save button) and the live preview with
//! the download button. The preview is the merged layout inserted as raw HTML.

use common::editor::Format;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use super::messages::Msg;
use super::state::TemplateComposer;
use super::styles::STYLES;

/// Main view function for the composer.
pub fn view(component: &TemplateComposer, ctx: &Context<TemplateComposer>) -> Html {
    let link = ctx.link();

    html! {
        <div class="App">
            <style>{ STYLES }</style>
            <header class="header">
                <h1>{ "Email Builder" }</h1>
            </header>
            <div class="container">
                { build_editor_panel(component, link) }
                { build_preview_panel(component, link) }
            </div>
        </div>
    }
}

fn build_editor_panel(component: &TemplateComposer, link: &Scope<TemplateComposer>) -> Html {
    let config = component.composer.config();

    html! {
        <div class="editor-panel">
            <div class="form-group">
                <label for="title">{ "Title" }</label>
                <input
                    id="title"
                    type="text"
                    placeholder="Enter Title"
                    value={config.title.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>

            <div class="form-group">
                <label for="content">{ "Content" }</label>
                { build_toolbar(link) }
                <textarea
                    id="content"
                    class="rich-text"
                    ref={component.editor_ref.clone()}
                    placeholder="Enter Content"
                    spellcheck="false"
                    value={component.composer.editor().to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::EditorInput(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                />
            </div>

            <div class="form-group">
                <input
                    id="image"
                    type="file"
                    accept="image/*"
                    ref={component.file_input_ref.clone()}
                    onchange={link.batch_callback(|e: Event| {
                        let input = e.target_unchecked_into::<HtmlInputElement>();
                        input.files().and_then(|files| files.get(0)).map(Msg::FileSelected)
                    })}
                />
            </div>

            <button class="btn-save" onclick={link.callback(|_| Msg::Save)}>
                { "Save Configuration" }
            </button>
        </div>
    }
}

fn build_preview_panel(component: &TemplateComposer, link: &Scope<TemplateComposer>) -> Html {
    let preview_html = AttrValue::from(component.composer.preview());

    html! {
        <div class="preview-panel">
            <h2>{ "Preview" }</h2>
            <div class="preview">{ Html::from_html_unchecked(preview_html) }</div>
            <div class="download-section">
                <button class="btn-download" onclick={link.callback(|_| Msg::DownloadHtml)}>
                    { "Download HTML" }
                </button>
            </div>
        </div>
    }
}

/// Formatting toolbar above the editor.
fn build_toolbar(link: &Scope<TemplateComposer>) -> Html {
    html! {
        <div class="icon-toolbar">
            { for Format::TOOLBAR.iter().map(|format| icon_button(*format, link)) }
        </div>
    }
}

fn icon_button(format: Format, link: &Scope<TemplateComposer>) -> Html {
    let (icon_name, label) = format_icon(format);
    html! {
        <button
            class="icon-btn"
            type="button"
            title={label}
            onclick={link.callback(move |_| Msg::ApplyFormat(format))}
        >
            <i class="material-icons">{ icon_name }</i>
        </button>
    }
}

/// Material icon name and tooltip for a toolbar format.
fn format_icon(format: Format) -> (&'static str, &'static str) {
    match format {
        Format::Heading1 => ("looks_one", "Heading 1"),
        Format::Heading2 => ("looks_two", "Heading 2"),
        Format::Bold => ("format_bold", "Bold"),
        Format::Italic => ("format_italic", "Italic"),
        Format::Underline => ("format_underlined", "Underline"),
        Format::Strike => ("format_strikethrough", "Strike"),
        Format::OrderedList => ("format_list_numbered", "Ordered list"),
        Format::BulletList => ("format_list_bulleted", "Bullet list"),
        Format::Link => ("link", "Link"),
        Format::Clean => ("format_clear", "Clear formatting"),
    }
}
