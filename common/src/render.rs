//! Placeholder substitution of the layout against the current field values.
//!
//! The rule is deliberately simple: each token is replaced at its first
//! occurrence only, in the fixed order title, content, image URL. Values are
//! inserted verbatim (no escaping) because the content field carries markup
//! produced by the editor and the result is displayed as raw HTML.

use crate::model::email_config::{EmailConfig, EmailField};
use crate::model::layout::{LayoutDocument, placeholder_token};

/// Order in which tokens are substituted. A value containing a token that is
/// substituted later in this order will have that token replaced.
const SUBSTITUTION_ORDER: [EmailField; 3] =
    [EmailField::Title, EmailField::Content, EmailField::ImageUrl];

/// Merges `config` into `layout` and returns the resulting HTML.
pub fn render_preview(layout: &LayoutDocument, config: &EmailConfig) -> String {
    SUBSTITUTION_ORDER
        .iter()
        .fold(layout.as_str().to_string(), |html, field| {
            html.replacen(placeholder_token(*field), config.field(*field), 1)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(title: &str, content: &str, image_url: &str) -> EmailConfig {
        EmailConfig {
            title: title.to_string(),
            content: content.to_string(),
            image_url: image_url.to_string(),
        }
    }

    #[test]
    fn merges_all_three_tokens() {
        let layout = LayoutDocument::from("<h1>{{title}}</h1><p>{{content}}</p><img src='{{imageUrl}}'>");
        let html = render_preview(&layout, &config("Hi", "<b>Body</b>", "http://x/y.png"));
        assert_eq!(html, "<h1>Hi</h1><p><b>Body</b></p><img src='http://x/y.png'>");
    }

    #[test]
    fn only_first_occurrence_is_replaced() {
        let layout = LayoutDocument::from("<title>{{title}}</title><h1>{{title}}</h1>");
        let html = render_preview(&layout, &config("A", "", ""));
        assert_eq!(html, "<title>A</title><h1>{{title}}</h1>");
    }

    #[test]
    fn empty_fields_remove_tokens() {
        let layout = LayoutDocument::from("<h1>{{title}}</h1><p>{{content}}</p><img src='{{imageUrl}}'>");
        let html = render_preview(&layout, &EmailConfig::default());
        assert_eq!(html, "<h1></h1><p></p><img src=''>");
        assert!(!html.contains("undefined"));
        assert!(!html.contains("null"));
    }

    #[test]
    fn is_idempotent_on_identical_inputs() {
        let layout = LayoutDocument::from("{{content}}|{{imageUrl}}|{{title}}");
        let cfg = config("t", "<i>c</i>", "u");
        assert_eq!(render_preview(&layout, &cfg), render_preview(&layout, &cfg));
    }

    #[test]
    fn empty_layout_renders_empty() {
        let html = render_preview(&LayoutDocument::default(), &config("t", "c", "u"));
        assert_eq!(html, "");
    }

    #[test]
    fn layout_without_tokens_passes_through() {
        let layout = LayoutDocument::from("<p>static</p>");
        assert_eq!(render_preview(&layout, &config("t", "c", "u")), "<p>static</p>");
    }

    #[test]
    fn substitution_is_sequential() {
        let layout = LayoutDocument::from("<h1>{{title}}</h1><div>{{content}}</div>");
        let html = render_preview(&layout, &config("{{content}}", "body", ""));
        assert_eq!(html, "<h1>body</h1><div>{{content}}</div>");
    }
}
