use crate::model::email_config::EmailField;

/// Server-provided HTML layout containing placeholder tokens.
///
/// Opaque to the client: it is fetched once, never parsed, and only ever
/// read by the preview renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutDocument(String);

impl LayoutDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for LayoutDocument {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl From<&str> for LayoutDocument {
    fn from(html: &str) -> Self {
        Self(html.to_string())
    }
}

/// Literal token a field replaces in the layout.
pub fn placeholder_token(field: EmailField) -> &'static str {
    match field {
        EmailField::Title => "{{title}}",
        EmailField::Content => "{{content}}",
        EmailField::ImageUrl => "{{imageUrl}}",
    }
}
