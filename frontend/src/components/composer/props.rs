//! Defines the properties for the `TemplateComposer`.

use yew::prelude::*;

/// Properties for the `TemplateComposer`.
#[derive(Properties, PartialEq, Clone)]
pub struct TemplateComposerProps {
    /// Origin of the backend serving the layout, uploads and config storage,
    /// e.g. `https://mail-backend.example.com`.
    ///
    /// - If `None` (the default), the build-time `COMPOSER_BACKEND_ORIGIN`
    ///   value is used, falling back to the origin the page was served from.
    ///
    /// Read once when the component is created.
    #[prop_or_default]
    pub origin: Option<AttrValue>,
}
