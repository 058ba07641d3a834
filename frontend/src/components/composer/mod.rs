//! Template composer: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, backend calls and
//! helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `TemplateComposerProps`, `TemplateComposer`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, fetch the email layout once. A failed fetch is logged and
//!   leaves the layout empty; there is no retry.

use yew::platform::spawn_local;
use yew::prelude::*;

mod api;
mod helpers;
mod messages;
mod props;
mod state;
mod styles;
mod update;
mod view;

use helpers::resolve_origin;
pub use messages::Msg;
pub use props::TemplateComposerProps;
pub use state::TemplateComposer;

impl Component for TemplateComposer {
    type Message = Msg;
    type Properties = TemplateComposerProps;

    fn create(ctx: &Context<Self>) -> Self {
        TemplateComposer::new(resolve_origin(ctx.props().origin.as_deref()))
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let origin = self.origin.clone();
            spawn_local(async move {
                let result = api::fetch_layout(&origin).await;
                link.send_message(Msg::LayoutFetched(result));
            });
        }
    }
}
