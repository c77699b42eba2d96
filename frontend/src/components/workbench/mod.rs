//! Root editor component: owns the [`Workspace`](common::store::Workspace)
//! and wires the upload, sidebar and preview children to it.
//!
//! Split the same way as the other stateful components:
//! - `state`: the component struct and its fields.
//! - `messages`: the `Msg` enum driving updates.
//! - `update`: Elm-style state transitions, including the async import.
//! - `view`: rendering for the upload and edit steps.
//! - `helpers`: toasts and the download trigger.

use yew::prelude::*;

mod dialogs;
pub(crate) mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::WorkbenchProps;
pub use state::Workbench;

impl Component for Workbench {
    type Message = Msg;
    type Properties = WorkbenchProps;

    fn create(ctx: &Context<Self>) -> Self {
        Workbench::new(ctx.props().config.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
