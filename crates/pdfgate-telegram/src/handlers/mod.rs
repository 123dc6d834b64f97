//! Update handlers.
//!
//! Each handler talks to Telegram only through `state.messenger`, so the whole
//! flow runs against a fake messenger in tests.

use pdfgate_core::{messaging::types::IncomingUpdate, Result};

use crate::server::AppState;

mod callback;
mod start;
mod subscription;

pub use callback::button_callback;
pub use start::start;
pub use subscription::check_subscription;

/// Callback data carried by the "Get" button.
pub const GET_NETWORKS: &str = "get_networks";

pub const START_TEXT: &str =
    "Get top 10 free neural networks and instructions on how to work with them";
pub const GET_BUTTON: &str = "Get";

pub const SUBSCRIBE_TEXT: &str =
    "Subscribe to the AX9 AI channel and get your free gift on neural networks";
pub const SUBSCRIBE_BUTTON: &str = "Subscribe";

pub const DOCUMENT_CAPTION: &str = "Here's your guide to neural networks!";
pub const STAY_SUBSCRIBED_TEXT: &str = "Stay on the AX9 channel to get free training and new information on neural networks in this bot for free!";
pub const NOT_SUBSCRIBED_TEXT: &str = "Please subscribe to the channel first!";

/// Route one classified update to its handler.
pub async fn dispatch(state: &AppState, update: IncomingUpdate) -> Result<()> {
    tracing::debug!(kind = update.kind(), "dispatching update");
    match update {
        IncomingUpdate::StartCommand(msg) => start(state, &msg).await,
        IncomingUpdate::Callback(q) => button_callback(state, &q).await,
        IncomingUpdate::PlainMessage(msg) => check_subscription(state, &msg).await,
        IncomingUpdate::Unrecognized => Ok(()),
    }
}
