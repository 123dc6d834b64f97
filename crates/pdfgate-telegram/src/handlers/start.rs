use pdfgate_core::{
    messaging::types::{InlineButton, InlineKeyboard, TextMessage},
    Result,
};

use super::{GET_BUTTON, GET_NETWORKS, START_TEXT};
use crate::server::AppState;

/// `/start`: always re-send the same prompt with a single "Get" button.
pub async fn start(state: &AppState, msg: &TextMessage) -> Result<()> {
    let keyboard = InlineKeyboard::single(InlineButton::callback(GET_BUTTON, GET_NETWORKS));
    state
        .messenger
        .send_inline_keyboard(msg.chat_id, START_TEXT, keyboard)
        .await?;
    Ok(())
}
