use pdfgate_core::{
    errors::Error,
    messaging::types::{CallbackQuery, InlineButton, InlineKeyboard},
    Result,
};

use super::{GET_NETWORKS, SUBSCRIBE_BUTTON, SUBSCRIBE_TEXT};
use crate::server::AppState;

/// Inline button tap: acknowledge, then swap the prompt for a subscribe link.
pub async fn button_callback(state: &AppState, q: &CallbackQuery) -> Result<()> {
    // Always answer first so the client clears its loading spinner.
    state
        .messenger
        .answer_callback_query(&q.callback_id, None)
        .await?;

    if q.data.as_deref() != Some(GET_NETWORKS) {
        tracing::debug!(data = ?q.data, "ignoring unknown callback data");
        return Ok(());
    }

    let Some(origin) = q.message else {
        return Err(Error::External(
            "callback has no originating message to edit".to_string(),
        ));
    };

    let keyboard = InlineKeyboard::single(InlineButton::url(
        SUBSCRIBE_BUTTON,
        state.cfg.channel_link.clone(),
    ));
    state
        .messenger
        .edit_inline_keyboard(origin, SUBSCRIBE_TEXT, keyboard)
        .await
}
