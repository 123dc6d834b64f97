use pdfgate_core::{
    domain::UserId,
    errors::Error,
    messaging::types::TextMessage,
    Result,
};

use super::{DOCUMENT_CAPTION, NOT_SUBSCRIBED_TEXT, STAY_SUBSCRIBED_TEXT};
use crate::server::AppState;

/// Any other text: release the document to channel members, ask everyone else
/// to subscribe.
///
/// A failed or timed-out membership lookup, or a failed send of the document,
/// gets the same reply as a user who is not subscribed; the cases differ only
/// in the logs.
pub async fn check_subscription(state: &AppState, msg: &TextMessage) -> Result<()> {
    let Some(user_id) = msg.user_id else {
        return Err(Error::External("message has no sender".to_string()));
    };

    if !is_subscribed(state, user_id).await {
        state
            .messenger
            .send_text(msg.chat_id, NOT_SUBSCRIBED_TEXT)
            .await?;
        return Ok(());
    }

    if let Err(e) = release_document(state, msg).await {
        tracing::error!(user_id = user_id.0, "Error checking subscription: {e}");
        state
            .messenger
            .send_text(msg.chat_id, NOT_SUBSCRIBED_TEXT)
            .await?;
        return Ok(());
    }
    tracing::info!(user_id = user_id.0, "document sent");
    Ok(())
}

async fn release_document(state: &AppState, msg: &TextMessage) -> Result<()> {
    state
        .messenger
        .send_document(msg.chat_id, &state.cfg.pdf_path, Some(DOCUMENT_CAPTION))
        .await?;
    state
        .messenger
        .send_text(msg.chat_id, STAY_SUBSCRIBED_TEXT)
        .await?;
    Ok(())
}

async fn is_subscribed(state: &AppState, user_id: UserId) -> bool {
    let channel = &state.cfg.channel;
    let lookup = tokio::time::timeout(
        state.cfg.membership_timeout,
        state.messenger.get_chat_member(channel, user_id),
    )
    .await;

    match lookup {
        Ok(Ok(status)) => {
            tracing::debug!(user_id = user_id.0, %channel, ?status, "membership looked up");
            status.is_subscribed()
        }
        Ok(Err(e)) => {
            tracing::warn!(user_id = user_id.0, %channel, "Error checking subscription: {e}");
            false
        }
        Err(_) => {
            tracing::warn!(
                user_id = user_id.0,
                %channel,
                timeout_ms = state.cfg.membership_timeout.as_millis() as u64,
                "membership lookup timed out"
            );
            false
        }
    }
}
