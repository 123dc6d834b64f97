use std::path::Path;

use async_trait::async_trait;

use crate::{
    domain::{ChannelRef, ChatId, MembershipStatus, MessageRef, UserId},
    messaging::types::InlineKeyboard,
    Result,
};

/// Outbound port to the messaging platform.
///
/// Telegram is the production implementation; tests substitute a recording fake.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageRef>;

    async fn send_inline_keyboard(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: InlineKeyboard,
    ) -> Result<MessageRef>;

    /// Replace both the text and the keyboard of an existing message.
    async fn edit_inline_keyboard(
        &self,
        msg: MessageRef,
        text: &str,
        keyboard: InlineKeyboard,
    ) -> Result<()>;

    async fn answer_callback_query(&self, callback_id: &str, text: Option<&str>) -> Result<()>;

    async fn send_document(
        &self,
        chat_id: ChatId,
        path: &Path,
        caption: Option<&str>,
    ) -> Result<MessageRef>;

    async fn get_chat_member(
        &self,
        channel: &ChannelRef,
        user_id: UserId,
    ) -> Result<MembershipStatus>;

    /// Register `url` as the webhook. Re-registering the same URL succeeds.
    async fn set_webhook(&self, url: &str) -> Result<()>;
}
