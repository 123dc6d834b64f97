//! Telegram adapter (teloxide) and webhook server (axum).
//!
//! This crate implements the `pdfgate-core` MessagingPort over the Telegram Bot
//! API and exposes the HTTP surface Telegram delivers updates to.

use std::path::Path;

use async_trait::async_trait;

use teloxide::{
    prelude::*,
    types::{ChatMemberKind, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, Recipient},
};

pub mod handlers;
pub mod server;
pub mod updates;

#[cfg(test)]
pub(crate) mod testing;

use pdfgate_core::{
    domain::{ChannelRef, ChatId, MembershipStatus, MessageId, MessageRef, UserId},
    errors::Error,
    messaging::{
        port::MessagingPort,
        types::{ButtonAction, InlineKeyboard},
    },
    Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    pub fn bot(&self) -> Bot {
        self.bot.clone()
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn tg_msg_id(message_id: MessageId) -> teloxide::types::MessageId {
        teloxide::types::MessageId(message_id.0)
    }

    fn tg_recipient(channel: &ChannelRef) -> Recipient {
        match channel {
            ChannelRef::Id(id) => Recipient::Id(teloxide::types::ChatId(*id)),
            ChannelRef::Username(name) => Recipient::ChannelUsername(name.clone()),
        }
    }

    fn tg_markup(keyboard: InlineKeyboard) -> Result<InlineKeyboardMarkup> {
        let mut rows: Vec<Vec<InlineKeyboardButton>> = Vec::with_capacity(keyboard.buttons.len());
        for b in keyboard.buttons {
            let button = match b.action {
                ButtonAction::Callback(data) => InlineKeyboardButton::callback(b.label, data),
                ButtonAction::Url(raw) => {
                    let url = url::Url::parse(&raw)
                        .map_err(|e| Error::External(format!("invalid button url {raw:?}: {e}")))?;
                    InlineKeyboardButton::url(b.label, url)
                }
            };
            rows.push(vec![button]);
        }
        Ok(InlineKeyboardMarkup::new(rows))
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::External(format!("telegram error: {e}"))
    }

    fn msg_ref(chat_id: ChatId, msg: &Message) -> MessageRef {
        MessageRef {
            chat_id,
            message_id: MessageId(msg.id.0),
        }
    }
}

pub(crate) fn membership_from_kind(kind: &ChatMemberKind) -> MembershipStatus {
    match kind {
        ChatMemberKind::Owner(_) => MembershipStatus::Creator,
        ChatMemberKind::Administrator(_) => MembershipStatus::Administrator,
        ChatMemberKind::Member => MembershipStatus::Member,
        ChatMemberKind::Restricted(_) => MembershipStatus::Restricted,
        ChatMemberKind::Left => MembershipStatus::Left,
        ChatMemberKind::Banned(_) => MembershipStatus::Kicked,
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageRef> {
        let msg = self
            .bot
            .send_message(Self::tg_chat(chat_id), text.to_string())
            .await
            .map_err(Self::map_err)?;
        Ok(Self::msg_ref(chat_id, &msg))
    }

    async fn send_inline_keyboard(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: InlineKeyboard,
    ) -> Result<MessageRef> {
        let markup = Self::tg_markup(keyboard)?;
        let msg = self
            .bot
            .send_message(Self::tg_chat(chat_id), text.to_string())
            .reply_markup(markup)
            .await
            .map_err(Self::map_err)?;
        Ok(Self::msg_ref(chat_id, &msg))
    }

    async fn edit_inline_keyboard(
        &self,
        msg: MessageRef,
        text: &str,
        keyboard: InlineKeyboard,
    ) -> Result<()> {
        let markup = Self::tg_markup(keyboard)?;
        self.bot
            .edit_message_text(
                Self::tg_chat(msg.chat_id),
                Self::tg_msg_id(msg.message_id),
                text.to_string(),
            )
            .reply_markup(markup)
            .await
            .map_err(Self::map_err)?;
        Ok(())
    }

    async fn answer_callback_query(&self, callback_id: &str, text: Option<&str>) -> Result<()> {
        let mut req = self.bot.answer_callback_query(callback_id.to_string());
        if let Some(t) = text {
            req = req.text(t.to_string());
        }
        req.await.map_err(Self::map_err)?;
        Ok(())
    }

    async fn send_document(
        &self,
        chat_id: ChatId,
        path: &Path,
        caption: Option<&str>,
    ) -> Result<MessageRef> {
        let mut req = self
            .bot
            .send_document(Self::tg_chat(chat_id), InputFile::file(path.to_path_buf()));
        if let Some(c) = caption {
            req = req.caption(c.to_string());
        }
        let msg = req.await.map_err(Self::map_err)?;
        Ok(Self::msg_ref(chat_id, &msg))
    }

    async fn get_chat_member(
        &self,
        channel: &ChannelRef,
        user_id: UserId,
    ) -> Result<MembershipStatus> {
        let uid = u64::try_from(user_id.0)
            .map_err(|_| Error::External(format!("invalid telegram user id: {}", user_id.0)))?;
        let member = self
            .bot
            .get_chat_member(Self::tg_recipient(channel), teloxide::types::UserId(uid))
            .await
            .map_err(Self::map_err)?;
        Ok(membership_from_kind(&member.kind))
    }

    async fn set_webhook(&self, url: &str) -> Result<()> {
        let url = url::Url::parse(url)
            .map_err(|e| Error::External(format!("invalid webhook url: {e}")))?;
        self.bot.set_webhook(url).await.map_err(Self::map_err)?;
        Ok(())
    }
}
