//! Telegram update payloads -> [`IncomingUpdate`].

use teloxide::types::{Message, Update, UpdateKind};

use pdfgate_core::{
    domain::{ChatId, MessageId, MessageRef, UserId},
    messaging::types::{CallbackQuery, IncomingUpdate, TextMessage},
    Result,
};

/// Deserialize a webhook body in Telegram's native shape and classify it.
pub fn parse(body: &[u8]) -> Result<IncomingUpdate> {
    let update: Update = serde_json::from_slice(body)?;
    Ok(classify(&update))
}

pub fn classify(update: &Update) -> IncomingUpdate {
    match &update.kind {
        UpdateKind::Message(msg) => match msg.text() {
            Some(text) => IncomingUpdate::from_text(TextMessage {
                chat_id: ChatId(msg.chat.id.0),
                message_id: MessageId(msg.id.0),
                user_id: msg.from().map(|u| UserId(u.id.0 as i64)),
                text: text.to_string(),
            }),
            None => IncomingUpdate::Unrecognized,
        },
        UpdateKind::CallbackQuery(q) => IncomingUpdate::Callback(CallbackQuery {
            callback_id: q.id.clone(),
            user_id: UserId(q.from.id.0 as i64),
            data: q.data.clone(),
            message: q.message.as_ref().map(message_ref),
        }),
        _ => IncomingUpdate::Unrecognized,
    }
}

fn message_ref(msg: &Message) -> MessageRef {
    MessageRef {
        chat_id: ChatId(msg.chat.id.0),
        message_id: MessageId(msg.id.0),
    }
}
