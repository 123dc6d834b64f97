use crate::domain::{ChatId, MessageId, MessageRef, UserId};

/// Text that starts the conversation.
pub const START_COMMAND: &str = "/start";

/// One inbound update, already classified for dispatch.
///
/// Classification is first-match-wins: `/start`, then callback queries, then
/// any other non-empty text. Everything else is `Unrecognized`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IncomingUpdate {
    StartCommand(TextMessage),
    Callback(CallbackQuery),
    PlainMessage(TextMessage),
    Unrecognized,
}

impl IncomingUpdate {
    /// Classify a text message.
    pub fn from_text(msg: TextMessage) -> Self {
        if msg.text == START_COMMAND {
            Self::StartCommand(msg)
        } else if msg.text.is_empty() {
            Self::Unrecognized
        } else {
            Self::PlainMessage(msg)
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::StartCommand(_) => "start",
            Self::Callback(_) => "callback",
            Self::PlainMessage(_) => "text",
            Self::Unrecognized => "unrecognized",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextMessage {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    /// Absent for anonymous senders (e.g. posts on behalf of a channel).
    pub user_id: Option<UserId>,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackQuery {
    pub callback_id: String,
    pub user_id: UserId,
    pub data: Option<String>,
    /// The message carrying the tapped button; absent for inline-mode messages.
    pub message: Option<MessageRef>,
}

/// What a button does when tapped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Callback(String),
    Url(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub action: ButtonAction,
}

impl InlineButton {
    pub fn callback(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Callback(data.into()),
        }
    }

    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Url(url.into()),
        }
    }
}

/// Inline keyboard, one button per row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineKeyboard {
    pub buttons: Vec<InlineButton>,
}

impl InlineKeyboard {
    pub fn new(buttons: Vec<InlineButton>) -> Self {
        Self { buttons }
    }

    pub fn single(button: InlineButton) -> Self {
        Self {
            buttons: vec![button],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(t: &str) -> TextMessage {
        TextMessage {
            chat_id: ChatId(7),
            message_id: MessageId(1),
            user_id: Some(UserId(42)),
            text: t.to_string(),
        }
    }

    #[test]
    fn start_is_matched_exactly() {
        assert!(matches!(
            IncomingUpdate::from_text(text("/start")),
            IncomingUpdate::StartCommand(_)
        ));
        assert!(matches!(
            IncomingUpdate::from_text(text("/start now")),
            IncomingUpdate::PlainMessage(_)
        ));
        assert!(matches!(
            IncomingUpdate::from_text(text("hello")),
            IncomingUpdate::PlainMessage(_)
        ));
    }

    #[test]
    fn empty_text_is_unrecognized() {
        assert_eq!(
            IncomingUpdate::from_text(text("")),
            IncomingUpdate::Unrecognized
        );
    }
}
