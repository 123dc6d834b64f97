use std::fmt;

/// Telegram user id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Telegram message id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(pub i32);

/// A stable reference to a Telegram message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

/// The channel a user must be subscribed to.
///
/// Telegram accepts either the numeric id (`-100...`) or the public `@handle`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelRef {
    Id(i64),
    Username(String),
}

impl ChannelRef {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Some(handle) = raw.strip_prefix('@') {
            if handle.is_empty() || handle.contains(char::is_whitespace) {
                return None;
            }
            return Some(Self::Username(raw.to_string()));
        }
        raw.parse::<i64>().ok().map(Self::Id)
    }
}

impl fmt::Display for ChannelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(name) => f.write_str(name),
        }
    }
}

/// A user's relationship to a channel, as reported by Telegram.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MembershipStatus {
    Member,
    Administrator,
    Creator,
    Left,
    Kicked,
    Restricted,
}

impl MembershipStatus {
    /// Only these statuses unlock the document. `Restricted` does not, even
    /// when Telegram still counts the user as a member.
    pub fn is_subscribed(self) -> bool {
        matches!(self, Self::Member | Self::Administrator | Self::Creator)
    }
}
