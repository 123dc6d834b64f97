use std::path::PathBuf;

/// Core error type for the bot.
///
/// Adapter crates map their specific errors (Telegram, HTTP, timeouts) into
/// this type so handlers and the webhook boundary can treat failures uniformly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid pdf: {path}: {reason}")]
    InvalidPdf { path: PathBuf, reason: String },

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
