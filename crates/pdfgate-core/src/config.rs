use std::{
    env,
    net::IpAddr,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{domain::ChannelRef, errors::Error, Result};

/// Typed, read-only configuration, loaded once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    // Telegram
    pub telegram_bot_token: String,
    pub channel: ChannelRef,
    pub channel_link: String,

    // Reward
    pub pdf_path: PathBuf,

    // HTTP
    pub webhook_url: String,
    pub host: IpAddr,
    pub port: u16,

    // Runtime constants
    pub membership_timeout: Duration,
}

impl Config {
    /// Load from the process environment, after reading `.env` from the
    /// working directory if present. Variables already set are not overridden.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(env_str)
    }

    /// Like [`Config::load`], with an explicit `.env` path.
    pub fn load_from(dotenv_path: &Path) -> Result<Self> {
        dotenvy::from_path(dotenv_path).ok();
        Self::from_lookup(env_str)
    }

    /// Parse and validate configuration from an arbitrary key lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| -> Result<String> {
            get(key)
                .and_then(non_empty)
                .map(|v| v.trim().to_string())
                .ok_or_else(|| Error::Config(format!("{key} environment variable is required")))
        };

        let telegram_bot_token = required("TELEGRAM_BOT_TOKEN")?;

        let channel_raw = required("CHANNEL_ID")?;
        let channel = ChannelRef::parse(&channel_raw).ok_or_else(|| {
            Error::Config(format!(
                "CHANNEL_ID must be a numeric chat id or an @handle, got {channel_raw:?}"
            ))
        })?;

        let channel_link = required("CHANNEL_LINK")?;
        check_http_url("CHANNEL_LINK", &channel_link)?;

        let pdf_path = PathBuf::from(required("PDF_PATH")?);

        let webhook_url = required("WEBHOOK_URL")?
            .trim_end_matches('/')
            .to_string();
        check_http_url("WEBHOOK_URL", &webhook_url)?;

        let host = match get("HOST").and_then(non_empty) {
            Some(h) => h
                .trim()
                .parse::<IpAddr>()
                .map_err(|e| Error::Config(format!("HOST is not an ip address: {e}")))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };
        let port = parse_or("PORT", get("PORT"), 5000u16)?;

        let membership_timeout = Duration::from_millis(parse_or(
            "MEMBERSHIP_TIMEOUT_MS",
            get("MEMBERSHIP_TIMEOUT_MS"),
            10_000u64,
        )?);

        Ok(Self {
            telegram_bot_token,
            channel,
            channel_link,
            pdf_path,
            webhook_url,
            host,
            port,
            membership_timeout,
        })
    }

    /// Full URL Telegram should POST updates to: base URL + `/` + token.
    pub fn webhook_endpoint(&self) -> String {
        format!("{}/{}", self.webhook_url, self.telegram_bot_token)
    }
}

fn check_http_url(key: &str, raw: &str) -> Result<()> {
    let parsed =
        url::Url::parse(raw).map_err(|e| Error::Config(format!("{key} is not a valid url: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::Config(format!(
            "{key} must be an http(s) url, got scheme {other:?}"
        ))),
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match raw.and_then(non_empty) {
        Some(v) => v
            .trim()
            .parse::<T>()
            .map_err(|e| Error::Config(format!("{key} is invalid: {e}"))),
        None => Ok(default),
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
