//! Webhook HTTP surface.
//!
//! - `POST /{token}`: Telegram update receiver, always answers `OK`
//! - `GET|POST /set_webhook`: (re)register the webhook on demand
//! - `GET /`: liveness

use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use teloxide::prelude::*;
use tower_http::trace::TraceLayer;

use pdfgate_core::{config::Config, messaging::port::MessagingPort, Result};

use crate::{handlers, updates, TelegramMessenger};

pub const WEBHOOK_OK: &str = "Webhook setup successful";
pub const WEBHOOK_FAILED: &str = "Webhook setup failed";

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub messenger: Arc<dyn MessagingPort>,
}

impl AppState {
    pub fn new(cfg: Arc<Config>, messenger: Arc<dyn MessagingPort>) -> Self {
        Self { cfg, messenger }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/set_webhook", get(set_webhook).post(set_webhook))
        .route("/{token}", post(webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_webhook(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    match bot.get_me().await {
        Ok(me) => tracing::info!("pdfgate started: @{}", me.username()),
        Err(e) => tracing::warn!("could not fetch bot identity: {e}"),
    }
    tracing::info!(
        channel = %cfg.channel,
        pdf = %cfg.pdf_path.display(),
        "gating document behind channel subscription"
    );

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot));
    let state = Arc::new(AppState::new(cfg.clone(), messenger));

    register_on_startup(&state).await;

    let addr = SocketAddr::new(cfg.host, cfg.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Startup registration. A failure is not fatal: `/set_webhook` can repair it
/// later, so this only reports whether it worked.
pub async fn register_on_startup(state: &AppState) -> bool {
    match register_webhook(state).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("startup webhook registration failed: {e}");
            false
        }
    }
}

/// Register `{WEBHOOK_URL}/{token}` with Telegram.
pub async fn register_webhook(state: &AppState) -> Result<()> {
    state
        .messenger
        .set_webhook(&state.cfg.webhook_endpoint())
        .await?;
    // The full endpoint embeds the token; log only the base.
    tracing::info!(base = %state.cfg.webhook_url, "webhook registered");
    Ok(())
}

/// Parse and dispatch one webhook body. Never fails: errors are logged here.
pub async fn handle_update(state: &AppState, body: &[u8]) {
    let update = match updates::parse(body) {
        Ok(u) => u,
        Err(e) => {
            tracing::warn!("Error parsing update: {e}");
            return;
        }
    };
    let kind = update.kind();
    if let Err(e) = handlers::dispatch(state, update).await {
        tracing::error!(kind, "Error handling update: {e}");
    }
}

async fn webhook(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    body: Bytes,
) -> std::result::Result<&'static str, StatusCode> {
    if token != state.cfg.telegram_bot_token {
        return Err(StatusCode::NOT_FOUND);
    }
    handle_update(&state, &body).await;
    Ok("OK")
}

async fn set_webhook(State(state): State<Arc<AppState>>) -> &'static str {
    match register_webhook(&state).await {
        Ok(()) => WEBHOOK_OK,
        Err(e) => {
            tracing::error!("webhook registration failed: {e}");
            WEBHOOK_FAILED
        }
    }
}

async fn index() -> &'static str {
    "Bot is running"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutting down gracefully...");
}
