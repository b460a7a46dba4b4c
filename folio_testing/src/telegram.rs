use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{Path, State},
    routing, Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

/// Start a local stand-in for the Telegram Bot API.
///
/// `sendMessage` acknowledges with `ok: true` iff the bot token and chat id
/// match the configured values and the message text does not start with
/// `fail`; `getMe` checks only the token.
pub async fn start_server(
    host: IpAddr,
    port: u16,
    token: String,
    chat_id: String,
) -> anyhow::Result<()> {
    info!("Starting telegram testing server on {host}:{port}");
    info!("Api base: http://{host}:{port}/");
    info!("Token: {token:?}, chat id: {chat_id:?}");
    info!("Messages with a text starting with \"fail\" are rejected with ok=false");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(token, chat_id))
        .await
        .context("Failed to start HTTP server")
}

pub fn router(token: String, chat_id: String) -> Router<()> {
    let state = Arc::new(BotConfig { token, chat_id });
    Router::new()
        .route("/:token/sendMessage", routing::post(send_message))
        .route("/:token/getMe", routing::get(get_me))
        .with_state(state)
}

struct BotConfig {
    token: String,
    chat_id: String,
}

impl BotConfig {
    fn token_matches(&self, path_token: &str) -> bool {
        path_token
            .strip_prefix("bot")
            .is_some_and(|token| token == self.token)
    }
}

#[derive(Deserialize)]
struct SendMessageRequest {
    chat_id: String,
    text: String,
}

#[derive(Serialize)]
struct ApiResponse {
    ok: bool,
}

async fn send_message(
    state: State<Arc<BotConfig>>,
    Path(token): Path<String>,
    Json(SendMessageRequest { chat_id, text }): Json<SendMessageRequest>,
) -> Json<ApiResponse> {
    let ok = state.token_matches(&token) && chat_id == state.chat_id && !text.starts_with("fail");
    Json(ApiResponse { ok })
}

async fn get_me(state: State<Arc<BotConfig>>, Path(token): Path<String>) -> Json<ApiResponse> {
    Json(ApiResponse {
        ok: state.token_matches(&token),
    })
}
