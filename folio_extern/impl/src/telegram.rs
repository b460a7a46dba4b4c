use std::sync::Arc;

use anyhow::anyhow;
use folio_extern_contracts::telegram::TelegramApiService;
use folio_models::{
    telegram::{TelegramBotToken, TelegramChatId},
    Sensitive,
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

const API_BASE: &str = "https://api.telegram.org/";

#[derive(Debug, Clone)]
pub struct TelegramApiServiceImpl {
    config: TelegramApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct TelegramApiServiceConfig {
    api_base: Arc<Url>,
    token: Sensitive<TelegramBotToken>,
}

impl TelegramApiServiceConfig {
    pub fn new(api_base_override: Option<Url>, token: Sensitive<TelegramBotToken>) -> Self {
        Self {
            api_base: api_base_override
                .unwrap_or_else(|| API_BASE.parse().unwrap())
                .into(),
            token,
        }
    }
}

impl TelegramApiServiceImpl {
    pub fn new(config: TelegramApiServiceConfig) -> Self {
        Self {
            config,
            client: HttpClient::default(),
        }
    }

    fn method_url(&self, method: &str) -> anyhow::Result<Url> {
        self.config
            .api_base
            .join(&format!("bot{}/{method}", &**self.config.token))
            .map_err(Into::into)
    }
}

impl TelegramApiService for TelegramApiServiceImpl {
    async fn send_message(&self, chat_id: &TelegramChatId, text: &str) -> anyhow::Result<bool> {
        self.client
            .post(self.method_url("sendMessage")?)
            .json(&SendMessageRequest {
                chat_id: &**chat_id,
                text,
            })
            .send()
            .await?
            .error_for_status()?
            .json::<ApiResponse>()
            .await
            .map(|response| response.ok)
            .map_err(Into::into)
    }

    async fn get_me(&self) -> anyhow::Result<()> {
        self.client
            .get(self.method_url("getMe")?)
            .send()
            .await?
            .error_for_status()?
            .json::<ApiResponse>()
            .await?
            .ok
            .then_some(())
            .ok_or_else(|| anyhow!("Bot token rejected by the Telegram API"))
    }
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    ok: bool,
}
