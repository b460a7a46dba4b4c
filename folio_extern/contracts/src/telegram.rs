use std::future::Future;

use folio_models::telegram::TelegramChatId;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TelegramApiService: Send + Sync + 'static {
    /// Deliver a text message to the given chat.
    ///
    /// Returns the `ok` acknowledgement flag of the Bot API response. The API
    /// can answer HTTP 200 with `ok: false`, so the flag is the only
    /// authoritative delivery signal.
    fn send_message(
        &self,
        chat_id: &TelegramChatId,
        text: &str,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Verify that the configured bot token is accepted by the API.
    fn get_me(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockTelegramApiService {
    pub fn with_send_message(mut self, chat_id: TelegramChatId, text: String, ok: bool) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(chat_id), mockall::predicate::eq(text))
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(ok))));
        self
    }

    pub fn with_get_me(mut self, ok: bool) -> Self {
        self.expect_get_me().once().return_once(move || {
            Box::pin(std::future::ready(
                ok.then_some(())
                    .ok_or_else(|| anyhow::anyhow!("bot token rejected")),
            ))
        });
        self
    }

    pub fn with_send_message_error(mut self, chat_id: TelegramChatId, text: String) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(chat_id), mockall::predicate::eq(text))
            .return_once(|_, _| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "bot api unreachable"
                ))))
            });
        self
    }
}
