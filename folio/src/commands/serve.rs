use folio_api_rest::RestServer;
use folio_config::Config;
use folio_email_contracts::EmailService;
use folio_extern_contracts::telegram::TelegramApiService;
use tracing::{info, warn};

use crate::relay;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    if config.telegram.is_none() && config.email.is_none() {
        warn!("No notification channel is configured, contact submissions cannot be delivered");
    }

    let relay = relay::build(&config)?;

    // A channel being down at startup must not prevent serving the others
    if let Some(telegram) = &relay.telegram {
        info!("Checking telegram bot token");
        if let Err(err) = telegram.get_me().await {
            warn!("Telegram bot api is not reachable: {err:#}");
        }
    }
    if let Some(email) = &relay.email {
        info!("Connecting to smtp server");
        if let Err(err) = email.ping().await {
            warn!("Smtp server is not reachable: {err:#}");
        }
    }

    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    RestServer::new(relay.health, relay.contact)
        .serve(config.http.host, config.http.port)
        .await
}
