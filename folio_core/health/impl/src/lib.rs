use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use folio_core_health_contracts::{HealthService, HealthStatus};
use folio_email_contracts::EmailService;
use folio_extern_contracts::telegram::TelegramApiService;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthServiceImpl<Telegram, Email> {
    telegram: Option<Telegram>,
    email: Option<Email>,
    config: HealthServiceConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthServiceConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: Instant,
}

impl<Telegram, Email> HealthServiceImpl<Telegram, Email> {
    pub fn new(
        telegram: Option<Telegram>,
        email: Option<Email>,
        config: HealthServiceConfig,
    ) -> Self {
        Self {
            telegram,
            email,
            config,
            state: Default::default(),
        }
    }
}

impl<Telegram, Email> HealthService for HealthServiceImpl<Telegram, Email>
where
    Telegram: TelegramApiService,
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|cached| cached.timestamp.elapsed() < self.config.cache_ttl)
        {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|cached| cached.timestamp.elapsed() < self.config.cache_ttl)
        {
            return cached.status;
        }

        let telegram = match &self.telegram {
            Some(api) => Some(
                api.get_me()
                    .await
                    .inspect_err(|err| error!("Failed to ping telegram api: {err:#}"))
                    .is_ok(),
            ),
            None => None,
        };

        let email = match &self.email {
            Some(email) => Some(
                email
                    .ping()
                    .await
                    .inspect_err(|err| error!("Failed to ping smtp server: {err:#}"))
                    .is_ok(),
            ),
            None => None,
        };

        let status = HealthStatus { telegram, email };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: Instant::now(),
            })
            .status
    }
}
