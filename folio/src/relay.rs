use folio_config::Config;
use folio_core_contact_impl::{ContactServiceImpl, EmailChannel, TelegramChannel};
use folio_core_health_impl::{HealthServiceConfig, HealthServiceImpl};
use folio_email_impl::EmailServiceImpl;
use folio_extern_impl::telegram::{TelegramApiServiceConfig, TelegramApiServiceImpl};
use folio_templates_impl::TemplateServiceImpl;

use crate::email;

pub type Contact =
    ContactServiceImpl<TelegramApiServiceImpl, EmailServiceImpl, TemplateServiceImpl>;
pub type Health = HealthServiceImpl<TelegramApiServiceImpl, EmailServiceImpl>;

/// The fully wired contact relay with its notification channels.
pub struct Relay {
    pub telegram: Option<TelegramApiServiceImpl>,
    pub email: Option<EmailServiceImpl>,
    pub contact: Contact,
    pub health: Health,
}

pub fn build(config: &Config) -> anyhow::Result<Relay> {
    let telegram = config.telegram.as_ref().map(|telegram| {
        let api = TelegramApiServiceImpl::new(TelegramApiServiceConfig::new(
            telegram.api_base_override.clone(),
            telegram.token.clone(),
        ));
        (api, telegram.chat_id.clone())
    });

    let email = config
        .email
        .as_ref()
        .map(|config| email::connect(config).map(|service| (service, config.from.clone())))
        .transpose()?;

    let contact = ContactServiceImpl::new(
        telegram
            .clone()
            .map(|(api, chat_id)| TelegramChannel { api, chat_id }),
        email
            .clone()
            .map(|(email, owner)| EmailChannel { email, owner }),
        TemplateServiceImpl::new(),
    );

    let health = HealthServiceImpl::new(
        telegram.as_ref().map(|(api, _)| api.clone()),
        email.as_ref().map(|(email, _)| email.clone()),
        HealthServiceConfig {
            cache_ttl: *config.health.cache_ttl,
        },
    );

    Ok(Relay {
        telegram: telegram.map(|(api, _)| api),
        email: email.map(|(email, _)| email),
        contact,
        health,
    })
}
