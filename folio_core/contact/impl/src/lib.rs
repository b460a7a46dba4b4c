use folio_core_contact_contracts::{ContactService, ContactSubmitError};
use folio_email_contracts::{ContentType, Email, EmailService};
use folio_extern_contracts::telegram::TelegramApiService;
use folio_models::{
    contact::{ChannelResult, ContactSubmission, NotificationChannel},
    email_address::EmailAddressWithName,
    telegram::TelegramChatId,
};
use folio_templates_contracts::{ContactNotificationTemplate, TemplateService};
use tracing::{error, warn};

/// The contact-submission relay.
///
/// Each channel is attempted iff it is configured; both attempts run
/// concurrently and a failure of one never aborts the other. The submission
/// counts as delivered as soon as any one channel acknowledged it.
#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Telegram, Email, Template> {
    telegram: Option<TelegramChannel<Telegram>>,
    email: Option<EmailChannel<Email>>,
    template: Template,
}

#[derive(Debug, Clone)]
pub struct TelegramChannel<Telegram> {
    pub api: Telegram,
    pub chat_id: TelegramChatId,
}

#[derive(Debug, Clone)]
pub struct EmailChannel<Email> {
    pub email: Email,
    /// Recipient of the notification and sender at the same time; the site
    /// owner mails themselves.
    pub owner: EmailAddressWithName,
}

impl<Telegram, EmailS, Template> ContactServiceImpl<Telegram, EmailS, Template> {
    pub fn new(
        telegram: Option<TelegramChannel<Telegram>>,
        email: Option<EmailChannel<EmailS>>,
        template: Template,
    ) -> Self {
        Self {
            telegram,
            email,
            template,
        }
    }
}

impl<Telegram, EmailS, Template> ContactService for ContactServiceImpl<Telegram, EmailS, Template>
where
    Telegram: TelegramApiService,
    EmailS: EmailService,
    Template: TemplateService,
{
    async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactSubmitError> {
        let (telegram, email) = tokio::join!(
            self.notify_telegram(&submission),
            self.notify_email(&submission)
        );

        let results = telegram.into_iter().chain(email).collect::<Vec<_>>();
        if results.is_empty() {
            warn!("No notification channel is configured, contact submission is lost");
        }

        if results.iter().any(|result| result.success) {
            Ok(())
        } else {
            Err(ContactSubmitError::Deliver)
        }
    }
}

impl<Telegram, EmailS, Template> ContactServiceImpl<Telegram, EmailS, Template>
where
    Telegram: TelegramApiService,
    EmailS: EmailService,
    Template: TemplateService,
{
    async fn notify_telegram(&self, submission: &ContactSubmission) -> Option<ChannelResult> {
        let channel = self.telegram.as_ref()?;

        let text = format!(
            "🔔 New Contact Form Submission\n\n👤 Name: {}\n📧 Email: {}\n\n💬 Message:\n{}",
            *submission.name, *submission.email, *submission.message
        );

        let success = channel
            .api
            .send_message(&channel.chat_id, &text)
            .await
            .inspect(|&ok| {
                if !ok {
                    error!("Telegram api did not acknowledge the contact submission");
                }
            })
            .inspect_err(|err| error!("Failed to deliver contact submission via telegram: {err:#}"))
            .unwrap_or(false);

        Some(ChannelResult {
            channel: NotificationChannel::Telegram,
            success,
        })
    }

    async fn notify_email(&self, submission: &ContactSubmission) -> Option<ChannelResult> {
        let channel = self.email.as_ref()?;

        let success = self
            .send_notification_email(channel, submission)
            .await
            .inspect(|&ok| {
                if !ok {
                    error!("Smtp server did not accept the contact notification");
                }
            })
            .inspect_err(|err| error!("Failed to deliver contact submission via email: {err:#}"))
            .unwrap_or(false);

        Some(ChannelResult {
            channel: NotificationChannel::Email,
            success,
        })
    }

    async fn send_notification_email(
        &self,
        channel: &EmailChannel<EmailS>,
        submission: &ContactSubmission,
    ) -> anyhow::Result<bool> {
        let body = self.template.render(&ContactNotificationTemplate {
            name: (*submission.name).clone(),
            email: (*submission.email).clone(),
            message: (*submission.message).clone(),
        })?;

        // An address that passes the permissive form check is not necessarily
        // a valid mailbox; in that case the notification goes out without a
        // reply-to header.
        let reply_to = submission.email.parse::<EmailAddressWithName>().ok();

        channel
            .email
            .send(Email {
                recipient: channel.owner.clone(),
                subject: format!("Portfolio Contact: {}", *submission.name),
                body,
                content_type: ContentType::Html,
                reply_to,
            })
            .await
    }
}
