use anyhow::anyhow;
use folio_email_contracts::{ContentType, Email, EmailService};
use folio_models::email_address::EmailAddressWithName;
use lettre::{message::header, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    pub fn new(url: &str, from: EmailAddressWithName) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self { from, transport })
    }

    fn build_message(&self, email: Email) -> anyhow::Result<Message> {
        let mut builder = Message::builder()
            .from(self.from.0.clone())
            .to(email.recipient.0);
        if let Some(reply_to) = email.reply_to {
            builder = builder.reply_to(reply_to.0);
        }
        builder
            .subject(email.subject)
            .header(match email.content_type {
                ContentType::Text => header::ContentType::TEXT_PLAIN,
                ContentType::Html => header::ContentType::TEXT_HTML,
            })
            .body(email.body)
            .map_err(Into::into)
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = self.build_message(email)?;

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sut() -> EmailServiceImpl {
        EmailServiceImpl::new(
            "smtp://localhost:25",
            "Site Owner <owner@example.com>".parse().unwrap(),
        )
        .unwrap()
    }

    fn email() -> Email {
        Email {
            recipient: "owner@example.com".parse().unwrap(),
            subject: "Portfolio Contact: Max".into(),
            body: "<p>Hello World!</p>".into(),
            content_type: ContentType::Html,
            reply_to: Some("max@example.de".parse().unwrap()),
        }
    }

    #[tokio::test]
    async fn message_headers() {
        let message = sut().build_message(email()).unwrap();

        let rendered = String::from_utf8(message.formatted()).unwrap();
        assert!(rendered.contains("From: "));
        assert!(rendered.contains("owner@example.com"));
        assert!(rendered.contains("Reply-To: "));
        assert!(rendered.contains("max@example.de"));
        assert!(rendered.contains("Subject: Portfolio Contact: Max"));
        assert!(rendered.contains("text/html"));
    }

    #[tokio::test]
    async fn message_without_reply_to() {
        let message = sut()
            .build_message(Email {
                reply_to: None,
                ..email()
            })
            .unwrap();

        let rendered = String::from_utf8(message.formatted()).unwrap();
        assert!(!rendered.contains("Reply-To"));
    }
}
