use clap::Subcommand;
use folio_config::Config;
use folio_core_contact_contracts::ContactService;
use folio_models::contact::ContactSubmission;

use crate::relay;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Send a test submission through the configured notification channels
    Test {
        #[arg(long, default_value = "Max Mustermann")]
        name: String,
        #[arg(long, default_value = "max.mustermann@example.com")]
        email: String,
        #[arg(long, default_value = "Test contact submission")]
        message: String,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Test {
                name,
                email,
                message,
            } => test(config, name, email, message).await,
        }
    }
}

async fn test(config: Config, name: String, email: String, message: String) -> anyhow::Result<()> {
    let submission = ContactSubmission::try_new(name, email, message)?;

    let relay = relay::build(&config)?;
    relay.contact.submit(submission).await?;

    println!("Contact submission delivered");

    Ok(())
}
