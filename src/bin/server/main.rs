#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Contact form notification server

use anyhow::Result;
use clap::Parser;
use portfolio_contact::{
    domain::{communication::email_address::EmailAddress, contact::service::ContactServiceImpl},
    infrastructure::{
        email::smtp::{SMTPConfig, SMTPMailer},
        http::{HttpServer, HttpServerConfig},
    },
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The SMTP configuration
    #[clap(flatten)]
    pub smtp: SMTPConfig,

    /// Where contact form notifications are sent
    #[clap(
        long,
        env = "CONTACT_RECIPIENT",
        default_value = "bagriaditya00@gmail.com"
    )]
    pub recipient: String,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine in production; the environment is set
    // directly there.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let recipient = EmailAddress::new(&args.recipient)?;
    let mailer = SMTPMailer::new(args.smtp);
    let contacts = ContactServiceImpl::new(mailer, recipient);

    HttpServer::new(contacts, args.server).await?.run().await
}
