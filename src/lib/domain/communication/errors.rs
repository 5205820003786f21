//! Mailer errors

use lettre::address::AddressError;
use thiserror::Error;

/// Errors raised by a [`Mailer`](super::mailer::Mailer) implementation
#[derive(Debug, Error)]
pub enum MailerError {
    /// A sender or recipient mailbox could not be parsed
    #[error("invalid mailbox address")]
    InvalidAddress,

    /// The transport rejected or failed to accept the message
    #[error(transparent)]
    TransportError(anyhow::Error),
}

impl From<AddressError> for MailerError {
    fn from(_err: AddressError) -> Self {
        MailerError::InvalidAddress
    }
}

impl From<lettre::error::Error> for MailerError {
    fn from(err: lettre::error::Error) -> Self {
        MailerError::TransportError(err.into())
    }
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::TransportError(err)
    }
}
