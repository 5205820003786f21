//! Contact form errors

use thiserror::Error;

use crate::domain::communication::errors::MailerError;

/// Errors that can occur when validating a submission
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// One or more required fields is missing or empty
    #[error("one or more required fields is missing")]
    MissingFields,
}

/// Errors that can occur when sending the notification email
#[derive(Debug, Error)]
pub enum SendNotificationError {
    /// The notification template failed to render
    #[error(transparent)]
    RenderError(#[from] askama::Error),

    /// The rendered HTML could not have its CSS inlined
    #[error(transparent)]
    InlineError(#[from] css_inline::InlineError),

    /// The mailer failed to accept the message
    #[error(transparent)]
    DeliveryError(#[from] MailerError),
}
