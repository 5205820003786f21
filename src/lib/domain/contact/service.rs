//! Contact service

use askama::Template;
use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::{
    communication::{email_address::EmailAddress, mailer::Mailer},
    contact::{
        emails::notification::ContactNotificationTemplate, errors::SendNotificationError,
        submission::Submission,
    },
};

/// Contact service
#[async_trait]
pub trait ContactService: Clone + Send + Sync + 'static {
    /// Sends the notification email for a submission.
    ///
    /// # Arguments
    /// * `submission` - The validated [`Submission`] to notify the site
    ///   owner about.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] if the transport accepted the
    /// notification, or an [`Err`] containing a [`SendNotificationError`].
    async fn send_notification(
        &self,
        submission: &Submission,
    ) -> Result<(), SendNotificationError>;
}

/// Contact service backed by a [`Mailer`]
#[derive(Clone, Debug)]
pub struct ContactServiceImpl<M: Mailer> {
    mailer: M,
    recipient: EmailAddress,
}

impl<M: Mailer> ContactServiceImpl<M> {
    /// Create a new contact service sending notifications to `recipient`
    pub fn new(mailer: M, recipient: EmailAddress) -> Self {
        Self { mailer, recipient }
    }
}

#[async_trait]
impl<M: Mailer> ContactService for ContactServiceImpl<M> {
    async fn send_notification(
        &self,
        submission: &Submission,
    ) -> Result<(), SendNotificationError> {
        let template = ContactNotificationTemplate::new(submission);

        // Mail clients ignore <style> blocks, so inline the CSS per element.
        let html = css_inline::inline(&template.render()?)?;
        let plain = template.render_plain();

        self.mailer
            .send_email(&self.recipient, &template.subject(), &html, &plain)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mock! {
    pub ContactService {}

    impl Clone for ContactService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl ContactService for ContactService {
        async fn send_notification(&self, submission: &Submission) -> Result<(), SendNotificationError>;
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use testresult::TestResult;

    use crate::domain::communication::{errors::MailerError, mailer::MockMailer};

    use super::*;

    fn recipient() -> EmailAddress {
        EmailAddress::new("inbox@example.com").expect("valid email")
    }

    #[tokio::test]
    async fn test_send_notification_sends_one_email() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send_email()
            .withf(|to, subject, html, plain| {
                to == &EmailAddress::new("inbox@example.com").expect("valid email")
                    && subject == "New Contact Form Submission from Ann"
                    && html.contains("Ann")
                    && html.contains("ann@x.com")
                    && html.contains("Hi")
                    && plain.contains("From: Ann (ann@x.com)")
            })
            .once()
            .returning(|_, _, _, _| Ok(()));

        let service = ContactServiceImpl::new(mailer, recipient());
        let submission = Submission::new("Ann", "ann@x.com", "Hi")?;

        service.send_notification(&submission).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_send_notification_inlines_template_css() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send_email()
            .withf(|_, _, html, _| html.contains("style=") && !html.contains("<style>"))
            .once()
            .returning(|_, _, _, _| Ok(()));

        let service = ContactServiceImpl::new(mailer, recipient());
        let submission = Submission::new("Ann", "ann@x.com", "Hi")?;

        service.send_notification(&submission).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_send_notification_surfaces_mailer_failure() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send_email()
            .returning(|_, _, _, _| Err(MailerError::TransportError(anyhow!("SMTP timeout"))));

        let service = ContactServiceImpl::new(mailer, recipient());
        let submission = Submission::new("Ann", "ann@x.com", "Hi")?;

        let err = service
            .send_notification(&submission)
            .await
            .expect_err("delivery should fail");

        assert_eq!(err.to_string(), "SMTP timeout");

        Ok(())
    }
}
