//! Contact notification template

use askama::Template;

use crate::domain::contact::submission::Submission;

/// Notification email sent to the site owner for each submission
///
/// All three fields are user-supplied; the HTML template escapes every
/// interpolated value.
#[derive(Debug, Template)]
#[template(path = "emails/contact/notification.html")]
pub struct ContactNotificationTemplate<'a> {
    /// The submitter's name
    pub name: &'a str,

    /// The submitter's email address, as entered
    pub email: &'a str,

    /// The message body
    pub message: &'a str,
}

impl<'a> ContactNotificationTemplate<'a> {
    /// Creates a new `ContactNotificationTemplate` from a submission
    pub fn new(submission: &'a Submission) -> Self {
        Self {
            name: submission.name(),
            email: submission.email(),
            message: submission.message(),
        }
    }

    /// The subject line of the notification
    pub fn subject(&self) -> String {
        format!("New Contact Form Submission from {}", self.name)
    }

    /// Renders the plain text version of the email
    pub fn render_plain(&self) -> String {
        format!(
            "New Portfolio Message\n\
             -----------------------\n\
             From: {name} ({email})\n\
             Message:\n\
             {message}\n",
            name = self.name,
            email = self.email,
            message = self.message,
        )
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn submission() -> Submission {
        Submission::new("Ann", "ann@x.com", "Hi there").expect("valid submission")
    }

    #[test]
    fn test_notification_subject() {
        let submission = submission();
        let template = ContactNotificationTemplate::new(&submission);

        assert_eq!(template.subject(), "New Contact Form Submission from Ann");
    }

    #[test]
    fn test_plain_body_contains_all_fields() {
        let submission = submission();
        let plain = ContactNotificationTemplate::new(&submission).render_plain();

        assert!(plain.contains("From: Ann (ann@x.com)"));
        assert!(plain.contains("Hi there"));
    }

    #[test]
    fn test_html_body_contains_all_fields() -> TestResult {
        let submission = submission();
        let html = ContactNotificationTemplate::new(&submission).render()?;

        assert!(html.contains("Ann"));
        assert!(html.contains("ann@x.com"));
        assert!(html.contains("Hi there"));

        Ok(())
    }

    #[test]
    fn test_html_body_escapes_markup_in_fields() -> TestResult {
        let submission = Submission::new(
            "<script>alert('x')</script>",
            "ann@x.com",
            "a & b < c",
        )
        .expect("valid submission");

        let html = ContactNotificationTemplate::new(&submission).render()?;

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b &lt; c"));

        Ok(())
    }
}
