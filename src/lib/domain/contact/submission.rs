//! Contact form submission

use crate::domain::contact::errors::SubmissionError;

/// A validated contact form submission
///
/// Exists only for the duration of one request; nothing is persisted.
/// The submitter's email is kept as free text since it is only ever
/// interpolated into the notification bodies, never used as an envelope
/// address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    name: String,
    email: String,
    message: String,
}

impl Submission {
    /// Create a new submission, requiring all three fields to be non-empty
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, SubmissionError> {
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(SubmissionError::MissingFields);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    /// The submitter's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The submitter's email address, as entered
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The message body
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_valid_submission() -> TestResult {
        let submission = Submission::new("Ann", "ann@x.com", "Hi")?;

        assert_eq!(submission.name(), "Ann");
        assert_eq!(submission.email(), "ann@x.com");
        assert_eq!(submission.message(), "Hi");

        Ok(())
    }

    #[test]
    fn test_each_field_is_required() {
        for (name, email, message) in [
            ("", "ann@x.com", "Hi"),
            ("Ann", "", "Hi"),
            ("Ann", "ann@x.com", ""),
            ("", "", ""),
        ] {
            let result = Submission::new(name, email, message);

            assert!(matches!(
                result.unwrap_err(),
                SubmissionError::MissingFields
            ));
        }
    }

    #[test]
    fn test_submitter_email_format_is_not_validated() -> TestResult {
        let submission = Submission::new("Ann", "not an email", "Hi")?;

        assert_eq!(submission.email(), "not an email");

        Ok(())
    }
}
