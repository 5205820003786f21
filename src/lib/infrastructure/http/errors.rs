//! API error-handling module

use std::fmt;

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::contact::errors::{SendNotificationError, SubmissionError};

/// The JSON body returned by every submission response, success or error
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Either "success" or "error"
    #[schema(example = "error")]
    pub status: String,

    /// The outcome message
    #[schema(example = "Please fill out all fields.")]
    pub message: String,
}

impl StatusResponse {
    /// Create a success response body
    pub fn success(message: &str) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
        }
    }

    /// Create an error response body
    pub fn error(message: &str) -> Self {
        Self {
            status: "error".to_string(),
            message: message.to_string(),
        }
    }
}

/// An error raised in the API
#[derive(Debug)]
pub struct ApiError {
    /// The status code
    pub status: StatusCode,

    /// The error message
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Create a new bad request error
    pub fn new_400(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Create a new internal server error
    pub fn new_500(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(StatusResponse::error(&self.message))).into_response()
    }
}

impl From<SubmissionError> for ApiError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::MissingFields => ApiError::new_400("Please fill out all fields."),
        }
    }
}

impl From<SendNotificationError> for ApiError {
    fn from(err: SendNotificationError) -> Self {
        ApiError::new_500(&format!("An error occurred: {err}"))
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::new(rejection.status(), &rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use testresult::TestResult;

    use crate::domain::communication::errors::MailerError;

    use super::*;

    #[tokio::test]
    async fn test_error_response_body() -> TestResult {
        let error = ApiError::new_500("An error occurred: SMTP timeout");

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await?;

        assert_eq!(
            body,
            r#"{"status":"error","message":"An error occurred: SMTP timeout"}"#
        );

        Ok(())
    }

    #[test]
    fn test_api_error_from_submission_error() {
        let api_error = ApiError::from(SubmissionError::MissingFields);

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.message, "Please fill out all fields.");
    }

    #[test]
    fn test_api_error_embeds_delivery_failure_text() {
        let err = SendNotificationError::DeliveryError(MailerError::TransportError(anyhow!(
            "SMTP timeout"
        )));

        let api_error = ApiError::from(err);

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.message, "An error occurred: SMTP timeout");
    }
}
