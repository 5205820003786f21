//! Contact form submission handler

use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::contact::{service::ContactService, submission::Submission},
    infrastructure::http::{
        errors::{ApiError, StatusResponse},
        state::AppState,
    },
};

/// Contact form request body
///
/// Absent fields default to empty strings so a missing field and an empty
/// one produce the same validation failure.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactForm {
    /// The submitter's name
    #[schema(example = "Ann")]
    #[serde(default)]
    name: String,

    /// The submitter's email address
    #[schema(example = "ann@example.com")]
    #[serde(default)]
    email: String,

    /// The message body
    #[schema(example = "Hi! I'd like to get in touch.")]
    #[serde(default)]
    message: String,
}

impl TryFrom<ContactForm> for Submission {
    type Error = ApiError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        Ok(Submission::new(&form.name, &form.email, &form.message)?)
    }
}

/// Handle a contact form submission
#[utoipa::path(
    post,
    operation_id = "submit_contact_form",
    tag = "Pages",
    path = "/",
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = StatusCode::OK, description = "Notification sent", body = StatusResponse),
        (status = StatusCode::BAD_REQUEST, description = "Missing fields", body = StatusResponse, example = json!({"status": "error", "message": "Please fill out all fields."})),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Delivery failed", body = StatusResponse),
    )
)]
pub async fn handler<C: ContactService>(
    State(state): State<AppState<C>>,
    request: Result<Form<ContactForm>, FormRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Form(form) = request?;

    let submission: Submission = form.try_into()?;

    state.contacts.send_notification(&submission).await?;

    Ok(Json(StatusResponse::success("Message sent successfully!")))
}
