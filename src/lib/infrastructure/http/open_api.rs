//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::StatusResponse, handlers::*};

#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Portfolio Contact"),
    paths(homepage::handler, contact::handler),
    components(schemas(contact::ContactForm, StatusResponse))
)]
pub struct ApiDocs;
