//! Homepage handler

use askama::Template;

/// The homepage view
#[derive(Debug, Template)]
#[template(path = "index.html")]
pub struct HomePageTemplate;

/// Render the homepage
///
/// Any non-POST request on the root path lands here; the handler never
/// inspects form fields.
#[utoipa::path(
    get,
    operation_id = "homepage",
    tag = "Pages",
    path = "/",
    responses(
        (status = StatusCode::OK, description = "The homepage"),
    )
)]
pub async fn handler() -> HomePageTemplate {
    HomePageTemplate
}
