//! Server-rendered dashboard page. All live data comes from the JSON API;
//! the template only carries static chrome and the script that drives it.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardPage<'a> {
    version: &'a str,
}

pub async fn page() -> impl IntoResponse {
    let page = DashboardPage {
        version: env!("CARGO_PKG_VERSION"),
    };
    match page.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to render dashboard");
            (StatusCode::INTERNAL_SERVER_ERROR, "template error").into_response()
        }
    }
}
