//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the static pages, the server-rendered registration form,
//! and the JSON registration API under a single Axum router. Unmatched paths
//! fall through to `pages::fallback`, which canonicalizes trailing slashes
//! and otherwise renders a 404 page.

pub mod pages;
pub mod registration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::pages::StaticPage;
use crate::state::AppState;

/// JSON API over the shared registration form.
fn api_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/registrations",
            get(registration::list_submissions).post(registration::submit_json),
        )
        .route(
            "/api/registrations/draft",
            get(registration::get_draft).patch(registration::update_draft),
        )
        .layer(cors)
}

/// Full application: static pages, registration form, API, health check.
pub fn app(state: AppState) -> Router {
    let mut router = Router::new();
    for page in StaticPage::ALL {
        router = router.route(page.path(), get(move || pages::static_page(page)));
    }

    router
        .route("/register", get(registration::show_form).post(registration::submit_form))
        .route("/register/clear", post(registration::clear_form))
        .route("/healthz", get(healthz))
        .merge(api_routes())
        .fallback(pages::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
