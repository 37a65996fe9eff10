//! Static page and fallback handlers.

use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::pages::{self, Page, StaticPage};

/// `GET /`, `/about`, `/contact`.
pub async fn static_page(page: StaticPage) -> Html<String> {
    Html(pages::static_pages::render(page))
}

/// Unmatched paths: redirect `/about/` style paths to their canonical form,
/// otherwise render the 404 page.
pub async fn fallback(uri: Uri) -> Response {
    let path = uri.path();
    match Page::from_path(path) {
        Some(page) if page.path() != path => Redirect::permanent(page.path()).into_response(),
        _ => {
            tracing::debug!(%path, "no page for path");
            (StatusCode::NOT_FOUND, Html(pages::static_pages::render_not_found(path))).into_response()
        }
    }
}
