pub mod home;
pub mod stories;
pub mod wireframe;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Html;
use axum::Router;
use storyforge_client::CompletionClient;
use storyforge_core::KeyFn;
use storyforge_store::ResponseStore;

use crate::templates;

pub struct InnerAppState {
    pub client: Arc<dyn CompletionClient>,
    pub store: Arc<dyn ResponseStore>,
    /// Derives the cache key (and client-visible id) from feature text.
    pub derive_key: KeyFn,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(home::routes())
        .merge(stories::routes())
        .merge(wireframe::routes())
        .with_state(state)
}

/// An input error the user can fix: render a descriptive page, never fatal.
pub(crate) fn input_error(message: &str) -> (StatusCode, Html<String>) {
    (StatusCode::BAD_REQUEST, Html(templates::error_page(message)))
}

/// An external-service or store failure: log it, surface a generic page.
/// Never masked as success and never retried.
pub(crate) fn service_failure(
    context: &str,
    err: &dyn std::fmt::Display,
) -> (StatusCode, Html<String>) {
    tracing::error!("{context}: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(templates::error_page(
            "Something went wrong while generating a response. Please try again.",
        )),
    )
}
