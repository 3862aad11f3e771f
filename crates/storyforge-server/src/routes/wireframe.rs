use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::post;
use axum::{Form, Router};
use serde::Deserialize;
use storyforge_core::WireframeEntry;
use storyforge_prompts::wireframe;

use super::{input_error, service_failure, AppState};
use crate::templates;

pub fn routes() -> Router<AppState> {
    Router::new().route("/wireframe", post(generate_wireframe))
}

#[derive(Deserialize)]
struct FeatureForm {
    #[serde(default)]
    feature: String,
}

/// POST /wireframe: generate (or re-serve) a wireframe image for a feature.
///
/// Cached independently of the stories flow, under the same key derivation.
async fn generate_wireframe(
    State(state): State<AppState>,
    Form(form): Form<FeatureForm>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let feature = form.feature.trim().to_string();
    if feature.is_empty() {
        return Err(input_error(
            "Please describe the feature you want a wireframe for.",
        ));
    }

    let id = (state.derive_key)(&feature);
    if let Some(entry) = state
        .store
        .get_wireframe(&id)
        .await
        .map_err(|e| service_failure("wireframe cache read", &e))?
    {
        return Ok(Html(templates::wireframe_page(&entry.feature, &entry.image_url)));
    }

    let image_url = state
        .client
        .generate_image(&wireframe::prompt(&feature))
        .await
        .map_err(|e| service_failure("wireframe generation", &e))?;

    let entry = WireframeEntry {
        feature,
        image_url,
    };
    state
        .store
        .put_wireframe(&id, entry.clone())
        .await
        .map_err(|e| service_failure("wireframe cache write", &e))?;

    Ok(Html(templates::wireframe_page(&entry.feature, &entry.image_url)))
}
