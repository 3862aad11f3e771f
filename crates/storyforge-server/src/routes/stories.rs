use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use storyforge_core::StoryEntry;
use storyforge_prompts::{stories, test_code, title};

use super::{input_error, service_failure, AppState};
use crate::templates;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stories", get(show_stories).post(generate_stories))
        .route("/stories/tests", post(generate_tests))
}

#[derive(Deserialize)]
struct FeatureForm {
    #[serde(default)]
    feature: String,
}

#[derive(Deserialize)]
struct ShowQuery {
    id: Option<String>,
}

#[derive(Deserialize)]
struct IdForm {
    #[serde(default)]
    id: String,
}

/// POST /stories: generate (or re-serve) stories and a title for a feature.
async fn generate_stories(
    State(state): State<AppState>,
    Form(form): Form<FeatureForm>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let feature = form.feature.trim().to_string();
    if feature.is_empty() {
        return Err(input_error(
            "Please describe the feature you want stories for.",
        ));
    }

    let id = (state.derive_key)(&feature);
    if let Some(entry) = state
        .store
        .get_stories(&id)
        .await
        .map_err(|e| service_failure("stories cache read", &e))?
    {
        return Ok(Html(templates::stories_page(&entry, &id)));
    }

    let stories_html = state
        .client
        .complete(&stories::messages(&feature))
        .await
        .map_err(|e| service_failure("stories generation", &e))?;
    let story_title = state
        .client
        .complete(&title::messages(&feature))
        .await
        .map_err(|e| service_failure("title generation", &e))?;

    let entry = StoryEntry::new(feature, stories_html, story_title);
    state
        .store
        .put_stories(&id, entry.clone())
        .await
        .map_err(|e| service_failure("stories cache write", &e))?;

    Ok(Html(templates::stories_page(&entry, &id)))
}

/// GET /stories?id=…: re-render a previous result, or send the user home.
async fn show_stories(
    State(state): State<AppState>,
    Query(query): Query<ShowQuery>,
) -> Result<Response, (StatusCode, Html<String>)> {
    let Some(id) = query.id else {
        return Ok(Redirect::to("/").into_response());
    };
    match state
        .store
        .get_stories(&id)
        .await
        .map_err(|e| service_failure("stories cache read", &e))?
    {
        Some(entry) => Ok(Html(templates::stories_page(&entry, &id)).into_response()),
        None => Ok(Redirect::to("/").into_response()),
    }
}

/// POST /stories/tests: generate test code from a previous stories result.
///
/// The second stage of the two-stage fill-in: it reads the stories markup
/// stored under the id and attaches the generated test markup to the same
/// entry, so repeat requests are served from the cache.
async fn generate_tests(
    State(state): State<AppState>,
    Form(form): Form<IdForm>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let entry = state
        .store
        .get_stories(&form.id)
        .await
        .map_err(|e| service_failure("stories cache read", &e))?;
    let Some(entry) = entry else {
        return Err(input_error(
            "Cannot find the stories for these tests. Please start again from a feature.",
        ));
    };

    if let Some(test_html) = entry.test_html {
        return Ok(Html(templates::tests_page(&test_html, &form.id)));
    }

    let test_html = state
        .client
        .complete(&test_code::messages(&entry.stories_html))
        .await
        .map_err(|e| service_failure("test generation", &e))?;
    state
        .store
        .attach_tests(&form.id, test_html.clone())
        .await
        .map_err(|e| service_failure("tests cache write", &e))?;

    Ok(Html(templates::tests_page(&test_html, &form.id)))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    use crate::test_helpers::{test_router, test_router_with_key, StubClient};

    async fn send_form(app: &Router, uri: &str, body: impl Into<String>) -> (StatusCode, String) {
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.into()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, String, Option<String>) {
        let resp = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let location = resp
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap(), location)
    }

    #[tokio::test]
    async fn generate_returns_markup_and_id() {
        let client = StubClient::new("<p>A</p>", "https://img.example/a.png");
        let app = test_router(client.clone());

        let (status, page) = send_form(&app, "/stories", "feature=login+button").await;
        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("<p>A</p>"));

        let id = storyforge_core::default_key("login button");
        assert!(page.contains(&id));
        // One stories call plus one title call.
        assert_eq!(client.chat_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn repeat_submission_is_served_from_cache() {
        let client = StubClient::new("<p>A</p>", "https://img.example/a.png");
        let app = test_router(client.clone());

        let (_, first) = send_form(&app, "/stories", "feature=login+button").await;
        let (_, second) = send_form(&app, "/stories", "feature=login+button").await;
        assert_eq!(first, second);
        assert_eq!(client.chat_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn empty_feature_is_rejected_without_external_call() {
        let client = StubClient::new("<p>A</p>", "https://img.example/a.png");
        let app = test_router(client.clone());

        let (status, page) = send_form(&app, "/stories", "feature=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(page.contains("describe the feature"));
        assert_eq!(client.chat_calls.load(Ordering::SeqCst), 0);

        let (status, _) = send_form(&app, "/stories", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(client.chat_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn show_by_id_reuses_cache_without_new_call() {
        let client = StubClient::new("<p>A</p>", "https://img.example/a.png");
        let app = test_router(client.clone());

        send_form(&app, "/stories", "feature=login+button").await;
        let calls_after_post = client.chat_calls.load(Ordering::SeqCst);

        let id = storyforge_core::default_key("login button");
        let (status, page, _) = get(&app, &format!("/stories?id={id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("<p>A</p>"));
        assert_eq!(client.chat_calls.load(Ordering::SeqCst), calls_after_post);
    }

    #[tokio::test]
    async fn show_with_unknown_id_redirects_home() {
        let app = test_router(StubClient::new("<p>A</p>", "https://img.example/a.png"));
        let (status, _, location) = get(&app, "/stories?id=doesnotexist").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn show_without_id_redirects_home() {
        let app = test_router(StubClient::new("<p>A</p>", "https://img.example/a.png"));
        let (status, _, location) = get(&app, "/stories").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn tests_with_unknown_id_errors_without_external_call() {
        let client = StubClient::new("<p>A</p>", "https://img.example/a.png");
        let app = test_router(client.clone());

        let (status, page) = send_form(&app, "/stories/tests", "id=unknown").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(page.contains("Cannot find the stories"));
        assert_eq!(client.chat_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn repeat_tests_request_is_served_from_cache() {
        let client = StubClient::new("<h2>Scenario</h2>", "https://img.example/a.png");
        let app = test_router(client.clone());

        send_form(&app, "/stories", "feature=login+button").await;
        assert_eq!(client.chat_calls.load(Ordering::SeqCst), 2);

        let id = storyforge_core::default_key("login button");
        let body = format!("id={id}");
        let (status, first) = send_form(&app, "/stories/tests", body.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(first.contains("<h2>Scenario</h2>"));
        assert_eq!(client.chat_calls.load(Ordering::SeqCst), 3);

        let (_, second) = send_form(&app, "/stories/tests", body).await;
        assert_eq!(first, second);
        assert_eq!(client.chat_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn colliding_keys_reuse_the_first_entry() {
        // A key function that maps every feature to one key: the second,
        // different feature is served the first feature's cached stories.
        let client = StubClient::new("<p>A</p>", "https://img.example/a.png");
        let app = test_router_with_key(client.clone(), Arc::new(|_: &str| "fixed".to_string()));

        let (_, first) = send_form(&app, "/stories", "feature=feature+one").await;
        assert!(first.contains("feature one"));

        let (_, second) = send_form(&app, "/stories", "feature=feature+two").await;
        assert!(second.contains("feature one"));
        assert!(!second.contains("feature two"));
        assert_eq!(client.chat_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn service_failure_surfaces_as_server_error() {
        let client = StubClient::failing();
        let app = test_router(client.clone());

        let (status, page) = send_form(&app, "/stories", "feature=login+button").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(page.contains("Something went wrong"));
        // Exactly one attempt, no retries.
        assert_eq!(client.chat_calls.load(Ordering::SeqCst), 1);
    }
}
