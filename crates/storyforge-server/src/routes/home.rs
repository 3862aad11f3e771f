use axum::response::Html;
use axum::routing::get;
use axum::Router;

use super::AppState;
use crate::templates;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

async fn home() -> Html<String> {
    Html(templates::form_page())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::test_helpers::{test_router, StubClient};

    #[tokio::test]
    async fn home_renders_form() {
        let app = test_router(StubClient::new("<p>A</p>", "https://img.example/a.png"));
        let resp = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("name=\"feature\""));
        assert!(page.contains("action=\"/stories\""));
        assert!(page.contains("action=\"/wireframe\""));
    }
}
