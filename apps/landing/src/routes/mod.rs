pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::search::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/search", post(handlers::handle_search))
        .route("/api/skills", get(handlers::handle_skills))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{self, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::json;
    use tower::util::ServiceExt;

    use super::*;
    use crate::models::skill::SkillDescriptor;
    use crate::render::RenderOptions;
    use crate::search::controller::tests::FakeBackend;

    fn app(backend: FakeBackend) -> Router {
        build_router(AppState {
            backend: Arc::new(backend),
            render_options: RenderOptions::default(),
        })
    }

    fn search_request(query: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/search")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "query": query }).to_string()))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_ok() {
        let response = app(FakeBackend::failing())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "landing");
    }

    #[tokio::test]
    async fn test_search_returns_report_fragment() {
        let backend = FakeBackend::ok(json!({
            "latency_ms": 300,
            "parsed": {"price": 2500000, "sf": 45000, "confidence": 0.75, "method": "llm"},
            "skills": {}
        }));
        let response = app(backend).oneshot(search_request("45k sf under 2.5M")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let html = body_text(response).await;
        assert!(html.contains("<span>Confidence: 75%</span>"));
        assert!(html.contains(r#"<span class="tag">45K SF</span><span class="tag">$2.5M</span>"#));
        assert!(html.contains("19 skills available"));
        assert!(!html.contains("Searching 6 subsystems"));
    }

    #[tokio::test]
    async fn test_search_router_failure_returns_error_fragment() {
        let response = app(FakeBackend::failing())
            .oneshot(search_request("anything"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(body_text(response).await.contains("Error: "));
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected() {
        let response = app(FakeBackend::ok(json!({})))
            .oneshot(search_request("   "))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_skills_fragment() {
        let mut backend = FakeBackend::ok(json!({}));
        backend.skills = Some(vec![SkillDescriptor {
            name: Some("cap_rate_model".into()),
            version: Some("3.0".into()),
            ..Default::default()
        }]);
        let response = app(backend)
            .oneshot(Request::builder().uri("/api/skills").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<h4>cap rate model</h4>"));
        assert!(html.contains("v3.0"));
    }
}
