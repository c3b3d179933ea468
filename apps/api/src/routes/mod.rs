pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Interview API
        .route("/start", post(handlers::handle_start))
        .route("/answer", post(handlers::handle_answer))
        .route("/finish", post(handlers::handle_finish))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::interview::coaching::{METRICS_ADVICE, TRADE_OFF_ADVICE};
    use crate::interview::service::InterviewService;
    use crate::interview::store::InMemorySessionStore;

    fn app_with(strict_validation: bool) -> Router {
        let mut config = Config::from_lookup(|_| None).unwrap();
        config.strict_validation = strict_validation;
        build_router(AppState {
            config,
            interviews: Arc::new(InterviewService::new(Arc::new(InMemorySessionStore::new()))),
        })
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(b.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn start(app: &Router, role: &str) -> (String, String) {
        let (status, body) = send(
            app,
            "POST",
            "/start",
            Some(json!({"resumeText": "Built payment systems", "role": role})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        (
            body["sessionId"].as_str().unwrap().to_string(),
            body["question"].as_str().unwrap().to_string(),
        )
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_with(false);
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["sessionStore"], "memory");
    }

    #[tokio::test]
    async fn test_full_scenario_over_http() {
        let app = app_with(false);
        let (session_id, question) = start(&app, "Backend Engineer").await;
        assert!(question.contains("Backend Engineer"));

        let (status, body) = send(
            &app,
            "POST",
            "/answer",
            Some(json!({"sessionId": session_id, "answer": "I improved latency by 30%"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let coaching = body["coaching"].as_str().unwrap();
        assert!(!coaching.contains(METRICS_ADVICE));
        assert!(coaching.contains(TRADE_OFF_ADVICE));
        assert!(body["nextQuestion"].is_string());
        assert_eq!(body["partialScore"]["depth"], 1);

        for n in 2..=4 {
            let (status, body) = send(
                &app,
                "POST",
                "/answer",
                Some(json!({"sessionId": session_id, "answer": "We split the monolith"})),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["partialScore"]["depth"], n);
            assert_eq!(body["nextQuestion"].is_null(), n == 4, "answer {n}");
        }

        let (status, body) = send(
            &app,
            "POST",
            "/finish",
            Some(json!({"sessionId": session_id})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["finalScore"]["depth"], 4);
        assert_eq!(body["finalScore"]["star"], 3);
        assert_eq!(body["transcript"].as_array().unwrap().len(), 4);
        assert_eq!(body["transcript"][0]["a"], "I improved latency by 30%");

        let (status, body) = send(
            &app,
            "POST",
            "/finish",
            Some(json!({"sessionId": session_id})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, _) = send(
            &app,
            "POST",
            "/answer",
            Some(json!({"sessionId": session_id, "answer": "late"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_finish_accepts_query_param() {
        let app = app_with(false);
        let (session_id, _) = start(&app, "SRE").await;
        let (status, body) = send(
            &app,
            "POST",
            &format!("/finish?sessionId={session_id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["finalScore"]["depth"], 1);
    }

    #[tokio::test]
    async fn test_finish_without_session_id_is_bad_request() {
        let app = app_with(false);
        let (status, body) = send(&app, "POST", "/finish", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_session_is_404() {
        let app = app_with(false);
        let (status, body) = send(
            &app,
            "POST",
            "/answer",
            Some(json!({"sessionId": "does-not-exist", "answer": "hi"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Invalid sessionId");
    }

    #[tokio::test]
    async fn test_permissive_mode_accepts_empty_inputs() {
        let app = app_with(false);
        let (session_id, _) = start(&app, "").await;
        let (status, body) = send(
            &app,
            "POST",
            "/answer",
            Some(json!({"sessionId": session_id, "answer": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["coaching"],
            format!("{METRICS_ADVICE} {TRADE_OFF_ADVICE}")
        );
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_blank_role_and_bad_ids() {
        let app = app_with(true);
        let (status, _) = send(
            &app,
            "POST",
            "/start",
            Some(json!({"resumeText": "", "role": "  "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            "POST",
            "/answer",
            Some(json!({"sessionId": "not-a-uuid", "answer": "hi"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "POST", "/finish?sessionId=not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        // A well-formed but unknown id still reaches the state machine.
        let (status, _) = send(
            &app,
            "POST",
            "/finish",
            Some(json!({"sessionId": uuid::Uuid::new_v4().to_string()})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_start_with_explicit_tone() {
        let app = app_with(false);
        let (status, body) = send(
            &app,
            "POST",
            "/start",
            Some(json!({"resumeText": "cv", "role": "QA", "tone": "direct"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["question"].as_str().unwrap().starts_with("QA:"));
    }
}
