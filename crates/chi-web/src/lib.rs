//! CHI Web Server
//!
//! Axum-based HTTP API for the Culture Heat Index service.

pub mod auth;
pub mod error;
pub mod routes;
pub mod state;

use axum::{
    http::Method,
    middleware,
    routing::{get, post},
    Router,
};
use chi_openai::ChatClient;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/chi/report", post(routes::report::create_report))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::health::index))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(client: ChatClient, host: &str, port: u16) -> anyhow::Result<()> {
    let public_token = std::env::var("PUBLIC_TOKEN")
        .ok()
        .filter(|token| !token.is_empty());
    if public_token.is_some() {
        tracing::info!("bearer-token guard enabled for /api routes");
    }

    let state = AppState::new(client, public_token);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    tracing::info!("API listening on http://{host}:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Json;
    use serde_json::{json, Value};
    use tokio::net::TcpListener;
    use tower::ServiceExt;

    /// Router wired to the given upstream, with an optional guard token.
    fn test_router(base_url: &str, public_token: Option<&str>) -> Router {
        let client = ChatClient::new(base_url, "test-model", "test-key");
        create_router(AppState::new(client, public_token.map(str::to_string)))
    }

    /// Serve one canned completion response on a random local port.
    async fn spawn_upstream(status: StatusCode, body: Value) -> String {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(move || {
                let body = body.clone();
                async move { (status, Json(body)) }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }

    fn report_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chi/report")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // Dead port: tests that must not reach upstream fail loudly (500)
    // if they ever do.
    const NO_UPSTREAM: &str = "http://127.0.0.1:9";

    #[tokio::test]
    async fn test_liveness() {
        let app = test_router(NO_UPSTREAM, None);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Culture Heat Index API running");
    }

    #[tokio::test]
    async fn test_missing_brand_is_rejected() {
        let app = test_router(NO_UPSTREAM, None);

        let response = app.oneshot(report_request("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "brand required");
    }

    #[tokio::test]
    async fn test_empty_and_blank_brands_are_rejected() {
        for body in [r#"{"brand":""}"#, r#"{"brand":"   "}"#, r#"{"brand":null}"#] {
            let app = test_router(NO_UPSTREAM, None);
            let response = app.oneshot(report_request(body)).await.unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(json_body(response).await["error"], "brand required");
        }
    }

    #[tokio::test]
    async fn test_unreadable_body_is_rejected_with_the_same_shape() {
        let app = test_router(NO_UPSTREAM, None);

        let response = app.oneshot(report_request("not json at all")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "brand required");
    }

    #[tokio::test]
    async fn test_report_round_trip() {
        let content = json!({
            "brand": "Nike",
            "overallScore": 88,
            "momentum": [
                {"label": "Search volume", "delta": "+15% QoQ"},
                {"label": "Social engagement", "delta": "-5%"},
                {"label": "News sentiment", "delta": "Flat"}
            ]
        })
        .to_string();
        let upstream = spawn_upstream(
            StatusCode::OK,
            json!({"choices": [{"message": {"role": "assistant", "content": content}}]}),
        )
        .await;

        let app = test_router(&upstream, None);
        let response = app
            .oneshot(report_request(r#"{"brand":"nike"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["brand"], "Nike");
        assert_eq!(body["overallScore"].as_f64(), Some(88.0));
        assert_eq!(body["momentumAvg"].as_f64(), Some(3.3));
        assert_eq!(body["confidence"], "Medium");
        assert_eq!(body["sources"], json!([]));
        assert_eq!(body["competitive"], json!([]));
    }

    #[tokio::test]
    async fn test_prose_reply_still_yields_a_report() {
        let upstream = spawn_upstream(
            StatusCode::OK,
            json!({"choices": [{"message": {"content": "I cannot answer in JSON today."}}]}),
        )
        .await;

        let app = test_router(&upstream, None);
        let response = app
            .oneshot(report_request(r#"{"brand":"Acme"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["brand"], "Acme");
        assert!(body["overallScore"].is_null());
        assert_eq!(body["momentumAvg"].as_f64(), Some(0.0));
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_500() {
        let upstream = spawn_upstream(
            StatusCode::TOO_MANY_REQUESTS,
            json!({"error": {"message": "quota exceeded"}}),
        )
        .await;

        let app = test_router(&upstream, None);
        let response = app
            .oneshot(report_request(r#"{"brand":"Nike"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"], "upstream_error");
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.contains("429"), "detail: {detail}");
    }

    #[tokio::test]
    async fn test_guard_rejects_missing_or_wrong_token() {
        let app = test_router(NO_UPSTREAM, Some("sesame"));
        let response = app
            .oneshot(report_request(r#"{"brand":"Nike"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(response).await["error"], "unauthorized");

        let app = test_router(NO_UPSTREAM, Some("sesame"));
        let mut request = report_request(r#"{"brand":"Nike"}"#);
        request
            .headers_mut()
            .insert("authorization", "Bearer wrong".parse().unwrap());
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_guard_passes_matching_token_through() {
        let upstream = spawn_upstream(
            StatusCode::OK,
            json!({"choices": [{"message": {"content": "{}"}}]}),
        )
        .await;

        let app = test_router(&upstream, Some("sesame"));
        let mut request = report_request(r#"{"brand":"Nike"}"#);
        request
            .headers_mut()
            .insert("authorization", "Bearer sesame".parse().unwrap());
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["brand"], "Nike");
    }

    #[tokio::test]
    async fn test_guard_leaves_liveness_open() {
        let app = test_router(NO_UPSTREAM, Some("sesame"));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
