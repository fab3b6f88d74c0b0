//! Tests for the HTTP boundary
//!
//! Exercises the full request path: rate-limit middleware, JSON parsing,
//! dispatch, and the uniform envelope mapping for every outcome.

#[cfg(test)]
mod tests {
    use crate::config::{AiConfig, GatewayConfig, RateLimitConfig};
    use crate::core::ai::AiClient;
    use crate::core::rate_limiter::RateLimiter;
    use crate::server::server::HttpServer;
    use crate::server::state::AppState;
    use crate::utils::identity;
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use serde_json::{Value, json};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEST_EMAIL: &str = "ops@example.com";

    fn test_state(rpm: u32, ai_url: &str) -> web::Data<AppState> {
        identity::init_operator_email(TEST_EMAIL);

        let config = GatewayConfig {
            official_email: TEST_EMAIL.to_string(),
            rate_limit: RateLimitConfig {
                enabled: true,
                requests_per_minute: rpm,
                idle_ttl_secs: 600,
            },
            ai: AiConfig {
                api_url: ai_url.to_string(),
                api_key: "test-key".to_string(),
                request_timeout_secs: 5,
                connect_timeout_secs: 5,
                max_question_chars: 500,
            },
            ..GatewayConfig::default()
        };

        let limiter = RateLimiter::new(config.rate_limit.clone());
        let ai = AiClient::new(config.ai.clone()).unwrap();
        web::Data::new(AppState::new(config, limiter, ai))
    }

    /// Render a middleware rejection the way a running server would.
    ///
    /// Under the test harness a service-level error is returned as-is
    /// instead of being converted into a response.
    async fn rejection_response(err: actix_web::Error) -> (StatusCode, Value) {
        let resp = err.as_response_error().error_response();
        let status = resp.status();
        let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    /// Every non-health response must carry exactly the three envelope
    /// fields.
    fn assert_envelope(body: &Value, is_success: bool) {
        let object = body.as_object().expect("body is an object");
        assert_eq!(object.len(), 3, "unexpected envelope fields: {:?}", object);
        assert_eq!(body["is_success"], json!(is_success));
        assert_eq!(body["official_email"], json!(TEST_EMAIL));
        assert!(object.contains_key("data"));
    }

    #[actix_web::test]
    async fn test_process_math_operations() {
        let state = test_state(1000, "http://localhost:9/generate");
        let app = test::init_service(HttpServer::create_app(state)).await;

        let cases = [
            (json!({"fibonacci": 5}), json!([0, 1, 1, 2, 3])),
            (json!({"prime": [1, 2, 3, 4, 5, 17, 18]}), json!([2, 3, 5, 17])),
            (json!({"lcm": [4, 6]}), json!(12)),
            (json!({"hcf": [12, 18, 24]}), json!(6)),
        ];

        for (request, expected) in cases {
            let req = test::TestRequest::post()
                .uri("/process")
                .set_json(&request)
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::OK, "failed for {}", request);
            let body: Value = test::read_body_json(resp).await;
            assert_envelope(&body, true);
            assert_eq!(body["data"], expected);
        }
    }

    #[actix_web::test]
    async fn test_process_rejects_zero_keys() {
        let state = test_state(1000, "http://localhost:9/generate");
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/process")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_envelope(&body, false);
        assert!(
            body["data"]
                .as_str()
                .unwrap()
                .contains("exactly one key")
        );
    }

    #[actix_web::test]
    async fn test_process_rejects_multiple_keys() {
        let state = test_state(1000, "http://localhost:9/generate");
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/process")
            .set_json(json!({"fibonacci": 5, "prime": [2, 3]}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_envelope(&body, false);
        assert!(body["data"].as_str().unwrap().contains("2 were provided"));
    }

    #[actix_web::test]
    async fn test_process_rejects_bad_math_input() {
        let state = test_state(1000, "http://localhost:9/generate");
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/process")
            .set_json(json!({"fibonacci": -1}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_envelope(&body, false);
    }

    #[actix_web::test]
    async fn test_process_rejects_malformed_json() {
        let state = test_state(1000, "http://localhost:9/generate");
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/process")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not valid json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_envelope(&body, false);
        assert_eq!(body["data"], json!("Invalid JSON in request body"));
    }

    #[actix_web::test]
    async fn test_health() {
        let state = test_state(1000, "http://localhost:9/generate");
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(body["is_success"], json!(true));
        assert_eq!(body["official_email"], json!(TEST_EMAIL));
    }

    #[actix_web::test]
    async fn test_unknown_route_is_enveloped_404() {
        let state = test_state(1000, "http://localhost:9/generate");
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get().uri("/nope").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_envelope(&body, false);
        assert_eq!(body["data"], json!("Endpoint not found"));
    }

    #[actix_web::test]
    async fn test_wrong_method_is_enveloped_405() {
        let state = test_state(1000, "http://localhost:9/generate");
        let app = test::init_service(HttpServer::create_app(state)).await;

        for (req, method_name) in [
            (test::TestRequest::get().uri("/process").to_request(), "GET"),
            (test::TestRequest::post().uri("/health").to_request(), "POST"),
        ] {
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
            let body: Value = test::read_body_json(resp).await;
            assert_envelope(&body, false);
            assert!(body["data"].as_str().unwrap().contains(method_name));
        }
    }

    #[actix_web::test]
    async fn test_rate_limit_rejection() {
        let state = test_state(2, "http://localhost:9/generate");
        let app = test::init_service(HttpServer::create_app(state)).await;

        for _ in 0..2 {
            let req = test::TestRequest::get().uri("/health").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let req = test::TestRequest::get().uri("/health").to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();

        let (status, body) = rejection_response(err).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_envelope(&body, false);
        assert_eq!(
            body["data"],
            json!("Rate limit exceeded. Please try again later.")
        );
    }

    #[actix_web::test]
    async fn test_rate_limit_keys_clients_independently() {
        let state = test_state(1, "http://localhost:9/generate");
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header(("x-forwarded-for", "203.0.113.7"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        // Same client is now exhausted
        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header(("x-forwarded-for", "203.0.113.7"))
            .to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        let (status, _) = rejection_response(err).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

        // A different client is unaffected
        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header(("x-forwarded-for", "198.51.100.2"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_process_ai_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "Paris."}]}}]
            })))
            .mount(&mock_server)
            .await;

        let state = test_state(1000, &format!("{}/v1/generate", mock_server.uri()));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/process")
            .set_json(json!({"AI": "What is the capital of France?"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_envelope(&body, true);
        assert_eq!(body["data"], json!("Paris"));
    }

    #[actix_web::test]
    async fn test_process_ai_failure_is_enveloped_503() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let state = test_state(1000, &format!("{}/v1/generate", mock_server.uri()));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/process")
            .set_json(json!({"AI": "Anything?"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = test::read_body_json(resp).await;
        assert_envelope(&body, false);
    }

    #[actix_web::test]
    async fn test_process_empty_ai_question_is_400() {
        let state = test_state(1000, "http://localhost:9/generate");
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/process")
            .set_json(json!({"AI": "  "}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_envelope(&body, false);
    }
}
