//! HTTP-level tests for the lexcheck API router.
//!
//! Requests are driven through the router with `oneshot`; upstream model and
//! EUR-Lex endpoints are mocked with wiremock.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use lexcheck_ai::{AiError, Analyzer, ChatModel, OpenAiClient};
use lexcheck_core::LawCorpus;
use lexcheck_server::{AppState, build_router};
use lexcheck_sync::EurLexClient;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Nothing listens here; used when a test must not reach EUR-Lex.
const UNUSED_ENDPOINT: &str = "http://127.0.0.1:9/sparql";

// ── Helpers ─────────────────────────────────────────────────────

fn state_with(analyzer: Analyzer, eurlex_endpoint: &str) -> AppState {
    AppState::new(
        LawCorpus::bundled().expect("bundled corpus parses"),
        analyzer,
        EurLexClient::new(eurlex_endpoint),
    )
}

fn simulated_app() -> Router {
    build_router(state_with(Analyzer::simulated(), UNUSED_ENDPOINT))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or_else(
        |_| json!({ "raw": String::from_utf8_lossy(&bytes).to_string() }),
    );
    (status, body)
}

/// Chat model whose completion panics, to exercise the 500 boundary.
struct PanickingModel;

#[async_trait]
impl ChatModel for PanickingModel {
    async fn complete(&self, _prompt: &str) -> Result<String, AiError> {
        panic!("model client exploded");
    }

    fn model_name(&self) -> &str {
        "panicking"
    }

    fn provider_name(&self) -> &'static str {
        "Test"
    }
}

// ── GET /api/check, /health ─────────────────────────────────────

#[tokio::test]
async fn status_descriptor() {
    let (status, body) = send(simulated_app(), get("/api/check")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");
    assert_eq!(body["version"], "2.0");
    assert_eq!(
        body["features"],
        json!(["basic_analysis", "ai_analysis", "risk_assessment"])
    );
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn health_reports_corpus_size() {
    let expected = LawCorpus::bundled().unwrap().len();
    let (status, body) = send(simulated_app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["laws"], expected);
}

// ── POST /api/check: validation ─────────────────────────────────

#[tokio::test]
async fn short_proposal_is_rejected_for_any_jurisdiction() {
    for jurisdiction in ["EU", "BE", "XX"] {
        let (status, body) = send(
            simulated_app(),
            post_json(
                "/api/check",
                json!({"proposal": "Too short", "jurisdiction": jurisdiction}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "jurisdiction {jurisdiction}");
        assert_eq!(body["error"], "Proposal too short.");
    }
}

#[tokio::test]
async fn invalid_jurisdiction_is_rejected() {
    for jurisdiction in ["FR", "eu", "Belgium"] {
        let (status, body) = send(
            simulated_app(),
            post_json(
                "/api/check",
                json!({"proposal": "Introduce a four-day week", "jurisdiction": jurisdiction}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid jurisdiction.");
        assert!(body["details"].is_string());
    }
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    for payload in [
        json!({"jurisdiction": "EU"}),
        json!({"proposal": "Introduce a four-day week"}),
        json!({"proposal": "", "jurisdiction": "EU"}),
        json!({}),
    ] {
        let (status, body) = send(simulated_app(), post_json("/api/check", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Proposal and jurisdiction are required.");
    }
}

#[tokio::test]
async fn unreadable_body_is_rejected() {
    let req = Request::builder()
        .method("POST")
        .uri("/api/check")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(simulated_app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body.");
}

// ── POST /api/check: results ────────────────────────────────────

#[tokio::test]
async fn clean_proposal_is_low_risk() {
    let (status, body) = send(
        simulated_app(),
        post_json(
            "/api/check",
            json!({"proposal": "Zzyzx qwop blorf", "jurisdiction": "BE"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overallRisk"], "LOW");
    assert_eq!(body["hasViolations"], false);
    assert_eq!(body["confidencePercentage"], 60);
    assert_eq!(body["riskColor"], "bg-green-100 text-green-800 border-green-200");
    assert_eq!(body["analysisSource"], "simulator");
    assert_eq!(body["jurisdiction"], "BE");
    assert_eq!(body["proposalLength"], 16);
    assert_eq!(body["basicViolations"], json!([]));
    assert!(body["timestamp"].is_string());
    assert!(body["lastUpdated"].is_string());
}

#[tokio::test]
async fn corpus_match_is_high_risk() {
    let (status, body) = send(
        simulated_app(),
        post_json(
            "/api/check",
            json!({"proposal": "Ban discrimination in hiring", "jurisdiction": "EU"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overallRisk"], "HIGH");
    assert_eq!(body["hasViolations"], true);
    let violations = body["basicViolations"].as_array().unwrap();
    assert!(!violations.is_empty());
    assert!(violations.iter().all(|law| law["jurisdiction"] == "EU"));
    assert!(
        body["aiAnalysis"]["contradictions"][0]
            .as_str()
            .unwrap()
            .contains("anti-discrimination")
    );
}

#[tokio::test]
async fn model_reply_is_used_when_available() {
    let server = MockServer::start().await;
    let analysis = json!({
        "contradictions": ["Conflicts with Article 21 of the Charter"],
        "risks": ["High: unequal treatment"],
        "confidence": 0.72,
        "recommendations": ["Remove the nationality criterion"],
        "legalSources": ["Charter of Fundamental Rights, Art. 21"],
        "summary": "One contradiction."
    });
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": analysis.to_string()}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let model = OpenAiClient::new("test-key").with_base_url(server.uri());
    let app = build_router(state_with(Analyzer::new(Arc::new(model)), UNUSED_ENDPOINT));
    let (status, body) = send(
        app,
        post_json(
            "/api/check",
            json!({"proposal": "Zzyzx qwop blorf", "jurisdiction": "BE"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysisSource"], "model");
    assert_eq!(body["aiAnalysis"], analysis);
    assert_eq!(body["overallRisk"], "MEDIUM");
    assert_eq!(body["confidencePercentage"], 72);
}

#[tokio::test]
async fn model_failure_falls_back_to_simulator() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let model = OpenAiClient::new("test-key").with_base_url(server.uri());
    let app = build_router(state_with(Analyzer::new(Arc::new(model)), UNUSED_ENDPOINT));
    let (status, body) = send(
        app,
        post_json(
            "/api/check",
            json!({"proposal": "Zzyzx qwop blorf", "jurisdiction": "BE"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysisSource"], "simulator");
    assert_eq!(body["overallRisk"], "LOW");
}

#[tokio::test]
async fn unexpected_failure_is_generic_500() {
    let app = build_router(state_with(
        Analyzer::new(Arc::new(PanickingModel)),
        UNUSED_ENDPOINT,
    ));
    let (status, body) = send(
        app,
        post_json(
            "/api/check",
            json!({"proposal": "Zzyzx qwop blorf", "jurisdiction": "EU"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["details"], "An error occurred during the analysis.");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn dev_mode_exposes_failure_detail() {
    let state = state_with(Analyzer::new(Arc::new(PanickingModel)), UNUSED_ENDPOINT)
        .with_dev_mode(true);
    let (status, body) = send(
        build_router(state),
        post_json(
            "/api/check",
            json!({"proposal": "Zzyzx qwop blorf", "jurisdiction": "EU"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["details"], "model client exploded");
}

// ── POST /api/search-eurlex ─────────────────────────────────────

#[tokio::test]
async fn eurlex_requires_keyword() {
    for payload in [json!({}), json!({"keyword": ""})] {
        let (status, body) =
            send(simulated_app(), post_json("/api/search-eurlex", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing keyword");
    }
}

#[tokio::test]
async fn eurlex_results_are_reshaped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": {"bindings": [{
                "title": {"value": "Artificial Intelligence Act"},
                "date": {"value": "2024-06-13"},
                "celex": {"value": "32024R1689"}
            }]}
        })))
        .mount(&server)
        .await;

    let app = build_router(state_with(Analyzer::simulated(), &server.uri()));
    let (status, body) = send(
        app,
        post_json("/api/search-eurlex", json!({"keyword": "intelligence"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["results"],
        json!([{
            "title": "Artificial Intelligence Act",
            "date": "2024-06-13",
            "celex": "32024R1689",
            "url": "https://eur-lex.europa.eu/legal-content/FR/TXT/?uri=CELEX:32024R1689"
        }])
    );
}

#[tokio::test]
async fn eurlex_upstream_failure_is_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let app = build_router(state_with(Analyzer::simulated(), &server.uri()));
    let (status, body) =
        send(app, post_json("/api/search-eurlex", json!({"keyword": "gdpr"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch from EUR-Lex");
}

// ── GET /api/legal-updates ──────────────────────────────────────

#[tokio::test]
async fn legal_updates_default_to_eu() {
    let (status, body) = send(simulated_app(), get("/api/legal-updates")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jurisdiction"], "EU");
    assert_eq!(body["updates"].as_array().unwrap().len(), 2);
    assert_eq!(body["updates"][0]["source"], "EUR-Lex");
}

#[tokio::test]
async fn legal_updates_for_belgium() {
    let (status, body) =
        send(simulated_app(), get("/api/legal-updates?jurisdiction=BE")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updates"][0]["source"], "Moniteur belge");
    assert_eq!(body["updates"][0]["impact"], "high");
}

#[tokio::test]
async fn legal_updates_reject_unknown_jurisdiction() {
    let (status, _) = send(simulated_app(), get("/api/legal-updates?jurisdiction=NL")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
