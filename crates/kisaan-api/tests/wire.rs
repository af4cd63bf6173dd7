//! Requests as they reach a server.
//!
//! A `tiny_http` server on `127.0.0.1:0` answers scripted responses and
//! hands every request it saw back to the test.

use std::io::Read;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use kisaan_api::{ApiClient, ApiError};
use kisaan_core::enums::Language;
use pretty_assertions::assert_eq;
use tiny_http::{Header, Response, Server, StatusCode};

#[derive(Debug)]
struct Captured {
    method: String,
    url: String,
    content_type: Option<String>,
    body: String,
}

struct MockServer {
    base_url: String,
    requests: mpsc::Receiver<Captured>,
    handle: thread::JoinHandle<()>,
}

impl MockServer {
    /// Serve one scripted `(status, body)` per incoming request, then stop.
    fn start(responses: Vec<(u16, &'static str)>) -> Self {
        let server = Server::http("127.0.0.1:0").expect("http server");
        let base_url = format!("http://{}", server.server_addr());
        let (tx, requests) = mpsc::channel();

        let handle = thread::spawn(move || {
            for (status, body) in responses {
                let mut req = match server.recv_timeout(Duration::from_secs(5)) {
                    Ok(Some(req)) => req,
                    Ok(None) | Err(_) => break,
                };
                let content_type = req
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Content-Type"))
                    .map(|h| h.value.as_str().to_string());
                let mut request_body = String::new();
                let _ = req.as_reader().read_to_string(&mut request_body);
                let _ = tx.send(Captured {
                    method: req.method().to_string(),
                    url: req.url().to_string(),
                    content_type,
                    body: request_body,
                });

                let response = Response::from_string(body)
                    .with_status_code(StatusCode(status))
                    .with_header(
                        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                            .expect("content-type header"),
                    );
                let _ = req.respond(response);
            }
        });

        Self {
            base_url,
            requests,
            handle,
        }
    }

    fn client(&self) -> ApiClient {
        ApiClient::with_base_url(&self.base_url).expect("client builds")
    }

    fn finish(self) -> Vec<Captured> {
        self.handle.join().expect("server thread");
        self.requests.try_iter().collect()
    }
}

#[tokio::test]
async fn get_sends_json_content_type_and_language_query() {
    let server = MockServer::start(vec![(
        200,
        r#"[{"id":1,"title":"Drip irrigation","description":"d","category":"water","content":"c"}]"#,
    )]);

    let courses = server.client().get_courses(Language::Ur).await.expect("courses");
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].title, "Drip irrigation");

    let seen = server.finish();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, "GET");
    assert_eq!(seen[0].url, "/api/courses?language=ur");
    assert_eq!(seen[0].content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn absent_filters_never_reach_the_server() {
    let server = MockServer::start(vec![(200, "[]"), (200, "[]"), (200, "[]")]);
    let client = server.client();

    client.get_market_prices(None, None).await.expect("prices");
    client.get_weather_alerts(None, Language::En).await.expect("weather");
    client
        .get_pest_alerts(Some("Sindh"), Language::Ur)
        .await
        .expect("pests");

    let urls: Vec<String> = server.finish().into_iter().map(|c| c.url).collect();
    assert_eq!(
        urls,
        vec![
            "/api/market-prices".to_string(),
            "/api/weather-alerts?language=en".to_string(),
            "/api/pest-alerts?region=Sindh&language=ur".to_string(),
        ]
    );
}

#[tokio::test]
async fn forecast_crop_is_percent_encoded_in_the_path() {
    let server = MockServer::start(vec![(200, r#"{"trend":"increasing"}"#)]);

    server
        .client()
        .get_price_forecast("Basmati Rice", Some("Punjab"))
        .await
        .expect("forecast");

    let seen = server.finish();
    assert_eq!(
        seen[0].url,
        "/api/market-prices/forecast/Basmati%20Rice?region=Punjab"
    );
}

#[tokio::test]
async fn chat_posts_question_with_null_user_id() {
    let server = MockServer::start(vec![(200, r#"{"answer":"Sow in November.","language":"en"}"#)]);

    let answer = server
        .client()
        .send_chat_message("When to sow wheat?", None, Language::En)
        .await
        .expect("answer");
    assert_eq!(answer.answer, "Sow in November.");

    let seen = server.finish();
    assert_eq!(seen[0].method, "POST");
    assert_eq!(seen[0].url, "/api/chat");
    assert_eq!(seen[0].content_type.as_deref(), Some("application/json"));

    let body: serde_json::Value = serde_json::from_str(&seen[0].body).expect("json body");
    assert_eq!(
        body,
        serde_json::json!({
            "user_id": null,
            "question": "When to sow wheat?",
            "language": "en",
        })
    );
}

#[tokio::test]
async fn non_success_status_becomes_api_error_with_body() {
    let server = MockServer::start(vec![(500, r#"{"detail":"database unavailable"}"#)]);

    let error = server
        .client()
        .get_wiki_articles(None, Language::Ur)
        .await
        .expect_err("500 must fail");

    match error {
        ApiError::Api { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("database unavailable"), "{message}");
        }
        other => panic!("expected ApiError::Api, got {other:?}"),
    }
    assert_eq!(server.finish()[0].url, "/api/wiki?language=ur");
}

#[tokio::test]
async fn missing_user_is_not_found() {
    let server = MockServer::start(vec![(404, r#"{"detail":"User not found"}"#)]);

    let error = server.client().get_user(42).await.expect_err("404 must fail");
    assert!(error.is_not_found());
    assert_eq!(server.finish()[0].url, "/api/users/42");
}
