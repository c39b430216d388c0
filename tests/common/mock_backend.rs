//! Mock prediction service for exercising the client and store.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use serde_json::json;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use flightcast::config::ApiConfig;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    /// Path including the query string, e.g. `/api/airports/search?q=rio`.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// A scripted response to return, in request order.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self {
            status: 200,
            body: br#"{"success": true, "data": [], "timestamp": "2024-05-01T00:00:00Z"}"#.to_vec(),
            delay_ms: 0,
        }
    }
}

impl MockResponse {
    /// Successful envelope around the given payload.
    pub fn envelope(data: serde_json::Value) -> Self {
        let body = json!({
            "success": true,
            "data": data,
            "timestamp": "2024-05-01T00:00:00Z",
        });
        Self {
            status: 200,
            body: body.to_string().into_bytes(),
            delay_ms: 0,
        }
    }

    /// HTTP 200 envelope with `success: false` and an optional message.
    pub fn failure_envelope(message: Option<&str>) -> Self {
        let body = json!({
            "success": false,
            "error": message,
            "timestamp": "2024-05-01T00:00:00Z",
        });
        Self {
            status: 200,
            body: body.to_string().into_bytes(),
            delay_ms: 0,
        }
    }

    /// Envelope that violates the success-implies-payload contract.
    pub fn envelope_without_payload() -> Self {
        let body = json!({
            "success": true,
            "timestamp": "2024-05-01T00:00:00Z",
        });
        Self {
            status: 200,
            body: body.to_string().into_bytes(),
            delay_ms: 0,
        }
    }

    /// Plain HTTP error response.
    pub fn http_error(status: u16) -> Self {
        Self {
            status,
            body: b"{}".to_vec(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

struct MockState {
    script: VecDeque<MockResponse>,
    captured: Vec<CapturedRequest>,
}

/// Mock service bound to an ephemeral local port.
pub struct MockApi {
    addr: SocketAddr,
    state: Arc<Mutex<MockState>>,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(MockState {
            script: VecDeque::new(),
            captured: Vec::new(),
        }));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock service");
        let addr = listener.local_addr().expect("mock service has no addr");

        let app = Router::new().fallback(handle).with_state(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    /// Base URL in the shape clients expect, including the `/api` prefix.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Config pointing an [`flightcast::client::ApiClient`] at this mock.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url(),
            ..ApiConfig::default()
        }
    }

    /// Queue the next response. Responses are served in request order; an
    /// empty queue serves [`MockResponse::default`].
    pub async fn enqueue(&self, response: MockResponse) {
        self.state.lock().await.script.push_back(response);
    }

    pub async fn captured(&self) -> Vec<CapturedRequest> {
        self.state.lock().await.captured.clone()
    }
}

async fn handle(
    State(state): State<Arc<Mutex<MockState>>>,
    req: Request<Body>,
) -> Response<Body> {
    let method = req.method().to_string();
    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string());
    let headers = req
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let body = to_bytes(req.into_body(), usize::MAX)
        .await
        .unwrap_or_default()
        .to_vec();

    let response = {
        let mut state = state.lock().await;
        state.captured.push(CapturedRequest {
            method,
            path,
            headers,
            body,
        });
        state.script.pop_front().unwrap_or_default()
    };

    if response.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(response.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .header("content-type", "application/json")
        .body(Body::from(response.body))
        .expect("failed to build mock response")
}
