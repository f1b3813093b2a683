use std::sync::{Arc, Mutex};

use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::AllowedOrigins,
  domains::mail::model::SendRequest,
  email::{EmailError, SendResult},
  state::AppState,
};

/// AppState double that records send requests instead of touching the network.
#[derive(Clone, Default)]
pub struct MockAppState {
  pub sent: Arc<Mutex<Vec<SendRequest>>>,
  failure: Arc<Mutex<Option<EmailError>>>,
}

impl MockAppState {
  pub fn fail_with(&self, error: EmailError) {
    *self.failure.lock().unwrap() = Some(error);
  }
}

impl AppState for MockAppState {
  async fn send_email(&self, req: SendRequest) -> Result<SendResult, EmailError> {
    if let Some(error) = self.failure.lock().unwrap().clone() {
      return Err(error);
    }

    self.sent.lock().unwrap().push(req);

    Ok(SendResult {
      code: "250".to_string(),
      message: "Ok".to_string(),
    })
  }
}

pub fn app_with_mock(state: MockAppState) -> Router {
  create_app(state, &AllowedOrigins::Any)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
