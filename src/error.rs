use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use crate::email::EmailError;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub detail: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, detail: impl Into<String>) -> Self {
    Self {
      status_code,
      detail: detail.into(),
    }
  }

  pub fn unprocessable_entity(detail: impl Into<String>) -> Self {
    Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
  }

  pub fn internal_server_error(detail: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "detail": self.detail,
    }));

    (self.status_code, body).into_response()
  }
}

impl From<validator::ValidationErrors> for AppError {
  fn from(errors: validator::ValidationErrors) -> Self {
    AppError::unprocessable_entity(errors.to_string())
  }
}

impl From<EmailError> for AppError {
  fn from(error: EmailError) -> Self {
    tracing::error!("Email send failed: {}", error);
    AppError::internal_server_error(error.to_string())
  }
}
