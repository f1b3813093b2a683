use axum::{
  extract::{Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};
use serde_json::{json, Value};
use validator::Validate;

use super::model::SendRequest;
use crate::error::AppError;
use crate::state::AppState;

pub fn mail_routes<S: AppState>() -> Router<S> {
  Router::new().route("/send", post(send_handler::<S>))
}

pub async fn send_handler<S: AppState>(
  State(state): State<S>,
  Json(payload): Json<SendRequest>,
) -> Result<JsonResponse<Value>, AppError> {
  payload.validate()?;

  let response = state.send_email(payload).await?;

  Ok(JsonResponse(json!({ "ok": true, "response": response })))
}
