use axum::{http::HeaderValue, middleware, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::{
  config::AllowedOrigins, domains::mail::rest::mail_routes, middleware::logging::log_send_requests, state::AppState,
};

pub fn create_app<S: AppState>(state: S, origins: &AllowedOrigins) -> Router {
  Router::new()
    .route("/health", get(health_handler))
    .merge(mail_routes::<S>())
    .layer(cors_layer(origins))
    .layer(middleware::from_fn(log_send_requests))
    .with_state(state)
}

pub async fn health_handler() -> Json<Value> {
  Json(json!({ "ok": true, "status": "healthy" }))
}

fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
  // The Fetch spec (and tower-http) reject a literal `*` combined with
  // Access-Control-Allow-Credentials, so wildcards are expressed by
  // mirroring the request.
  let allow_origin = match origins {
    AllowedOrigins::Origins(list) => {
      AllowOrigin::list(list.iter().filter_map(|origin| origin.parse::<HeaderValue>().ok()))
    }
    AllowedOrigins::Any => AllowOrigin::mirror_request(),
  };

  CorsLayer::new()
    .allow_origin(allow_origin)
    .allow_methods(AllowMethods::mirror_request())
    .allow_headers(AllowHeaders::mirror_request())
    .allow_credentials(true)
}
