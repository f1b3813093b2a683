use axum::{extract::Request, middleware::Next, response::Response};

/// Logs method and headers for /send requests, every method included, so
/// CORS preflight failures stay diagnosable.
pub async fn log_send_requests(request: Request, next: Next) -> Response {
  if request.uri().path() == "/send" {
    tracing::info!(
      method = %request.method(),
      headers = ?request.headers(),
      "/send request"
    );
  }

  next.run(request).await
}
