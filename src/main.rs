use tokio::signal;

use dotenvy::dotenv;

use portfolio_mail_api::app::create_app;
use portfolio_mail_api::config::Config;
use portfolio_mail_api::email::{EmailClient, SmtpConfig};
use portfolio_mail_api::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt::init();

  let config = Config::from_env()?;

  let email_client = EmailClient::new(SmtpConfig {
    host: config.smtp_host.clone(),
    port: config.smtp_port,
    api_key: config.resend_api_key.clone(),
  })?;

  let app_state = SharedAppState::new(email_client);
  let app = create_app(app_state, &config.allowed_origins);

  let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;

  println!("Server running on http://0.0.0.0:8000");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  println!("Received termination signal, shutting down gracefully...");
}
