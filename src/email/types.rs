use lettre::transport::smtp::response::Response;
use serde::{Deserialize, Serialize};

/// Connection parameters for the provider's SMTP relay. The API key doubles
/// as the SMTP password; the username is fixed by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub api_key: String,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.resend.com".to_string(),
      port: 587,
      api_key: "".to_string(),
    }
  }
}

/// Opaque provider reply, returned to the caller verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendResult {
  pub code: String,
  pub message: String,
}

impl SendResult {
  pub fn from_smtp(response: &Response) -> Self {
    SendResult {
      code: response.code().to_string(),
      message: response.message().collect::<Vec<_>>().join("\n"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
  InvalidAddress(String),
  Transport(String),
}

impl std::fmt::Display for EmailError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      EmailError::InvalidAddress(msg) => write!(f, "invalid email address: {}", msg),
      EmailError::Transport(msg) => write!(f, "email provider error: {}", msg),
    }
  }
}

impl std::error::Error for EmailError {}

impl From<lettre::address::AddressError> for EmailError {
  fn from(err: lettre::address::AddressError) -> Self {
    EmailError::InvalidAddress(err.to_string())
  }
}

impl From<lettre::error::Error> for EmailError {
  fn from(err: lettre::error::Error) -> Self {
    EmailError::Transport(err.to_string())
  }
}

impl From<lettre::transport::smtp::Error> for EmailError {
  fn from(err: lettre::transport::smtp::Error) -> Self {
    EmailError::Transport(err.to_string())
  }
}
