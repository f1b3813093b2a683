use anyhow::Context;

pub const DEFAULT_DEV_ORIGIN: &str = "http://localhost:5173";

/// Cross-origin allow-list resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
  Origins(Vec<String>),
  Any,
}

#[derive(Debug, Clone)]
pub struct Config {
  pub resend_api_key: String,
  pub smtp_host: String,
  pub smtp_port: u16,
  pub allowed_origins: AllowedOrigins,
}

impl Config {
  pub fn from_env() -> anyhow::Result<Self> {
    let resend_api_key =
      std::env::var("RESEND_API_KEY").context("RESEND_API_KEY environment variable must be set")?;

    let smtp_host = std::env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.resend.com".to_string());
    let smtp_port = std::env::var("SMTP_PORT")
      .unwrap_or_else(|_| "587".to_string())
      .parse()
      .unwrap_or(587);

    let raw_origins = std::env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_DEV_ORIGIN.to_string());

    Ok(Config {
      resend_api_key,
      smtp_host,
      smtp_port,
      allowed_origins: parse_origins(&raw_origins),
    })
  }
}

/// Splits a comma-separated origin list, trimming whitespace and dropping
/// empty entries. An empty result falls back to allowing any origin.
pub fn parse_origins(raw: &str) -> AllowedOrigins {
  let origins: Vec<String> = raw
    .split(',')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_string)
    .collect();

  if origins.is_empty() {
    AllowedOrigins::Any
  } else {
    AllowedOrigins::Origins(origins)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;
  use std::env;

  #[test]
  fn test_parse_origins_single_origin() {
    assert_eq!(
      parse_origins("http://localhost:5173"),
      AllowedOrigins::Origins(vec!["http://localhost:5173".to_string()])
    );
  }

  #[test]
  fn test_parse_origins_multiple_with_whitespace() {
    assert_eq!(
      parse_origins("https://a.com, https://b.com"),
      AllowedOrigins::Origins(vec!["https://a.com".to_string(), "https://b.com".to_string()])
    );
  }

  #[test]
  fn test_parse_origins_only_separators_yields_any() {
    assert_eq!(parse_origins("  , ,"), AllowedOrigins::Any);
  }

  #[test]
  fn test_parse_origins_empty_yields_any() {
    assert_eq!(parse_origins(""), AllowedOrigins::Any);
  }

  #[test]
  #[serial]
  fn test_from_env_missing_api_key_fails() {
    env::remove_var("RESEND_API_KEY");
    env::remove_var("FRONTEND_ORIGINS");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("RESEND_API_KEY"));
  }

  #[test]
  #[serial]
  fn test_from_env_defaults() {
    env::set_var("RESEND_API_KEY", "re_test_key");
    env::remove_var("FRONTEND_ORIGINS");
    env::remove_var("SMTP_HOST");
    env::remove_var("SMTP_PORT");

    let config = Config::from_env().unwrap();
    assert_eq!(config.resend_api_key, "re_test_key");
    assert_eq!(config.smtp_host, "smtp.resend.com");
    assert_eq!(config.smtp_port, 587);
    assert_eq!(
      config.allowed_origins,
      AllowedOrigins::Origins(vec![DEFAULT_DEV_ORIGIN.to_string()])
    );

    env::remove_var("RESEND_API_KEY");
  }

  #[test]
  #[serial]
  fn test_from_env_explicit_origins() {
    env::set_var("RESEND_API_KEY", "re_test_key");
    env::set_var("FRONTEND_ORIGINS", "https://a.com, https://b.com");

    let config = Config::from_env().unwrap();
    assert_eq!(
      config.allowed_origins,
      AllowedOrigins::Origins(vec!["https://a.com".to_string(), "https://b.com".to_string()])
    );

    env::remove_var("RESEND_API_KEY");
    env::remove_var("FRONTEND_ORIGINS");
  }

  #[test]
  #[serial]
  fn test_from_env_unparseable_port_falls_back() {
    env::set_var("RESEND_API_KEY", "re_test_key");
    env::set_var("SMTP_PORT", "not-a-port");

    let config = Config::from_env().unwrap();
    assert_eq!(config.smtp_port, 587);

    env::remove_var("RESEND_API_KEY");
    env::remove_var("SMTP_PORT");
  }
}
