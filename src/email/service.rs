use crate::email::types::{EmailError, SendResult, SmtpConfig};
use anyhow::Result;
use lettre::{
  message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport,
  Message, Tokio1Executor,
};

const FROM_ADDRESS: &str = "onboarding@resend.dev";
const SUBJECT: &str = "Message from Portfolio";
const SMTP_USERNAME: &str = "resend";

pub const DEFAULT_HTML_BODY: &str = "<p>Congrats on sending your <strong>first email</strong>!</p>";

pub struct EmailClient {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailClient {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(SMTP_USERNAME.to_string(), smtp_config.api_key.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(EmailClient {
      smtp_config,
      transporter,
    })
  }

  pub async fn send(&self, to: &str, message: Option<&str>) -> Result<SendResult, EmailError> {
    let email = Self::build_message(to, message)?;
    let response = self.transporter.send(email).await?;
    Ok(SendResult::from_smtp(&response))
  }

  fn build_message(to: &str, message: Option<&str>) -> Result<Message, EmailError> {
    let email = Message::builder()
      .from(FROM_ADDRESS.parse()?)
      .to(to.parse()?)
      .subject(SUBJECT)
      .header(ContentType::TEXT_HTML)
      .body(Self::resolve_html(message).to_string())?;

    Ok(email)
  }

  /// Absent or empty caller messages get the fixed default fragment.
  pub fn resolve_html(message: Option<&str>) -> &str {
    match message {
      Some(m) if !m.is_empty() => m,
      _ => DEFAULT_HTML_BODY,
    }
  }
}
