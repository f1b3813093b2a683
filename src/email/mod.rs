//! Email sending functionality module
//!
//! This module wraps the transactional email provider behind lettre's
//! async SMTP transport.

mod service;
mod types;

pub use service::{EmailClient, DEFAULT_HTML_BODY};
pub use types::{EmailError, SendResult, SmtpConfig};
