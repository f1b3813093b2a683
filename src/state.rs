use std::sync::Arc;

use crate::domains::mail::model::SendRequest;
use crate::email::{EmailClient, EmailError, SendResult};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_email(
    &self,
    req: SendRequest,
  ) -> impl std::future::Future<Output = Result<SendResult, EmailError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub email_client: Arc<EmailClient>,
}

impl SharedAppState {
  pub fn new(email_client: EmailClient) -> Self {
    Self {
      email_client: Arc::new(email_client),
    }
  }
}

impl AppState for SharedAppState {
  async fn send_email(&self, req: SendRequest) -> Result<SendResult, EmailError> {
    self.email_client.send(&req.to, req.message.as_deref()).await
  }
}
