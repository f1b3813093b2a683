use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct SendRequest {
  #[validate(email)]
  pub to: String,
  pub message: Option<String>,
}
