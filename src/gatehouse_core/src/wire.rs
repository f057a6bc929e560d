//! JSON contract for the (unwired) backend exchange.
//!
//! These DTOs document the payloads a real gateway would send and the shape
//! of its answer. Nothing in this workspace performs the exchange; the
//! placeholder gateway serializes them only to log what would have gone out.

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::domain::{credentials::Credentials, reset_request::ResetRequest};

/// Login payload: `{"username": ..., "password": ...}`.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginAttempt {
    pub username: String,
    pub password: String,
}

impl From<&Credentials> for LoginAttempt {
    fn from(credentials: &Credentials) -> Self {
        Self {
            username: credentials.username.as_ref().to_string(),
            password: credentials.password.as_ref().expose_secret().clone(),
        }
    }
}

impl std::fmt::Debug for LoginAttempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginAttempt")
            .field("username", &self.username)
            .field("password", &"REDACTED")
            .finish()
    }
}

/// Reset payload: `{"username": ..., "newPassword": ..., "otp": ...}`.
#[derive(Clone, Serialize, Deserialize)]
pub struct ResetAttempt {
    pub username: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
    pub otp: String,
}

impl From<&ResetRequest> for ResetAttempt {
    fn from(request: &ResetRequest) -> Self {
        Self {
            username: request.username.as_ref().to_string(),
            new_password: request.new_password.as_ref().expose_secret().clone(),
            otp: request.otp.as_ref().to_string(),
        }
    }
}

impl std::fmt::Debug for ResetAttempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetAttempt")
            .field("username", &self.username)
            .field("new_password", &"REDACTED")
            .field("otp", &self.otp)
            .finish()
    }
}

/// Expected answer shape: `{"success": bool, "message"?: string}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
