use thiserror::Error;

use crate::domain::{acknowledgment::Acknowledgment, username::Username};
use crate::wire::{LoginAttempt, ResetAttempt};

/// Errors a gateway implementation may surface.
///
/// Gateway failures are terminal for the attempt that triggered them: the
/// controller alerts a generic message and stops, with no retry policy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Dispatch failed: {0}")]
    DispatchFailed(String),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// The undefined backend dependency behind both forms.
///
/// Real authentication, OTP delivery and password mutation live on the other
/// side of this trait and are out of scope here. The only shipped
/// implementation is a placeholder that performs no dispatch and answers with
/// the acknowledgment the user would otherwise get from a real round trip.
pub trait CredentialGateway: Send + Sync {
    fn login(&self, attempt: LoginAttempt) -> Result<Acknowledgment, GatewayError>;

    /// Ask the backend to deliver a one-time code for the account. Has no
    /// effect on any form field.
    fn request_otp(&self, username: &Username) -> Result<Acknowledgment, GatewayError>;

    fn reset_password(&self, attempt: ResetAttempt) -> Result<Acknowledgment, GatewayError>;
}
