use gatehouse_core::{
    Acknowledgment, CredentialGateway, GatewayError, LoginAttempt, ResetAttempt, Username,
};

/// Gateway that performs no dispatch at all.
///
/// Serializes the payload a real implementation would send, logs that the
/// exchange was skipped, and answers with the acknowledgment text the user
/// gets in lieu of a real response. Secrets never reach the log; the debug
/// representation of each attempt is redacted.
#[derive(Debug, Default, Clone)]
pub struct PlaceholderGateway;

impl PlaceholderGateway {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialGateway for PlaceholderGateway {
    fn login(&self, attempt: LoginAttempt) -> Result<Acknowledgment, GatewayError> {
        let payload = serde_json::to_string(&attempt)
            .map_err(|e| GatewayError::UnexpectedError(e.to_string()))?;
        tracing::debug!(
            ?attempt,
            payload_bytes = payload.len(),
            "login dispatch skipped - backend not wired"
        );

        Ok(Acknowledgment::new(format!(
            "Login attempt with username: {}",
            attempt.username
        )))
    }

    fn request_otp(&self, username: &Username) -> Result<Acknowledgment, GatewayError> {
        tracing::debug!(%username, "OTP dispatch skipped - backend not wired");

        Ok(Acknowledgment::new(format!(
            "OTP sent to your registered email/phone for username: {username}"
        )))
    }

    fn reset_password(&self, attempt: ResetAttempt) -> Result<Acknowledgment, GatewayError> {
        let payload = serde_json::to_string(&attempt)
            .map_err(|e| GatewayError::UnexpectedError(e.to_string()))?;
        tracing::debug!(
            ?attempt,
            payload_bytes = payload.len(),
            "password reset dispatch skipped - backend not wired"
        );

        Ok(Acknowledgment::new(format!(
            "Password reset attempt for username: {}",
            attempt.username
        )))
    }
}
