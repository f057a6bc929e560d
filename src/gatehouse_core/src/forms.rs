//! Pure form validation.
//!
//! Each form is a raw snapshot of field values taken at activation time, and
//! `validate` is a pure function from that snapshot to either the validated
//! domain value or the first [`FormError`] encountered. Side effects (focus
//! transfer, the acknowledgment modal) belong to the application layer; this
//! module can be tested without any document environment.
//!
//! Every pass is independent and idempotent. There is no memory of prior
//! attempts: correcting a field and re-activating runs the full check again.

use secrecy::Secret;

use crate::domain::{
    credentials::Credentials, form_error::FormError, otp_code::OtpCode, password::Password,
    reset_request::ResetRequest, username::Username,
};

/// Snapshot of the login form.
pub struct LoginForm {
    pub username: String,
    pub password: Secret<String>,
}

impl LoginForm {
    /// Username presence, then password presence. First failure wins.
    pub fn validate(self) -> Result<Credentials, FormError> {
        let username = Username::try_from(self.username)?;
        let password = Password::try_from(self.password)?;
        Ok(Credentials::new(username, password))
    }
}

/// Snapshot of the reset form taken when the OTP request action fires.
///
/// Only the username participates; the other fields are neither read nor
/// validated by this action.
pub struct OtpRequestForm {
    pub username: String,
}

impl OtpRequestForm {
    pub fn validate(self) -> Result<Username, FormError> {
        Username::try_from(self.username).map_err(|_| FormError::MissingUsernameForOtp)
    }
}

/// Snapshot of the reset form taken when the reset action fires.
pub struct ResetForm {
    pub username: String,
    pub new_password: Secret<String>,
    pub confirm_password: Secret<String>,
    pub otp: String,
}

impl ResetForm {
    /// Strict order: username presence, new-password presence, exact
    /// new/confirm equality, OTP presence. The confirmation field itself has
    /// no presence check; a blank confirmation against a non-blank password
    /// surfaces as a mismatch.
    pub fn validate(self) -> Result<ResetRequest, FormError> {
        let username = Username::try_from(self.username)?;
        let new_password = Password::try_from(self.new_password)
            .map_err(|_| FormError::MissingNewPassword)?;
        if !new_password.matches(&self.confirm_password) {
            return Err(FormError::PasswordMismatch);
        }
        let otp = OtpCode::try_from(self.otp)?;
        Ok(ResetRequest::new(username, new_password, otp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn login(username: &str, password: &str) -> Result<Credentials, FormError> {
        LoginForm {
            username: username.to_string(),
            password: Secret::from(password.to_string()),
        }
        .validate()
    }

    fn reset(
        username: &str,
        new_password: &str,
        confirm_password: &str,
        otp: &str,
    ) -> Result<ResetRequest, FormError> {
        ResetForm {
            username: username.to_string(),
            new_password: Secret::from(new_password.to_string()),
            confirm_password: Secret::from(confirm_password.to_string()),
            otp: otp.to_string(),
        }
        .validate()
    }

    /// Map arbitrary bytes to whitespace-only text.
    fn blank(seed: &[u8]) -> String {
        seed.iter()
            .map(|byte| match byte % 3 {
                0 => ' ',
                1 => '\t',
                _ => '\n',
            })
            .collect()
    }

    #[test]
    fn login_checks_username_before_password() {
        assert_eq!(login("", ""), Err(FormError::MissingUsername));
    }

    #[test]
    fn login_with_blank_password_reports_missing_password() {
        assert_eq!(login("alice", ""), Err(FormError::MissingPassword));
    }

    #[test]
    fn login_accepts_complete_input() {
        let credentials = login("alice", "hunter2").unwrap();
        assert_eq!(credentials.username.as_ref(), "alice");
    }

    #[test]
    fn reset_reports_mismatch_before_checking_otp() {
        assert_eq!(
            reset("bob", "p1", "p2", "123"),
            Err(FormError::PasswordMismatch)
        );
        // Same outcome with a blank OTP: the mismatch check comes first.
        assert_eq!(
            reset("bob", "p1", "p2", ""),
            Err(FormError::PasswordMismatch)
        );
    }

    #[test]
    fn reset_treats_blank_confirmation_as_mismatch() {
        assert_eq!(
            reset("bob", "p1", "", "123"),
            Err(FormError::PasswordMismatch)
        );
    }

    #[test]
    fn reset_mismatch_is_sensitive_to_whitespace() {
        assert_eq!(
            reset("bob", " p1", "p1", "123"),
            Err(FormError::PasswordMismatch)
        );
    }

    #[test]
    fn reset_requires_otp_last() {
        assert_eq!(reset("carol", "p1", "p1", "  "), Err(FormError::MissingOtp));
    }

    #[test]
    fn reset_accepts_complete_input() {
        let request = reset("carol", "p1", "p1", "999").unwrap();
        assert_eq!(request.username.as_ref(), "carol");
        assert_eq!(request.otp.as_ref(), "999");
    }

    #[test]
    fn otp_request_uses_its_own_message() {
        let result = OtpRequestForm {
            username: " ".to_string(),
        }
        .validate();
        assert_eq!(result, Err(FormError::MissingUsernameForOtp));
    }

    #[quickcheck]
    fn blank_username_rejected_before_anything_else(seed: Vec<u8>, password: String) -> bool {
        login(&blank(&seed), &password) == Err(FormError::MissingUsername)
    }

    #[quickcheck]
    fn blank_username_rejected_in_reset_too(seed: Vec<u8>, password: String, otp: String) -> bool {
        reset(&blank(&seed), &password, &password, &otp) == Err(FormError::MissingUsername)
    }

    #[quickcheck]
    fn mismatched_passwords_rejected_regardless_of_otp(
        new_password: String,
        confirm_password: String,
        otp: String,
    ) -> TestResult {
        if new_password.trim().is_empty() || new_password == confirm_password {
            return TestResult::discard();
        }
        TestResult::from_bool(
            reset("bob", &new_password, &confirm_password, &otp)
                == Err(FormError::PasswordMismatch),
        )
    }

    #[quickcheck]
    fn complete_input_always_validates(
        username: String,
        password: String,
        otp: String,
    ) -> TestResult {
        if username.trim().is_empty() || password.trim().is_empty() || otp.trim().is_empty() {
            return TestResult::discard();
        }
        let login_ok = login(&username, &password).is_ok();
        let reset_ok = reset(&username, &password, &password, &otp).is_ok();
        TestResult::from_bool(login_ok && reset_ok)
    }
}
