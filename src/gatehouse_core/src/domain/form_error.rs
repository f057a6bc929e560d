use super::field::Field;

/// The single error taxonomy of the form layer: missing or mismatched input.
///
/// Every variant is immediately user-correctable. The `Display` text is the
/// exact message surfaced to the user, and [`FormError::field`] names the
/// field that should receive focus so the user can correct it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter your username")]
    MissingUsername,
    #[error("Please enter your username to receive OTP")]
    MissingUsernameForOtp,
    #[error("Please enter your password")]
    MissingPassword,
    #[error("Please enter a new password")]
    MissingNewPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please enter the OTP sent to your registered email/phone")]
    MissingOtp,
}

impl FormError {
    /// The field that caused the rejection and should regain focus.
    ///
    /// A mismatch focuses the confirmation field: the first password entry is
    /// taken as intended and the confirmation is the one to retype.
    pub fn field(&self) -> Field {
        match self {
            Self::MissingUsername | Self::MissingUsernameForOtp => Field::Username,
            Self::MissingPassword => Field::Password,
            Self::MissingNewPassword => Field::NewPassword,
            Self::PasswordMismatch => Field::ConfirmPassword,
            Self::MissingOtp => Field::Otp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_focuses_confirmation_field() {
        assert_eq!(FormError::PasswordMismatch.field(), Field::ConfirmPassword);
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            FormError::MissingUsername.to_string(),
            "Please enter your username"
        );
        assert_eq!(
            FormError::MissingOtp.to_string(),
            "Please enter the OTP sent to your registered email/phone"
        );
    }
}
