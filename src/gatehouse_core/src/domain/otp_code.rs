use super::form_error::FormError;

/// One-time code as entered by the user.
///
/// Only presence is validated here; verifying the code against anything is a
/// backend concern that this layer deliberately knows nothing about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl TryFrom<String> for OtpCode {
    type Error = FormError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(FormError::MissingOtp);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for OtpCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_input() {
        assert_eq!(
            OtpCode::try_from("  ".to_string()),
            Err(FormError::MissingOtp)
        );
    }

    #[test]
    fn accepts_any_non_blank_text() {
        assert!(OtpCode::try_from("999".to_string()).is_ok());
        assert!(OtpCode::try_from("not-a-number".to_string()).is_ok());
    }
}
