use super::{otp_code::OtpCode, password::Password, username::Username};

/// One password-reset attempt's worth of validated input.
///
/// Constructing one is only possible once the new password has passed the
/// confirmation check, so holding a `ResetRequest` implies the two entries
/// matched exactly. Transient, like [`super::credentials::Credentials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetRequest {
    pub username: Username,
    pub new_password: Password,
    pub otp: OtpCode,
}

impl ResetRequest {
    pub fn new(username: Username, new_password: Password, otp: OtpCode) -> Self {
        Self {
            username,
            new_password,
            otp,
        }
    }
}
