pub mod env {
    /// Prefix for environment overrides, e.g. `GATEHOUSE__BINDINGS__USERNAME`.
    pub const CONFIG_PREFIX: &str = "GATEHOUSE";
    pub const CONFIG_SEPARATOR: &str = "__";
}

/// Default element ids, matching the documents both forms are bound to.
pub mod bindings {
    pub const USERNAME_ID: &str = "username";
    pub const PASSWORD_ID: &str = "password";
    pub const NEW_PASSWORD_ID: &str = "newPassword";
    pub const CONFIRM_PASSWORD_ID: &str = "confirmPassword";
    pub const OTP_ID: &str = "otpInput";

    pub const LOGIN_TRIGGER_ID: &str = "loginBtn";
    pub const GET_OTP_TRIGGER_ID: &str = "getOtpBtn";
    pub const RESET_TRIGGER_ID: &str = "resetBtn";
}
