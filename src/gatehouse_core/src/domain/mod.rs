pub mod acknowledgment;
pub mod credentials;
pub mod field;
pub mod form_error;
pub mod otp_code;
pub mod password;
pub mod reset_request;
pub mod username;
