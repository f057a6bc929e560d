pub mod login;
pub mod request_otp;
pub mod reset_password;
