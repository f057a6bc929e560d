pub mod activation;
pub mod use_cases;

pub use activation::Activation;
pub use use_cases::{
    login::LoginUseCase, request_otp::RequestOtpUseCase, reset_password::ResetPasswordUseCase,
};
