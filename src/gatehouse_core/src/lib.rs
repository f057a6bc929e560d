pub mod domain;
pub mod forms;
pub mod ports;
pub mod wire;

// Re-export commonly used types for convenience
pub use domain::{
    acknowledgment::Acknowledgment,
    credentials::Credentials,
    field::Field,
    form_error::FormError,
    otp_code::OtpCode,
    password::Password,
    reset_request::ResetRequest,
    username::Username,
};

pub use forms::{LoginForm, OtpRequestForm, ResetForm};

pub use ports::{
    gateway::{CredentialGateway, GatewayError},
    ui::{FormDocument, Modal},
};

pub use wire::{GatewayResponse, LoginAttempt, ResetAttempt};
