use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use gatehouse_core::Field;

use super::constants::{bindings, env};

/// Workspace settings, loadable from defaults plus environment overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct FormSetting {
    pub bindings: FieldBindings,
}

/// Element ids binding each [`Field`] and action trigger to the hosting
/// document. Defaults match the documents the forms were written against.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldBindings {
    pub username: String,
    pub password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub otp: String,
    pub login_trigger: String,
    pub get_otp_trigger: String,
    pub reset_trigger: String,
}

impl FormSetting {
    /// Load settings: built-in defaults, then a local `.env`, then
    /// `GATEHOUSE__`-prefixed environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .set_default("bindings.username", bindings::USERNAME_ID)?
            .set_default("bindings.password", bindings::PASSWORD_ID)?
            .set_default("bindings.new_password", bindings::NEW_PASSWORD_ID)?
            .set_default("bindings.confirm_password", bindings::CONFIRM_PASSWORD_ID)?
            .set_default("bindings.otp", bindings::OTP_ID)?
            .set_default("bindings.login_trigger", bindings::LOGIN_TRIGGER_ID)?
            .set_default("bindings.get_otp_trigger", bindings::GET_OTP_TRIGGER_ID)?
            .set_default("bindings.reset_trigger", bindings::RESET_TRIGGER_ID)?
            .add_source(
                Environment::with_prefix(env::CONFIG_PREFIX).separator(env::CONFIG_SEPARATOR),
            )
            .build()?
            .try_deserialize()
    }
}

impl FieldBindings {
    pub fn element_id(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Password => &self.password,
            Field::NewPassword => &self.new_password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Otp => &self.otp,
        }
    }

    /// Reverse lookup used when input addresses fields by element id.
    pub fn field_for(&self, element_id: &str) -> Option<Field> {
        [
            Field::Username,
            Field::Password,
            Field::NewPassword,
            Field::ConfirmPassword,
            Field::Otp,
        ]
        .into_iter()
        .find(|field| self.element_id(*field) == element_id)
    }
}
