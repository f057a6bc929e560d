use secrecy::Secret;

use gatehouse_core::{
    CredentialGateway, Field, FormDocument, FormError, Modal, ResetAttempt, ResetForm,
};

use crate::activation::Activation;

/// Reset-password use case - the reset form's primary action.
///
/// Validates strictly in order (username, new password, confirmation match,
/// OTP), aborting at the first failure with that branch's message and a focus
/// transfer to the offending field. On success the placeholder acknowledgment
/// is shown; no password is mutated anywhere.
pub struct ResetPasswordUseCase<D, M, G>
where
    D: FormDocument,
    M: Modal,
    G: CredentialGateway,
{
    document: D,
    modal: M,
    gateway: G,
}

impl<D, M, G> ResetPasswordUseCase<D, M, G>
where
    D: FormDocument,
    M: Modal,
    G: CredentialGateway,
{
    pub fn new(document: D, modal: M, gateway: G) -> Self {
        Self {
            document,
            modal,
            gateway,
        }
    }

    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip(self))]
    pub fn execute(&self) -> Activation {
        let form = ResetForm {
            username: self.document.value(Field::Username),
            new_password: Secret::from(self.document.value(Field::NewPassword)),
            confirm_password: Secret::from(self.document.value(Field::ConfirmPassword)),
            otp: self.document.value(Field::Otp),
        };

        let request = match form.validate() {
            Ok(request) => request,
            Err(error) => return self.reject(error),
        };

        match self.gateway.reset_password(ResetAttempt::from(&request)) {
            Ok(acknowledgment) => {
                self.modal.alert(acknowledgment.as_str());
                Activation::Acknowledged(acknowledgment)
            }
            Err(error) => {
                tracing::error!(%error, "password reset dispatch failed");
                self.modal.alert("An error occurred during password reset");
                Activation::Failed(error)
            }
        }
    }

    fn reject(&self, error: FormError) -> Activation {
        self.modal.alert(&error.to_string());
        self.document.focus(error.field());
        Activation::Rejected(error)
    }
}
