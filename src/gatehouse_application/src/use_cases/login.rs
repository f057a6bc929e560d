use secrecy::Secret;

use gatehouse_core::{
    CredentialGateway, Field, FormDocument, FormError, LoginAttempt, LoginForm, Modal,
};

use crate::activation::Activation;

/// Login use case - one activation per click of the login action.
///
/// Reads the username and password fields, runs the pure validation pass, and
/// applies the side effects each branch calls for: an alert plus focus
/// transfer on rejection, the placeholder acknowledgment on success. Each
/// activation is independent; nothing is remembered between attempts.
pub struct LoginUseCase<D, M, G>
where
    D: FormDocument,
    M: Modal,
    G: CredentialGateway,
{
    document: D,
    modal: M,
    gateway: G,
}

impl<D, M, G> LoginUseCase<D, M, G>
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

    /// Execute the login use case
    ///
    /// # Returns
    /// The [`Activation`] outcome, after all user-facing side effects have
    /// been applied.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self))]
    pub fn execute(&self) -> Activation {
        let form = LoginForm {
            username: self.document.value(Field::Username),
            password: Secret::from(self.document.value(Field::Password)),
        };

        let credentials = match form.validate() {
            Ok(credentials) => credentials,
            Err(error) => return self.reject(error),
        };

        match self.gateway.login(LoginAttempt::from(&credentials)) {
            Ok(acknowledgment) => {
                self.modal.alert(acknowledgment.as_str());
                Activation::Acknowledged(acknowledgment)
            }
            Err(error) => {
                tracing::error!(%error, "login dispatch failed");
                self.modal.alert("An error occurred during login");
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
