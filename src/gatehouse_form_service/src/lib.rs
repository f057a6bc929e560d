//! Composition layer binding both form controllers to one document.
//!
//! [`FormService::attach`] is called once the hosting document is ready; from
//! then on the service is purely reactive, routing each user-initiated
//! [`FormEvent`] to the matching use case. Everything runs synchronously
//! inside the caller's event loop - no operation outlives its callback, so
//! there is nothing to cancel or time out.

use gatehouse_application::{Activation, LoginUseCase, RequestOtpUseCase, ResetPasswordUseCase};
use gatehouse_core::{CredentialGateway, FormDocument, Modal};

/// User-initiated action triggers, one per button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The login form's primary action.
    LoginSubmitted,
    /// The reset form's secondary action.
    OtpRequested,
    /// The reset form's primary action.
    ResetSubmitted,
}

/// Both controllers, attached to a shared document.
///
/// The document, modal and gateway handles are cloned into each use case the
/// way shared stores are cloned into routes: `Clone` is expected to share
/// state, not copy it.
pub struct FormService<D, M, G>
where
    D: FormDocument,
    M: Modal,
    G: CredentialGateway,
{
    login: LoginUseCase<D, M, G>,
    request_otp: RequestOtpUseCase<D, M, G>,
    reset_password: ResetPasswordUseCase<D, M, G>,
}

impl<D, M, G> FormService<D, M, G>
where
    D: FormDocument + Clone + 'static,
    M: Modal + Clone + 'static,
    G: CredentialGateway + Clone + 'static,
{
    /// Attach the controllers once the document has finished loading.
    pub fn attach(document: D, modal: M, gateway: G) -> Self {
        Self {
            login: LoginUseCase::new(document.clone(), modal.clone(), gateway.clone()),
            request_otp: RequestOtpUseCase::new(document.clone(), modal.clone(), gateway.clone()),
            reset_password: ResetPasswordUseCase::new(document, modal, gateway),
        }
    }

    /// Route one event to its controller and log the outcome.
    #[tracing::instrument(name = "FormService::handle", skip(self))]
    pub fn handle(&self, event: FormEvent) -> Activation {
        let activation = match event {
            FormEvent::LoginSubmitted => self.login.execute(),
            FormEvent::OtpRequested => self.request_otp.execute(),
            FormEvent::ResetSubmitted => self.reset_password.execute(),
        };

        match &activation {
            Activation::Acknowledged(acknowledgment) => {
                tracing::info!(%acknowledgment, "form action acknowledged");
            }
            Activation::Rejected(error) => {
                tracing::warn!(%error, "form input rejected");
            }
            Activation::Failed(error) => {
                tracing::error!(%error, "form action failed");
            }
        }

        activation
    }
}
