use gatehouse_core::{CredentialGateway, Field, FormDocument, Modal, OtpRequestForm};

use crate::activation::Activation;

/// Request-OTP use case - the reset form's secondary action.
///
/// Reads the username field only. The OTP field is never pre-filled and the
/// later reset validation does not depend on this action having run; the two
/// operations are fully independent.
pub struct RequestOtpUseCase<D, M, G>
where
    D: FormDocument,
    M: Modal,
    G: CredentialGateway,
{
    document: D,
    modal: M,
    gateway: G,
}

impl<D, M, G> RequestOtpUseCase<D, M, G>
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

    #[tracing::instrument(name = "RequestOtpUseCase::execute", skip(self))]
    pub fn execute(&self) -> Activation {
        let form = OtpRequestForm {
            username: self.document.value(Field::Username),
        };

        let username = match form.validate() {
            Ok(username) => username,
            Err(error) => {
                self.modal.alert(&error.to_string());
                self.document.focus(error.field());
                return Activation::Rejected(error);
            }
        };

        match self.gateway.request_otp(&username) {
            Ok(acknowledgment) => {
                self.modal.alert(acknowledgment.as_str());
                Activation::Acknowledged(acknowledgment)
            }
            Err(error) => {
                tracing::error!(%error, "OTP request dispatch failed");
                self.modal.alert("An error occurred while requesting OTP");
                Activation::Failed(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use gatehouse_core::{
        Acknowledgment, FormError, GatewayError, LoginAttempt, ResetAttempt, Username,
    };

    #[derive(Default, Clone)]
    struct MockDocument {
        values: Arc<Mutex<HashMap<Field, String>>>,
        focused: Arc<Mutex<Option<Field>>>,
    }

    impl MockDocument {
        fn with(values: &[(Field, &str)]) -> Self {
            Self {
                values: Arc::new(Mutex::new(
                    values
                        .iter()
                        .map(|(field, value)| (*field, value.to_string()))
                        .collect(),
                )),
                focused: Arc::new(Mutex::new(None)),
            }
        }

        fn snapshot(&self) -> HashMap<Field, String> {
            self.values.lock().unwrap().clone()
        }

        fn focused(&self) -> Option<Field> {
            *self.focused.lock().unwrap()
        }
    }

    impl FormDocument for MockDocument {
        fn value(&self, field: Field) -> String {
            self.values
                .lock()
                .unwrap()
                .get(&field)
                .cloned()
                .unwrap_or_default()
        }

        fn focus(&self, field: Field) {
            *self.focused.lock().unwrap() = Some(field);
        }
    }

    #[derive(Default, Clone)]
    struct MockModal {
        alerts: Arc<Mutex<Vec<String>>>,
    }

    impl MockModal {
        fn alerts(&self) -> Vec<String> {
            self.alerts.lock().unwrap().clone()
        }
    }

    impl Modal for MockModal {
        fn alert(&self, message: &str) {
            self.alerts.lock().unwrap().push(message.to_string());
        }
    }

    #[derive(Clone)]
    struct MockGateway;

    impl CredentialGateway for MockGateway {
        fn login(&self, _attempt: LoginAttempt) -> Result<Acknowledgment, GatewayError> {
            unimplemented!()
        }

        fn request_otp(&self, username: &Username) -> Result<Acknowledgment, GatewayError> {
            Ok(Acknowledgment::new(format!(
                "OTP sent to your registered email/phone for username: {username}"
            )))
        }

        fn reset_password(&self, _attempt: ResetAttempt) -> Result<Acknowledgment, GatewayError> {
            unimplemented!()
        }
    }

    #[test]
    fn blank_username_uses_the_otp_specific_message() {
        let document = MockDocument::with(&[(Field::Username, "  ")]);
        let modal = MockModal::default();
        let use_case = RequestOtpUseCase::new(document.clone(), modal.clone(), MockGateway);

        let outcome = use_case.execute();

        assert_eq!(
            outcome,
            Activation::Rejected(FormError::MissingUsernameForOtp)
        );
        assert_eq!(
            modal.alerts(),
            vec!["Please enter your username to receive OTP"]
        );
        assert_eq!(document.focused(), Some(Field::Username));
    }

    #[test]
    fn acknowledges_without_touching_other_fields() {
        let document = MockDocument::with(&[
            (Field::Username, "alice"),
            (Field::NewPassword, "p1"),
            (Field::ConfirmPassword, "p2"),
            (Field::Otp, ""),
        ]);
        let before = document.snapshot();
        let modal = MockModal::default();
        let use_case = RequestOtpUseCase::new(document.clone(), modal.clone(), MockGateway);

        let outcome = use_case.execute();

        assert!(matches!(outcome, Activation::Acknowledged(_)));
        assert_eq!(
            modal.alerts(),
            vec!["OTP sent to your registered email/phone for username: alice"]
        );
        // The other fields are untouched: mismatched passwords and a blank
        // OTP do not matter to this action, and nothing was pre-filled.
        assert_eq!(document.snapshot(), before);
        assert_eq!(document.focused(), None);
    }
}
