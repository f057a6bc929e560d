use gatehouse_core::{Acknowledgment, FormError, GatewayError};

/// Outcome of one activation of a form action.
///
/// Whatever the outcome, the user has already been told: the use case applies
/// its alert (and, on rejection, the focus transfer) before returning. The
/// value exists for callers that want to log or assert on what happened, not
/// to trigger further handling.
#[derive(Debug, PartialEq)]
pub enum Activation {
    /// Validation passed and the acknowledgment was shown.
    Acknowledged(Acknowledgment),
    /// Validation failed; the branch message was shown and focus moved to the
    /// offending field.
    Rejected(FormError),
    /// The gateway reported a failure; the generic error message was shown.
    Failed(GatewayError),
}
