use std::sync::{Arc, Mutex, PoisonError};

use gatehouse_core::Modal;

/// Modal that records every alert instead of showing anything.
///
/// Intended for tests and headless harnesses that want to assert on what the
/// user would have seen. Dismissal is immediate, so "blocking" degenerates to
/// a no-op here.
#[derive(Default, Clone)]
pub struct RecordingModal {
    alerts: Arc<Mutex<Vec<String>>>,
}

impl RecordingModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything alerted so far, in order.
    pub fn alerts(&self) -> Vec<String> {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_alert(&self) -> Option<String> {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Modal for RecordingModal {
    fn alert(&self, message: &str) {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_alerts_in_order() {
        let modal = RecordingModal::new();
        modal.alert("first");
        modal.alert("second");

        assert_eq!(modal.alerts(), vec!["first", "second"]);
        assert_eq!(modal.last_alert(), Some("second".to_string()));
    }
}
