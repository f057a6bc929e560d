use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use gatehouse_core::{Field, FormDocument};

/// In-memory stand-in for a hosting document: a field map plus a focus cell.
///
/// `Clone` shares the same underlying state, so the controllers of one form
/// and the harness driving them all observe the same fields.
#[derive(Default, Clone)]
pub struct InMemoryDocument {
    inner: Arc<RwLock<DocumentState>>,
}

#[derive(Default)]
struct DocumentState {
    values: HashMap<Field, String>,
    focused: Option<Field>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user typing into a field.
    pub fn set_value(&self, field: Field, value: impl Into<String>) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .values
            .insert(field, value.into());
    }

    /// Which field currently holds input focus, if any.
    pub fn focused(&self) -> Option<Field> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .focused
    }
}

impl FormDocument for InMemoryDocument {
    fn value(&self, field: Field) -> String {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values
            .get(&field)
            .cloned()
            .unwrap_or_default()
    }

    fn focus(&self, field: Field) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .focused = Some(field);
    }
}
