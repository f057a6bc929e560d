use crate::domain::field::Field;

/// Read access to the hosting document's input fields, plus focus transfer.
///
/// Focus is the only mutation a controller ever performs on the document;
/// field values are read fresh on every activation and never written back.
/// Implementations use interior mutability so controllers can share one
/// document through cheap clones.
pub trait FormDocument: Send + Sync {
    /// Current raw value of the field, surrounding whitespace included.
    fn value(&self, field: Field) -> String;

    /// Move input focus to the field so the user can correct it.
    fn focus(&self, field: Field);
}

/// Blocking acknowledgment surface.
///
/// `alert` does not return until the user has dismissed the message, matching
/// a modal dialog. Since every operation here is synchronous there is never
/// more than one alert in flight.
pub trait Modal: Send + Sync {
    fn alert(&self, message: &str);
}
