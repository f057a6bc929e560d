use secrecy::{ExposeSecret, Secret};

use super::form_error::FormError;

/// Password field value, kept behind [`secrecy::Secret`] so it never leaks
/// through `Debug` or log output.
///
/// As with [`super::username::Username`], presence is checked on the trimmed
/// text while the stored value stays untrimmed. The confirm-password
/// comparison is exact: `" p1"` and `"p1"` do not match.
#[derive(Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = FormError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().trim().is_empty() {
            return Err(FormError::MissingPassword);
        }
        Ok(Self(value))
    }
}

impl Password {
    /// Exact comparison against another raw entry, untrimmed on both sides.
    pub fn matches(&self, other: &Secret<String>) -> bool {
        self.0.expose_secret() == other.expose_secret()
    }

    pub fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Password {}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(REDACTED)")
    }
}
