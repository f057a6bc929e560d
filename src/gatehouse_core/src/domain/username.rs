use super::form_error::FormError;

/// Account handle entered by the user.
///
/// Presence is checked against the trimmed text, but the stored value keeps
/// its surrounding whitespace: what the user typed is what any downstream
/// consumer sees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl TryFrom<String> for Username {
    type Error = FormError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(FormError::MissingUsername);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
