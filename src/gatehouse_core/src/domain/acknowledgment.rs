/// User-visible message shown in place of a real request/response exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment(String);

impl Acknowledgment {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Acknowledgment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
