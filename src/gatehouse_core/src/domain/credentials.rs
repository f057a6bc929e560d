use super::{password::Password, username::Username};

/// One login attempt's worth of validated input.
///
/// Lives only for the duration of a single activation; nothing stores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: Username,
    pub password: Password,
}

impl Credentials {
    pub fn new(username: Username, password: Password) -> Self {
        Self { username, password }
    }
}
