/// A username/password pair stored under a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Returns the index of the credential for `username`, if any.
pub fn find(username: &str, credentials: &[Credential]) -> Option<usize> {
    credentials.iter().position(|c| c.username == username)
}
