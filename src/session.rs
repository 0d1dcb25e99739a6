use std::fmt;
use uuid::Uuid;

/// Client-generated token that correlates an uploaded document with the
/// questions asked about it. A session exists only while a document is
/// selected in the current page lifetime; it is never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    /// Mint a fresh identifier for a newly selected document.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
