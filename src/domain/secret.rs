//! Secret value object - the credential stored alongside a user.
//!
//! The registry never authenticates anyone, so the value is kept as supplied.
//! What this type guarantees is that it cannot leak: it has no `Serialize`
//! impl and its `Debug` output is redacted.

/// Opaque credential persisted in the `hashed_password` column.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

// Don't expose the value in debug output
impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Secret").field(&"[REDACTED]").finish()
    }
}

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the stored string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the stored string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Secret> for String {
    fn from(secret: Secret) -> Self {
        secret.0
    }
}
