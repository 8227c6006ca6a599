//! Bearer credential type.
//!
//! The backend authenticates mutating account operations with a bearer
//! token issued at login. The token is a secret: it is wrapped in
//! [`secrecy::SecretString`] so it never appears in `Debug` output or logs.

use secrecy::{ExposeSecret, SecretString};

/// A bearer token proving an authenticated session.
///
/// Obtained from the login response and held by a credential store. The
/// client components only ever read it to build an `Authorization` header.
#[derive(Clone)]
pub struct BearerToken(SecretString);

impl BearerToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// Render the `Authorization` header value (`Bearer <token>`).
    ///
    /// Callers must pass the result straight into a request header.
    #[must_use]
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.0.expose_secret())
    }

    /// Expose the raw token for persistence by a credential store.
    ///
    /// Only credential stores should call this; everything else goes
    /// through [`Self::authorization_value`].
    #[must_use]
    pub fn expose_for_storage(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(REDACTED)")
    }
}

impl From<String> for BearerToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for BearerToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_value() {
        let token = BearerToken::new("abc123");
        assert_eq!(token.authorization_value(), "Bearer abc123");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let token = BearerToken::new("super-secret");
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("REDACTED"));
    }
}
