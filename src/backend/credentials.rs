//! Request signing
//!
//! Every outbound request needs a bearer token. The client never looks one up
//! on its own; whoever builds it hands over a [`CredentialProvider`].

use super::error::BackendError;

/// Supplies the bearer token for the next request.
pub trait CredentialProvider: Send + Sync {
    /// Current token, or `None` when the user is not signed in.
    fn bearer_token(&self) -> Option<String>;

    /// Value for the `Authorization` header.
    fn authorization(&self) -> Result<String, BackendError> {
        match self.bearer_token() {
            Some(token) if !token.trim().is_empty() => Ok(format!("Bearer {}", token.trim())),
            _ => Err(BackendError::MissingCredentials),
        }
    }
}

/// A token fixed for the lifetime of the process.
#[derive(Clone, Default)]
pub struct StaticToken {
    token: Option<String>,
}

impl StaticToken {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToken")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_header_value() {
        let creds = StaticToken::new(Some(" abc.def ".into()));
        assert_eq!(creds.authorization().unwrap(), "Bearer abc.def");
    }

    #[test]
    fn test_missing_or_blank_token_is_an_error() {
        assert!(matches!(
            StaticToken::new(None).authorization(),
            Err(BackendError::MissingCredentials)
        ));
        assert!(matches!(
            StaticToken::new(Some("  ".into())).authorization(),
            Err(BackendError::MissingCredentials)
        ));
    }

    #[test]
    fn test_debug_output_hides_token() {
        let creds = StaticToken::new(Some("secret".into()));
        assert!(!format!("{:?}", creds).contains("secret"));
    }
}
