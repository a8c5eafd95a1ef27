//! Session setup and initialization

use crate::backend::credentials::StaticToken;
use crate::backend::{BackendClient, KycBackend};
use crate::config::ResolvedConfig;
use std::error::Error;
use std::sync::Arc;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Client for the KYC backend
    pub backend: Arc<dyn KycBackend>,
    /// Backend base URL (for display purposes)
    pub api_url: String,
}

/// Builds the backend client from the resolved settings.
///
/// A missing token is not an error here: every request fails with
/// `MissingCredentials` instead, which the views report like any other
/// failed request.
pub fn setup_session(config: ResolvedConfig) -> Result<SessionData, Box<dyn Error>> {
    if config.token.is_none() {
        log::warn!("No API token configured; requests to {} will be refused", config.api_url);
    }
    let credentials = Arc::new(StaticToken::new(config.token));
    let client = BackendClient::new(config.api_url.clone(), credentials)?;
    log::info!("Using backend at {}", client.base_url());
    Ok(SessionData {
        backend: Arc::new(client),
        api_url: config.api_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::error::BackendError;

    #[tokio::test]
    async fn test_session_without_token_refuses_requests() {
        let session = setup_session(ResolvedConfig {
            api_url: "http://127.0.0.1:9".into(),
            token: None,
        })
        .unwrap();
        assert_eq!(session.api_url, "http://127.0.0.1:9");
        let result = session.backend.dashboard_stats().await;
        assert!(matches!(result, Err(BackendError::MissingCredentials)));
    }
}
