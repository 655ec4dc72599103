use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::PortfolioView;
use crate::modules::portfolio::application::ports::outgoing::content_store::ContentStoreError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

/// Any failed read fails the whole call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPortfolioDataError {
    #[error("Portfolio data unavailable: {0}")]
    DataUnavailable(String),
}

impl From<ContentStoreError> for GetPortfolioDataError {
    fn from(err: ContentStoreError) -> Self {
        GetPortfolioDataError::DataUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for GetPortfolioDataError {
    fn from(err: serde_json::Error) -> Self {
        GetPortfolioDataError::DataUnavailable(format!("Malformed record: {err}"))
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetPortfolioDataUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioView, GetPortfolioDataError>;
}
