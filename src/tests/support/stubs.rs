use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::contact::application::domain::entities::ContactMessage;
use crate::contact::application::ports::incoming::use_cases::{
    SubmitContactMessageCommand, SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::portfolio::application::domain::entities::PortfolioView;
use crate::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioDataError, GetPortfolioDataUseCase,
};

// ============================================================
// Portfolio
// ============================================================

#[derive(Clone)]
pub struct StubGetPortfolioDataUseCase {
    result: Result<PortfolioView, GetPortfolioDataError>,
}

impl StubGetPortfolioDataUseCase {
    pub fn success(view: PortfolioView) -> Self {
        Self { result: Ok(view) }
    }

    pub fn unavailable(msg: &str) -> Self {
        Self {
            result: Err(GetPortfolioDataError::DataUnavailable(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetPortfolioDataUseCase for StubGetPortfolioDataUseCase {
    async fn execute(&self) -> Result<PortfolioView, GetPortfolioDataError> {
        self.result.clone()
    }
}

// ============================================================
// Contact
// ============================================================

/// Echoes the validated command back as a stored message, or fails.
#[derive(Clone)]
pub struct StubSubmitContactMessageUseCase {
    failure: Option<String>,
}

impl StubSubmitContactMessageUseCase {
    pub fn echo() -> Self {
        Self { failure: None }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            failure: Some(msg.to_string()),
        }
    }
}

#[async_trait]
impl SubmitContactMessageUseCase for StubSubmitContactMessageUseCase {
    async fn execute(
        &self,
        command: SubmitContactMessageCommand,
    ) -> Result<ContactMessage, SubmitContactMessageError> {
        if let Some(msg) = &self.failure {
            return Err(SubmitContactMessageError::RepositoryError(msg.clone()));
        }

        Ok(ContactMessage {
            id: Uuid::new_v4(),
            name: command.name().to_string(),
            email: command.email().to_string(),
            message: command.message().to_string(),
            created_at: Utc::now(),
        })
    }
}
