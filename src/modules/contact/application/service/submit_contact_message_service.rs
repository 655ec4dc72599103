use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::{
    incoming::use_cases::{
        SubmitContactMessageCommand, SubmitContactMessageError, SubmitContactMessageUseCase,
    },
    outgoing::{ContactMessageRepository, NewContactMessage},
};

#[derive(Debug, Clone)]
pub struct SubmitContactMessageService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubmitContactMessageService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitContactMessageUseCase for SubmitContactMessageService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitContactMessageCommand,
    ) -> Result<ContactMessage, SubmitContactMessageError> {
        let data = NewContactMessage {
            name: command.name().to_string(),
            email: command.email().to_string(),
            message: command.message().to_string(),
        };

        let saved = self.repository.save(data).await.map_err(|e| {
            error!("Failed to store contact message: {}", e);
            SubmitContactMessageError::from(e)
        })?;

        info!(message_id = %saved.id, "Contact message received");
        Ok(saved)
    }
}
