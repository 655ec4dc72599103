use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactMessage;

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactMessageRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn save(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError>;
}
