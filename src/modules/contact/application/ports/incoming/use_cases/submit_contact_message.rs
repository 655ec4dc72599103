use async_trait::async_trait;
use email_address::EmailAddress;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::outgoing::ContactMessageRepositoryError;

pub const NAME_MIN_CHARS: usize = 2;
/// Width of the `contact_messages.name` column.
pub const NAME_MAX_CHARS: usize = 200;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 500;

//
// ──────────────────────────────────────────────────────────
// Submit Contact Message Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SubmitContactMessageCommand {
    name: String,
    email: String,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactMessageValidationError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Name must not exceed 200 characters")]
    NameTooLong,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,

    #[error("Message must not exceed 500 characters")]
    MessageTooLong,
}

impl SubmitContactMessageCommand {
    pub fn new(
        name: String,
        email: String,
        message: String,
    ) -> Result<Self, ContactMessageValidationError> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        let name_chars = name.chars().count();
        if name_chars < NAME_MIN_CHARS {
            return Err(ContactMessageValidationError::NameTooShort);
        }
        if name_chars > NAME_MAX_CHARS {
            return Err(ContactMessageValidationError::NameTooLong);
        }

        if !EmailAddress::is_valid(email) {
            return Err(ContactMessageValidationError::InvalidEmail);
        }

        let message_chars = message.chars().count();
        if message_chars < MESSAGE_MIN_CHARS {
            return Err(ContactMessageValidationError::MessageTooShort);
        }
        if message_chars > MESSAGE_MAX_CHARS {
            return Err(ContactMessageValidationError::MessageTooLong);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactMessageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContactMessageRepositoryError> for SubmitContactMessageError {
    fn from(err: ContactMessageRepositoryError) -> Self {
        SubmitContactMessageError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitContactMessageCommand,
    ) -> Result<ContactMessage, SubmitContactMessageError>;
}
