use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError, NewContactMessage,
};

use super::sea_orm_entity::{ActiveModel as ContactMessageActiveModel, Model as ContactMessageModel};

#[derive(Debug, Clone)]
pub struct ContactMessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactMessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactMessageRepository for ContactMessageRepositoryPostgres {
    async fn save(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError> {
        let active = ContactMessageActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            message: Set(data.message),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted: ContactMessageModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| ContactMessageRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }
}
