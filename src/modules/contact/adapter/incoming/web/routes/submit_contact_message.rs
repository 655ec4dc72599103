use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactMessageValidationError, SubmitContactMessageCommand, SubmitContactMessageError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitContactMessageRequest {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "Would love to chat about a backend role.")]
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Submit contact message
///
/// Stores a message sent through the public contact form.
#[utoipa::path(
    post,
    path = "/api/contact-messages",
    tag = "contact",
    request_body = SubmitContactMessageRequest,
    responses(
        (
            status = 201,
            description = "Message stored",
            body = inline(SuccessResponse<ContactMessage>)
        ),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "MESSAGE_TOO_SHORT",
                    "message": "Message must be at least 10 characters"
                }
            })
        ),
        (status = 500, description = "Message could not be stored", body = ErrorResponse),
    )
)]
#[post("/api/contact-messages")]
pub async fn submit_contact_message_handler(
    data: web::Data<AppState>,
    payload: web::Json<SubmitContactMessageRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command =
        match SubmitContactMessageCommand::new(payload.name, payload.email, payload.message) {
            Ok(cmd) => cmd,
            Err(err) => return map_validation_error(err),
        };

    match data.submit_contact_message_use_case.execute(command).await {
        Ok(message) => ApiResponse::created(message),
        Err(SubmitContactMessageError::RepositoryError(msg)) => {
            error!("Contact message not stored: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_validation_error(err: ContactMessageValidationError) -> HttpResponse {
    let code = match err {
        ContactMessageValidationError::NameTooShort => "NAME_TOO_SHORT",
        ContactMessageValidationError::NameTooLong => "NAME_TOO_LONG",
        ContactMessageValidationError::InvalidEmail => "INVALID_EMAIL",
        ContactMessageValidationError::MessageTooShort => "MESSAGE_TOO_SHORT",
        ContactMessageValidationError::MessageTooLong => "MESSAGE_TOO_LONG",
    };

    ApiResponse::bad_request(code, &err.to_string())
}
