// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;
use tracing::debug;

/// Request bodies are small forms; anything larger is rejected before parsing.
pub const MAX_JSON_BODY_BYTES: usize = 16 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(|err, req| {
            let message = err.to_string();
            debug!(path = %req.path(), error = %message, "Rejected JSON payload");
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
