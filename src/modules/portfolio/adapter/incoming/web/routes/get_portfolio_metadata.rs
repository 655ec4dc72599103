use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::domain::entities::PortfolioMetadata;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioDataError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get page metadata
///
/// Document title and description for the landing page head.
#[utoipa::path(
    get,
    path = "/api/portfolio/metadata",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Metadata derived from profile and hero",
            body = inline(SuccessResponse<PortfolioMetadata>),
            example = json!({
                "success": true,
                "data": {
                    "title": "Jane Doe | Backend Engineer",
                    "description": "Hi, I'm Jane"
                }
            })
        ),
        (status = 503, description = "Content store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/portfolio/metadata")]
pub async fn get_portfolio_metadata_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_portfolio_data_use_case.execute().await {
        Ok(view) => ApiResponse::success(view.metadata()),

        Err(GetPortfolioDataError::DataUnavailable(msg)) => {
            error!("Failed to load portfolio metadata: {}", msg);
            ApiResponse::service_unavailable(
                "DATA_UNAVAILABLE",
                "Portfolio content is temporarily unavailable",
            )
        }
    }
}
