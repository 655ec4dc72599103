use actix_web::{get, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::domain::entities::PortfolioView;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioDataError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get portfolio
///
/// Returns every section of the site in one render-ready document.
/// Redirects to the admin panel while the profile has not been set up.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Portfolio assembled",
            body = inline(SuccessResponse<PortfolioView>)
        ),
        (
            status = 307,
            description = "Profile not set up yet, redirect to the admin panel"
        ),
        (
            status = 503,
            description = "Content store unavailable",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "DATA_UNAVAILABLE",
                    "message": "Portfolio content is temporarily unavailable"
                }
            })
        ),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_portfolio_data_use_case.execute().await {
        Ok(view) if view.needs_setup() => {
            info!(admin_url = %data.admin_url, "Profile incomplete, redirecting to admin");
            ApiResponse::temporary_redirect(&data.admin_url)
        }

        Ok(view) => ApiResponse::success(view),

        Err(GetPortfolioDataError::DataUnavailable(msg)) => {
            error!("Failed to load portfolio: {}", msg);
            ApiResponse::service_unavailable(
                "DATA_UNAVAILABLE",
                "Portfolio content is temporarily unavailable",
            )
        }
    }
}
