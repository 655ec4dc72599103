use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::contact::adapter::incoming::web::routes::SubmitContactMessageRequest;
use crate::contact::application::domain::entities::ContactMessage;
use crate::portfolio::application::domain::entities::{
    ContentSection, PersonalInfo, PortfolioMetadata, PortfolioView, Project, Skill, SocialLink,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "Read side of a personal portfolio site backed by a headless CMS",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Portfolio endpoints
        crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::portfolio::adapter::incoming::web::routes::get_portfolio_metadata_handler,

        // Contact endpoints
        crate::contact::adapter::incoming::web::routes::submit_contact_message_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Portfolio view
            PortfolioView,
            PortfolioMetadata,
            PersonalInfo,
            SocialLink,
            ContentSection,
            Skill,
            Project,

            // Contact DTOs
            SubmitContactMessageRequest,
            ContactMessage
        )
    ),
    tags(
        (name = "portfolio", description = "Assembled portfolio content"),
        (name = "contact", description = "Contact form submissions"),
    )
)]
pub struct ApiDoc;
