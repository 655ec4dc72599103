pub mod modules;
pub use modules::contact;
pub use modules::portfolio;
pub mod health;

mod api;
mod shared;

use crate::contact::adapter::outgoing::ContactMessageRepositoryPostgres;
use crate::contact::application::ports::incoming::use_cases::SubmitContactMessageUseCase;
use crate::contact::application::service::SubmitContactMessageService;
use crate::portfolio::adapter::outgoing::{ContentStoreConfig, ContentStoreHttp};
use crate::portfolio::application::portfolio_query_config::PortfolioQueryConfig;
use crate::portfolio::application::ports::incoming::use_cases::GetPortfolioDataUseCase;
use crate::portfolio::application::ports::outgoing::ContentStore;
use crate::portfolio::application::service::GetPortfolioDataService;

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub get_portfolio_data_use_case: Arc<dyn GetPortfolioDataUseCase + Send + Sync>,
    pub submit_contact_message_use_case: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    /// Where visitors are sent while the site owner has not filled in a profile.
    pub admin_url: String,
}

fn required_env(key: &str) -> io::Result<String> {
    env::var(key).map_err(|_| io::Error::other(format!("{key} is not set in .env file")))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", rust_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = required_env("DATABASE_URL")?;
    let host = required_env("HOST")?;
    let port = required_env("PORT")?;
    let admin_url = env::var("ADMIN_URL").unwrap_or_else(|_| "/admin".to_string());
    let run_migrations = env::var("RUN_MIGRATIONS")
        .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes"))
        .unwrap_or(false);

    let server_url = format!("{host}:{port}");
    info!(server_url = %server_url, rust_env = %rust_env, "Configuration loaded");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| io::Error::other(format!("Failed to connect to database: {e}")))?;

    if run_migrations {
        info!("Applying pending migrations");
        Migrator::up(&conn, None)
            .await
            .map_err(|e| io::Error::other(format!("Migration failed: {e}")))?;
    }

    let db_arc = Arc::new(conn);

    // Content store
    let store_config = ContentStoreConfig::from_env().map_err(io::Error::other)?;
    let content_store = ContentStoreHttp::new(&store_config).map_err(io::Error::other)?;
    info!(base_url = %store_config.base_url, "Content store configured");

    let query_config = PortfolioQueryConfig::from_env();

    // Use cases
    let get_portfolio_data_use_case =
        GetPortfolioDataService::new(content_store.clone(), query_config);
    let submit_contact_message_use_case =
        SubmitContactMessageService::new(ContactMessageRepositoryPostgres::new(Arc::clone(&db_arc)));

    let state = AppState {
        get_portfolio_data_use_case: Arc::new(get_portfolio_data_use_case),
        submit_contact_message_use_case: Arc::new(submit_contact_message_use_case),
        admin_url,
    };

    let store_for_server: Arc<dyn ContentStore> = Arc::new(content_store);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&store_for_server)))
            .app_data(shared::api::custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_metadata_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_message_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
