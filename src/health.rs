use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::modules::portfolio::application::ports::outgoing::ContentStore;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    content_store: &'static str,
}

/// LIVENESS CHECK
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS CHECK
/// - Checks the database and the content store
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    store: web::Data<Arc<dyn ContentStore>>,
) -> impl Responder {
    let db_status = match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => "ok",
        Err(e) => {
            warn!(error = %e, "Database readiness check failed");
            "unhealthy"
        }
    };

    let store_status = match store.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            warn!(error = %e, "Content store readiness check failed");
            "unhealthy"
        }
    };

    let body = ReadinessResponse {
        status: "ok",
        database: db_status,
        content_store: store_status,
    };

    if db_status == "ok" && store_status == "ok" {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            ..body
        })
    }
}
