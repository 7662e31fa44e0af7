use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;

use crate::modules::content::{
    adapter::outgoing::queries, application::ports::outgoing::QueryParams,
};
use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    content: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - One trivial CMS query
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    match data
        .content_client
        .fetch(queries::PING, &QueryParams::new())
        .await
    {
        Ok(_) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            content: "ok",
        }),
        Err(err) => {
            warn!("Content API not ready: {}", err);
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                content: "unhealthy",
            })
        }
    }
}
