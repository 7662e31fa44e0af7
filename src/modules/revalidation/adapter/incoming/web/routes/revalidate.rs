use actix_web::{post, web, HttpResponse, Responder};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::AppState;

/// Body of every webhook response, success or not.
#[derive(Debug, Serialize, Deserialize)]
pub struct RevalidateResponse {
    pub revalidated: bool,
    /// Unix time in milliseconds.
    pub now: i64,
}

impl RevalidateResponse {
    fn at_now(revalidated: bool) -> Self {
        Self {
            revalidated,
            now: Utc::now().timestamp_millis(),
        }
    }
}

#[post("/api/revalidate")]
pub async fn revalidate_handler(data: web::Data<AppState>) -> impl Responder {
    match data.revalidate_content_use_case.execute().await {
        Ok(_) => HttpResponse::Ok().json(RevalidateResponse::at_now(true)),
        Err(err) => {
            error!("Error during revalidation: {}", err);
            HttpResponse::InternalServerError().json(RevalidateResponse::at_now(false))
        }
    }
}
