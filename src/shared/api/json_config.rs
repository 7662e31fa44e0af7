// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;
use tracing::warn;

/// Contact payloads are a few short strings.
pub const MAX_JSON_PAYLOAD: usize = 16 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_PAYLOAD)
        .error_handler(|err, req| {
            let message = err.to_string();
            warn!(path = req.path(), "Rejected JSON payload: {}", message);
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
