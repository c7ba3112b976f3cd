use actix_web::web::JsonConfig;

use crate::shared::api::ApiResponse;

/// Body deserialization failures, including rejected request payloads,
/// come back in the standard error envelope instead of actix's default.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}
