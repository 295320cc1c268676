use actix_web::{
    error::{JsonPayloadError, PathError},
    Error, HttpRequest,
};

use crate::core::AppError;

/// Map malformed JSON bodies onto the `{message}` validation shape
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    tracing::debug!(path = %req.path(), error = %err, "Rejected JSON payload");

    let message = match &err {
        JsonPayloadError::ContentType => "Expected a JSON request body".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {}", e),
        other => format!("Invalid request body: {}", other),
    };

    AppError::validation(message).into()
}

/// Map unparseable path segments (e.g. `/servicerecord/abc`) onto a validation error
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    tracing::debug!(path = %req.path(), error = %err, "Rejected path parameter");
    AppError::validation("Invalid id in request path").into()
}
