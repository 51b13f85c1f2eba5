//! Response writers for the feed endpoint.

use clubcal_core::constants::{CALENDAR_CONTENT_TYPE, CALENDAR_FILE_SUFFIX};
use clubcal_core::util::filename::sanitize_filename;
use clubcal_service::error::ServiceError;
use clubcal_service::feed::RenderedFeed;
use salvo::Response;
use salvo::http::{HeaderValue, StatusCode, header};
use salvo::writing::Json;
use serde::Serialize;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Maps a pipeline error to its HTTP status.
#[must_use]
pub fn status_for(error: &ServiceError) -> StatusCode {
    match error {
        ServiceError::InvalidEntityType(_) => StatusCode::BAD_REQUEST,
        ServiceError::EntityNotFound { .. } => StatusCode::NOT_FOUND,
        ServiceError::UpstreamFetchError(_) | ServiceError::SerializationError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn add_header(res: &mut Response, name: &header::HeaderName, value: HeaderValue) {
    if let Err(e) = res.add_header(name.clone(), value, true) {
        tracing::warn!(header = %name, error = %e, "Failed to set response header");
    }
}

/// Sets the cross-origin headers carried by every feed response.
pub fn add_cors_headers(res: &mut Response) {
    add_header(res, &header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    add_header(res, &header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET"));
}

/// ## Summary
/// Renders a JSON error body. 500 bodies never carry internal detail.
pub fn write_error(res: &mut Response, status: StatusCode, message: String) {
    let error = if status.is_server_error() {
        "Internal server error".to_string()
    } else {
        message
    };
    res.status_code(status);
    res.render(Json(ErrorResponse { error }));
}

/// ## Summary
/// Writes a rendered feed with its calendar headers.
pub fn write_feed(res: &mut Response, feed: RenderedFeed, cache_max_age_secs: u32) {
    let filename = format!(
        "inline; filename=\"{}{CALENDAR_FILE_SUFFIX}\"",
        sanitize_filename(&feed.entity_name)
    );

    res.status_code(StatusCode::OK);
    add_header(res, &header::CONTENT_TYPE, HeaderValue::from_static(CALENDAR_CONTENT_TYPE));
    match HeaderValue::from_str(&filename) {
        Ok(value) => add_header(res, &header::CONTENT_DISPOSITION, value),
        Err(e) => tracing::warn!(error = %e, "Invalid Content-Disposition value"),
    }
    match HeaderValue::from_str(&format!("public, max-age={cache_max_age_secs}")) {
        Ok(value) => add_header(res, &header::CACHE_CONTROL, value),
        Err(e) => tracing::warn!(error = %e, "Invalid Cache-Control value"),
    }

    if let Err(e) = res.write_body(feed.body) {
        tracing::error!(error = %e, "Failed to write feed body");
        write_error(res, StatusCode::INTERNAL_SERVER_ERROR, String::new());
    }
}
