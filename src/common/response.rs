use crate::error::{ControllerError, Result};
use axum::{
    body::Body,
    http::{HeaderValue, StatusCode as HttpStatusCode, header::LOCATION},
    response::Response,
};

/// Build a `302 Found` redirect to `uri`
///
/// The response carries exactly one header, `Location`, holding `uri`
/// byte-for-byte.
///
/// # Errors
/// Returns [`ControllerError::InvalidRedirectUri`] when `uri` contains bytes
/// that are not allowed in a header value.
pub fn found(uri: &str) -> Result<Response> {
    let location = HeaderValue::from_str(uri).map_err(|_| ControllerError::InvalidRedirectUri {
        uri: uri.to_string(),
    })?;

    let mut response = Response::new(Body::empty());
    *response.status_mut() = HttpStatusCode::FOUND;
    response.headers_mut().insert(LOCATION, location);
    Ok(response)
}

/// Build a `200 OK` response whose body is `body`, with no headers set.
pub fn ok(body: impl Into<Body>) -> Response {
    Response::new(body.into())
}
