use crate::error::Result;
use std::collections::BTreeMap;

/// Parameters substituted into a named route when generating its URI.
pub type RouteParams = BTreeMap<String, String>;

/// Turns a route name plus parameters into a URI.
///
/// Implementations own the route table; the controller only consumes the
/// generated string.
pub trait UriGenerator: Send + Sync {
    /// # Errors
    /// Implementations return [`ControllerError::RouteNotFound`] for unknown
    /// route names.
    ///
    /// [`ControllerError::RouteNotFound`]: crate::ControllerError::RouteNotFound
    fn generate(&self, name: &str, params: &RouteParams) -> Result<String>;
}
