use crate::config::ControllerConfig;
use crate::controller::ControllerBase;
use crate::di::ServiceLocator;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;
use std::sync::Arc;

/// Trait that AppState must implement to provide the service locator
pub trait HasContainer {
    fn get_container(&self) -> Arc<dyn ServiceLocator>;

    /// Service ids used by controllers built from this state.
    fn controller_config(&self) -> ControllerConfig {
        ControllerConfig::default()
    }
}

/// Axum extractor building a per-request [`ControllerBase`]
///
/// # Example
/// ```
/// use meshestra_controller::prelude::*;
///
/// async fn home(controller: ControllerBase) -> Result<Response, ControllerError> {
///     controller.render("home.html", &serde_json::json!([]))
/// }
/// ```
impl<S> FromRequestParts<S> for ControllerBase
where
    S: Send + Sync + HasContainer,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(ControllerBase::with_config(
            state.get_container(),
            state.controller_config(),
        ))
    }
}
