//! Controller base: service lookup, route redirects and view rendering.
//!
//! Concrete controllers implement [`Controller`] by handing out their service
//! locator, or embed a [`ControllerBase`] and delegate to it. Every operation is
//! a single stateless delegation to a collaborator found in the container.

use crate::common::response;
use crate::config::{ControllerConfig, DEFAULT_CONTROLLER_CONFIG};
use crate::di::{Service, ServiceLocator, downcast_service};
use crate::error::{ControllerError, Result};
use crate::routing::{RouteParams, UriGenerator};
use crate::view::View;
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;

/// Base behavior shared by every controller.
///
/// Implementors only hand out their locator (and optionally their service
/// keys); `get`, `redirect_to_route` and `render` come for free.
pub trait Controller {
    /// The locator collaborators are resolved from.
    fn container(&self) -> &dyn ServiceLocator;

    /// Container ids of the URI generator and the view.
    fn config(&self) -> &ControllerConfig {
        &DEFAULT_CONTROLLER_CONFIG
    }

    /// Get a container service, exactly as the locator returns it.
    fn get(&self, id: &str) -> Result<Service> {
        tracing::debug!(id, "resolving container service");
        self.container().get(id)
    }

    /// Redirect (`302 Found`) to the named route.
    ///
    /// Pass `&RouteParams::new()` when the route takes no parameters.
    ///
    /// # Errors
    /// Lookup and route-generation errors propagate unchanged.
    fn redirect_to_route(&self, name: &str, params: &RouteParams) -> Result<Response> {
        let key: &str = &self.config().uri_generator_key;
        let generator = downcast_service::<dyn UriGenerator>(self.container().get(key)?)
            .ok_or_else(|| ControllerError::DowncastFailed {
                id: key.to_string(),
                type_name: std::any::type_name::<dyn UriGenerator>().to_string(),
            })?;

        let uri = generator.generate(name, params)?;
        tracing::debug!(route = name, %uri, "redirecting to route");

        response::found(&uri)
    }

    /// Render `template` with `data` into a `200 OK` response.
    ///
    /// Pass `json!([])` when the template takes no data.
    ///
    /// The view must be registered as a trait object, through
    /// [`Container::register_trait`] or [`ContainerBuilder::bind`]. A concrete
    /// type registered with [`Container::register`] fails the capability check
    /// even when it implements [`View`].
    ///
    /// # Errors
    /// Returns [`ControllerError::InternalServerError`] when the view service
    /// does not implement [`View`]. Lookup and view errors propagate unchanged.
    ///
    /// [`Container::register_trait`]: crate::Container::register_trait
    /// [`Container::register`]: crate::Container::register
    /// [`ContainerBuilder::bind`]: crate::ContainerBuilder::bind
    fn render(&self, template: &str, data: &Value) -> Result<Response> {
        let key: &str = &self.config().view_key;
        let Some(view) = downcast_service::<dyn View>(self.container().get(key)?) else {
            return Err(ControllerError::InternalServerError(format!(
                "Container service \"{}\" must be an instance of {}",
                key,
                std::any::type_name::<dyn View>()
            )));
        };

        let html = view.render(template, data)?;
        tracing::debug!(template, bytes = html.len(), "rendered template");

        Ok(response::ok(html))
    }
}

/// Ready-made [`Controller`] over a shared service locator.
#[derive(Clone)]
pub struct ControllerBase {
    container: Arc<dyn ServiceLocator>,
    config: ControllerConfig,
}

impl ControllerBase {
    /// Controller resolving collaborators under the default keys.
    pub fn new(container: Arc<dyn ServiceLocator>) -> Self {
        Self::with_config(container, ControllerConfig::default())
    }

    /// Controller resolving collaborators under the keys in `config`.
    pub fn with_config(container: Arc<dyn ServiceLocator>, config: ControllerConfig) -> Self {
        Self { container, config }
    }
}

impl Controller for ControllerBase {
    fn container(&self) -> &dyn ServiceLocator {
        self.container.as_ref()
    }

    fn config(&self) -> &ControllerConfig {
        &self.config
    }
}
