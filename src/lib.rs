//! # Meshestra Controller
//!
//! The controller base for Meshestra applications: a thin layer over the
//! service container that resolves collaborators at request time.
//!
//! ## Features
//!
//! - **Service lookup**: `get(id)` hands back whatever the container holds
//! - **Route redirects**: `redirect_to_route(name, params)` asks the
//!   `"uri.generator"` service for a URI and answers `302 Found`
//! - **View rendering**: `render(template, data)` asks the `"view"` service for
//!   HTML and answers `200 OK`
//! - **Axum integration**: `ControllerBase` is an extractor for any state that
//!   implements `HasContainer`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use meshestra_controller::prelude::*;
//! use serde_json::{Value, json};
//!
//! struct Markdown;
//!
//! impl View for Markdown {
//!     fn render(&self, template: &str, _data: &Value) -> Result<String, ControllerError> {
//!         Ok(format!("<h1>{}</h1>", template))
//!     }
//! }
//!
//! #[derive(Clone)]
//! struct AppState {
//!     container: Arc<Container>,
//! }
//!
//! impl HasContainer for AppState {
//!     fn get_container(&self) -> Arc<dyn ServiceLocator> {
//!         self.container.clone()
//!     }
//! }
//!
//! async fn home(controller: ControllerBase) -> Result<Response, ControllerError> {
//!     controller.render("home", &json!([]))
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let container = ContainerBuilder::new()
//!         .bind::<dyn View>("view", Arc::new(Markdown))
//!         .build();
//!
//!     let state = AppState {
//!         container: Arc::new(container),
//!     };
//!
//!     let app: Router = Router::new()
//!         .route("/", axum::routing::get(home))
//!         .with_state(state);
//!
//!     // Serve your app...
//! }
//! ```

pub mod common;
pub mod config;
pub mod controller;
pub mod di;
pub mod error;
pub mod routing;
pub mod view;

// Re-export core types
pub use config::{ConfigService, ControllerConfig};
pub use controller::{Controller, ControllerBase};
pub use di::{Container, ContainerBuilder, HasContainer, Service, ServiceLocator};
pub use error::{ControllerError, Result};
pub use routing::{RouteParams, UriGenerator};
pub use view::View;

// Re-export commonly used types from dependencies
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use meshestra_controller::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ConfigService, ControllerConfig};
    pub use crate::controller::{Controller, ControllerBase};
    pub use crate::di::{Container, ContainerBuilder, HasContainer, Service, ServiceLocator};
    pub use crate::error::ControllerError;
    pub use crate::routing::{RouteParams, UriGenerator};
    pub use crate::view::View;
    pub use axum::{
        Router,
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    pub use std::sync::Arc;
}
