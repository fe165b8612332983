use thiserror::Error;

pub type Result<T> = std::result::Result<T, ControllerError>;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("Service not found: {id}")]
    ServiceNotFound { id: String },

    #[error("Container service \"{id}\" could not be downcast to {type_name}")]
    DowncastFailed { id: String, type_name: String },

    #[error("Route not found: {name}")]
    RouteNotFound { name: String },

    #[error("Generated URI is not a valid Location header: {uri:?}")]
    InvalidRedirectUri { uri: String },

    #[error("{0}")]
    InternalServerError(String),

    #[error("View error: {0}")]
    View(#[from] anyhow::Error),
}

impl ControllerError {
    pub fn service_not_found(id: impl Into<String>) -> Self {
        Self::ServiceNotFound { id: id.into() }
    }

    pub fn route_not_found(name: impl Into<String>) -> Self {
        Self::RouteNotFound { name: name.into() }
    }
}

impl axum::response::IntoResponse for ControllerError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self, "controller call failed");

        // Every failure at this layer is a server-side configuration or
        // collaborator defect.
        (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            self.to_string(),
        )
            .into_response()
    }
}
