use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::env;
use std::sync::Arc;

/// Environment key overriding the service id of the URI generator.
pub const URI_GENERATOR_SERVICE_ENV: &str = "CONTROLLER_URI_GENERATOR_SERVICE";
/// Environment key overriding the service id of the view.
pub const VIEW_SERVICE_ENV: &str = "CONTROLLER_VIEW_SERVICE";

/// Configuration service
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    /// Configuration seeded from the process environment.
    pub fn new() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }
}

/// Container ids under which a controller looks up its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub uri_generator_key: Cow<'static, str>,
    pub view_key: Cow<'static, str>,
}

pub(crate) static DEFAULT_CONTROLLER_CONFIG: ControllerConfig = ControllerConfig::DEFAULT;

impl ControllerConfig {
    pub const DEFAULT: ControllerConfig = ControllerConfig {
        uri_generator_key: Cow::Borrowed("uri.generator"),
        view_key: Cow::Borrowed("view"),
    };

    /// Read key overrides from a [`ConfigService`], falling back to the defaults.
    pub fn from_config(config: &ConfigService) -> Self {
        let defaults = Self::DEFAULT;
        Self {
            uri_generator_key: config
                .get(URI_GENERATOR_SERVICE_ENV)
                .map(Cow::Owned)
                .unwrap_or(defaults.uri_generator_key),
            view_key: config
                .get(VIEW_SERVICE_ENV)
                .map(Cow::Owned)
                .unwrap_or(defaults.view_key),
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
