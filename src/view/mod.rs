use crate::error::Result;
use serde_json::Value;

/// Template renderer consumed by [`Controller::render`](crate::Controller::render).
///
/// `data` is opaque to the controller; its shape is agreed between the
/// caller and the view.
pub trait View: Send + Sync {
    fn render(&self, template: &str, data: &Value) -> Result<String>;
}
