use std::sync::Arc;
use crate::di::Container;

/// Builder for constructing a service container
///
/// Use this to register services before building the final container that is
/// shared with every controller.
///
/// # Example
/// ```
/// use meshestra_controller::ContainerBuilder;
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync {}
/// struct English;
/// impl Greeter for English {}
///
/// let container = ContainerBuilder::new()
///     .register("app.name", String::from("demo"))
///     .bind::<dyn Greeter>("greeter", Arc::new(English))
///     .build();
/// assert_eq!(container.len(), 2);
/// ```
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    /// Create a new container builder
    pub fn new() -> Self {
        Self {
            container: Container::new(),
        }
    }

    /// Register a service instance under `id`
    pub fn register<T: 'static + Send + Sync>(
        mut self,
        id: impl Into<String>,
        instance: T,
    ) -> Self {
        self.container.register(id, instance);
        self
    }

    /// Bind a trait object under `id`
    ///
    /// This enables resolving `Arc<dyn Trait>` from the service, which is how
    /// the controller finds its URI generator and view.
    pub fn bind<Trait>(mut self, id: impl Into<String>, instance: Arc<Trait>) -> Self
    where
        Trait: ?Sized + 'static + Send + Sync,
    {
        self.container.register_trait::<Trait>(id, instance);
        self
    }

    /// Build the container
    pub fn build(self) -> Container {
        self.container
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
