use crate::error::{ControllerError, Result};
use dashmap::DashMap;
use std::any::Any;
use std::sync::Arc;

/// A type-erased service instance as handed out by a [`ServiceLocator`].
pub type Service = Arc<dyn Any + Send + Sync>;

/// Read-only lookup of services by string identifier.
///
/// Controllers only ever read from a locator; registration happens once at
/// application bootstrap.
pub trait ServiceLocator: Send + Sync {
    /// Look up the service registered under `id`.
    ///
    /// # Errors
    /// Returns [`ControllerError::ServiceNotFound`] for unregistered identifiers.
    fn get(&self, id: &str) -> Result<Service>;
}

/// Recover a capability from a type-erased service.
///
/// Matches only services registered through [`Container::register_trait`],
/// which stores the `Arc<dyn Trait>` behind the `Any`.
pub fn downcast_service<T: ?Sized + Send + Sync + 'static>(service: Service) -> Option<Arc<T>> {
    service
        .downcast::<Arc<T>>()
        .ok()
        .map(|wrapper| wrapper.as_ref().clone())
}

/// Thread-safe, string-keyed service container.
pub struct Container {
    services: DashMap<String, Service>,
}

impl Clone for Container {
    fn clone(&self) -> Self {
        Self {
            services: self.services.clone(),
        }
    }
}

impl Container {
    /// Create an empty container.
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
        }
    }

    /// Register a concrete instance under `id`, replacing any previous entry.
    ///
    /// The instance is only reachable by its concrete type. Collaborators the
    /// controller resolves by capability (`dyn View`, `dyn UriGenerator`) must
    /// go through [`Container::register_trait`] instead.
    pub fn register<T: 'static + Send + Sync>(
        &mut self,
        id: impl Into<String>,
        instance: T,
    ) -> &mut Self {
        self.services.insert(id.into(), Arc::new(instance));
        self
    }

    /// Register a trait object under `id` so that it can be resolved by capability.
    pub fn register_trait<T: ?Sized + 'static + Send + Sync>(
        &mut self,
        id: impl Into<String>,
        instance: Arc<T>,
    ) -> &mut Self {
        // Wrap the Arc<dyn Trait> in an Arc<dyn Any>
        self.services.insert(id.into(), Arc::new(instance));
        self
    }

    /// Resolve the service under `id` as the concrete type `T`.
    pub fn resolve<T: 'static + Send + Sync>(&self, id: &str) -> Result<Arc<T>> {
        self.get(id)?
            .downcast::<T>()
            .map_err(|_| ControllerError::DowncastFailed {
                id: id.to_string(),
                type_name: std::any::type_name::<T>().to_string(),
            })
    }

    /// Resolve the service under `id` as a trait object registered with
    /// [`Container::register_trait`].
    pub fn resolve_trait<T: ?Sized + 'static + Send + Sync>(&self, id: &str) -> Result<Arc<T>> {
        downcast_service::<T>(self.get(id)?).ok_or_else(|| ControllerError::DowncastFailed {
            id: id.to_string(),
            type_name: std::any::type_name::<T>().to_string(),
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.services.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl ServiceLocator for Container {
    fn get(&self, id: &str) -> Result<Service> {
        self.services
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ControllerError::service_not_found(id))
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestService {
        value: i32,
    }

    trait MyTrait: Send + Sync {
        fn get_value(&self) -> i32;
    }

    struct MyTraitImpl {
        value: i32,
    }

    impl MyTrait for MyTraitImpl {
        fn get_value(&self) -> i32 {
            self.value
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let mut container = Container::new();
        container.register("test", TestService { value: 42 });
        let service = container.resolve::<TestService>("test").unwrap();
        assert_eq!(service.value, 42);
    }

    #[test]
    fn test_register_and_resolve_trait() {
        let mut container = Container::new();
        container.register_trait::<dyn MyTrait>("my", Arc::new(MyTraitImpl { value: 99 }));
        let trait_instance = container.resolve_trait::<dyn MyTrait>("my").unwrap();
        assert_eq!(trait_instance.get_value(), 99);
    }

    #[test]
    fn test_get_unknown_id_is_service_not_found() {
        let container = Container::new();
        let err = container.get("missing").unwrap_err();
        assert!(matches!(err, ControllerError::ServiceNotFound { id } if id == "missing"));
    }

    #[test]
    fn test_resolve_wrong_type_is_downcast_failed() {
        let mut container = Container::new();
        container.register("value", 7_u32);
        assert!(matches!(
            container.resolve::<String>("value"),
            Err(ControllerError::DowncastFailed { .. })
        ));
        assert!(matches!(
            container.resolve_trait::<dyn MyTrait>("value"),
            Err(ControllerError::DowncastFailed { .. })
        ));
    }

    #[test]
    fn test_register_replaces_previous_entry() {
        let mut container = Container::new();
        container.register("n", 1_i32).register("n", 2_i32);
        assert_eq!(container.len(), 1);
        assert_eq!(*container.resolve::<i32>("n").unwrap(), 2);
    }

    #[test]
    fn test_get_returns_the_registered_instance() {
        let mut container = Container::new();
        container.register("s", String::from("hello"));
        let first = container.get("s").unwrap();
        let second = container.get("s").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(container.contains("s"));
        assert!(!container.contains("t"));
    }
}
