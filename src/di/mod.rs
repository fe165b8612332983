mod builder;
mod container;
mod extractor;

pub use builder::ContainerBuilder;
pub use container::{Container, Service, ServiceLocator, downcast_service};
pub use extractor::HasContainer;
