//! Component metadata and the capability-indexed registry built on top of it.

pub mod capability_registry;
pub mod metadata;

pub use capability_registry::CapabilityRegistry;
pub use metadata::{ComponentMetadata, ComponentType, PrivacyLevel};
