//! Kubernetes workload types and traits

pub mod apps;
pub mod registry;
pub mod traits;

pub use registry::{ResourceInfo, ScalableRegistry, SCALABLE_REGISTRY};
pub use traits::*;
