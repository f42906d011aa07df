//! Workload implementations for the apps/v1 group

pub mod deployment;
pub mod replicaset;
pub mod statefulset;
