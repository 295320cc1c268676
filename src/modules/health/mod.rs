//! Root banner plus liveness and readiness probes.

pub mod controllers;
pub mod repositories;

pub use repositories::{MySqlReadinessProbe, ReadinessProbe};
