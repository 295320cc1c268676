mod health_controller;

pub use health_controller::{configure, HealthResponse, ReadinessResponse, ROOT_BANNER};
