mod readiness;

pub use readiness::{MySqlReadinessProbe, ReadinessProbe};
