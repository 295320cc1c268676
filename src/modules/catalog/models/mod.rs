mod service;

pub use service::{CreateServiceRequest, NewService, Service};
