mod service_record_controller;

pub use service_record_controller::configure;
