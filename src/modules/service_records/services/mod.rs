mod service_record_service;

pub use service_record_service::ServiceRecordService;
