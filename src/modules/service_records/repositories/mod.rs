mod service_record_repository;

pub use service_record_repository::{
    MySqlServiceRecordRepository, ServiceRecordRepository, NOT_FOUND_MESSAGE,
};
