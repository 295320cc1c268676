mod service_record;

pub use service_record::{
    assemble_records, CarSnapshot, LinkedService, ServiceLinkRow, ServiceRecordDetails,
    ServiceRecordInput, ServiceRecordRequest, ServiceRecordResponse, ServiceRecordRow,
};
