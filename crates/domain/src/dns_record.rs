pub mod record;
pub mod record_type;
pub mod service_record;

pub use record::{DnsRecord, PlainRecord};
pub use record_type::RecordType;
pub use service_record::ServiceRecord;
