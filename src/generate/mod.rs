pub mod dialect;
pub mod reader;
pub mod record;
pub mod render;
pub mod sanitize;

pub use dialect::Dialect;
pub use reader::{read_zone_records, sorted_keys};
pub use record::{DnsRecord, RecordKey};
pub use render::ConfigGenerator;
pub use sanitize::sanitize_record_name;
