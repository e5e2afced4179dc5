pub mod errors;
pub mod parser;
pub mod record;

pub use errors::{Result, ZoneError};
pub use parser::{RecordStream, ZoneParser};
pub use record::ZoneRecord;

/// Zone constants
pub mod constants {
    /// Default TTL if the zone file never sets one (1 hour)
    pub const DEFAULT_TTL: u32 = 3600;
}
