use crate::dns::enums::{RecordClass, RecordType};

/// One resource record as parsed from a zone file
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRecord {
    /// Fully-qualified owner name, dot-terminated, case as written
    pub name: String,
    /// TTL, either from the record line or the current $TTL default
    pub ttl: Option<u32>,
    /// Record class (usually IN)
    pub class: RecordClass,
    /// Record type (A, AAAA, MX, etc.)
    pub rtype: RecordType,
    /// Type-specific payload in zone file text form, quotes preserved
    pub rdata: String,
    /// Trailing same-line comment with semicolons and edge whitespace stripped
    pub comment: Option<String>,
}

impl ZoneRecord {
    pub fn new(
        name: String,
        ttl: Option<u32>,
        class: RecordClass,
        rtype: RecordType,
        rdata: String,
        comment: Option<String>,
    ) -> Self {
        Self {
            name,
            ttl,
            class,
            rtype,
            rdata,
            comment,
        }
    }
}
