use std::collections::{HashMap, HashSet};

use tracing::warn;

use super::record::{DnsRecord, RecordKey};
use crate::dns::enums::RecordType;
use crate::zone::{ZoneParser, constants};

/// Read a zone file into a mapping of merged records.
///
/// Malformed records are logged and skipped; excluded types are skipped
/// silently; repeated (name, type) keys merge. The map holds at most one
/// record per key.
pub fn read_zone_records(
    contents: &str,
    origin: &str,
    excluded_types: &HashSet<RecordType>,
) -> HashMap<RecordKey, DnsRecord> {
    let mut records = HashMap::new();
    let mut parser = ZoneParser::new(origin);

    for item in parser.records(contents) {
        let raw = match item {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed record: {}", e);
                continue;
            }
        };

        if excluded_types.contains(&raw.rtype) {
            continue;
        }

        let record = DnsRecord::from_zone_record(&raw, constants::DEFAULT_TTL);
        let key = record.key();
        let record = match records.remove(&key) {
            Some(existing) => DnsRecord::merge(&existing, &record),
            None => record,
        };
        records.insert(key, record);
    }

    records
}

/// Deterministic render order: descending lexicographic sort of the
/// composite name-type key, whatever order the map hands keys out in
pub fn sorted_keys(records: &HashMap<RecordKey, DnsRecord>) -> Vec<RecordKey> {
    let mut keys: Vec<RecordKey> = records.keys().cloned().collect();
    keys.sort_by(|a, b| b.composite().cmp(&a.composite()));
    keys
}
