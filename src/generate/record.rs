use crate::dns::enums::RecordType;
use crate::zone::ZoneRecord;

/// One merged, render-ready DNS record
#[derive(Debug, Clone, PartialEq)]
pub struct DnsRecord {
    /// Lower-cased owner name, dot-terminated
    pub name: String,
    /// Record type
    pub rtype: RecordType,
    /// Time to live in seconds
    pub ttl: u32,
    /// Type-specific payloads, one entry per merged source record
    pub data: Vec<String>,
    /// Source comments, in merge order, never deduplicated
    pub comments: Vec<String>,
}

/// Identifies one record within a zone
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub name: String,
    pub rtype: RecordType,
}

impl RecordKey {
    /// Composite sort key; record output order is the descending
    /// lexicographic order of this string
    pub fn composite(&self) -> String {
        format!("{}-{}", self.name, self.rtype)
    }
}

impl DnsRecord {
    /// Normalize one parsed record into its canonical form
    pub fn from_zone_record(record: &ZoneRecord, default_ttl: u32) -> Self {
        let data = match record.rtype {
            // Target names are case-insensitive in DNS but string-matched
            // downstream, so pin a canonical case
            RecordType::CNAME => record.rdata.to_lowercase(),
            RecordType::TXT => renormalize_txt(&record.rdata),
            _ => record.rdata.clone(),
        };

        let comments = match &record.comment {
            Some(comment) => {
                let comment = comment.trim_start_matches(';');
                if comment.is_empty() {
                    Vec::new()
                } else {
                    vec![comment.to_string()]
                }
            }
            None => Vec::new(),
        };

        Self {
            name: record.name.to_lowercase(),
            rtype: record.rtype,
            ttl: record.ttl.unwrap_or(default_ttl),
            data: vec![data],
            comments,
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            name: self.name.clone(),
            rtype: self.rtype,
        }
    }

    /// Merge two records sharing a key: data and comments concatenate in
    /// input order. Copy-on-merge; neither input is mutated.
    pub fn merge(existing: &DnsRecord, new: &DnsRecord) -> DnsRecord {
        let mut merged = existing.clone();
        merged.data.extend(new.data.iter().cloned());
        merged.comments.extend(new.comments.iter().cloned());
        merged
    }
}

/// Rejoin TXT payload segments that the parser emitted as separate quoted
/// strings, so the output carries one logically-continuous quoted value.
///
/// `"long-text-a" "long-text-b"` becomes `"long-text-a\"\"long-text-b"`.
fn renormalize_txt(payload: &str) -> String {
    payload
        .split("\" \"")
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\\\"\\\"")
}
