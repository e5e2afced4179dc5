use std::collections::HashSet;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::dns::enums::RecordType;
use crate::generate::Dialect;

/// Run configuration, built once at startup and passed by reference into
/// the generator
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Name of the zone's domain
    pub domain: String,

    /// Path to the zone file
    pub zone_file: PathBuf,

    /// Record types left out of the output
    pub excluded_types: HashSet<RecordType>,

    /// Output syntax
    pub dialect: Dialect,
}

impl GeneratorConfig {
    pub fn new(
        domain: String,
        zone_file: Option<PathBuf>,
        exclude: &str,
        dialect: Dialect,
    ) -> Self {
        let zone_file =
            zone_file.unwrap_or_else(|| PathBuf::from(format!("{domain}.zone")));
        Self {
            domain,
            zone_file,
            excluded_types: excluded_types_from_str(exclude),
            dialect,
        }
    }
}

/// Parse a comma-separated exclusion list like "SOA,NS". Unknown type names
/// are warned about and dropped rather than failing the run.
pub fn excluded_types_from_str(s: &str) -> HashSet<RecordType> {
    let mut excluded = HashSet::new();
    for name in s.split(',') {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        match RecordType::from_str(name) {
            Ok(rtype) => {
                excluded.insert(rtype);
            }
            Err(_) => warn!("unknown record type in exclusion list: {}", name),
        }
    }
    excluded
}
