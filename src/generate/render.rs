use std::io::Write;

use tracing::warn;

use super::dialect::Dialect;
use super::reader::{read_zone_records, sorted_keys};
use super::record::DnsRecord;
use super::sanitize::sanitize_record_name;
use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, Result};

/// Renders zone and record resource blocks in one selected dialect
pub struct ConfigGenerator {
    dialect: Dialect,
}

impl ConfigGenerator {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Full run: read and merge every record, emit the zone block, then the
    /// record blocks in deterministic order. Per-record render failures are
    /// logged and skipped; an unsanitizable name aborts the run.
    pub fn generate<W: Write>(
        &self,
        config: &GeneratorConfig,
        contents: &str,
        out: &mut W,
    ) -> Result<()> {
        let records = read_zone_records(contents, &config.domain, &config.excluded_types);

        let (zone_id, zone_text) = self.render_zone(&config.domain);
        out.write_all(zone_text.as_bytes())?;

        for key in sorted_keys(&records) {
            match self.render_record(&records[&key], &zone_id) {
                Ok(text) => out.write_all(text.as_bytes())?,
                Err(e @ GeneratorError::InvalidName { .. }) => return Err(e),
                Err(e) => warn!("skipping record {}: {}", key.composite(), e),
            }
        }

        Ok(())
    }

    /// Render the zone resource block; returns the zone identifier the
    /// record blocks reference
    pub fn render_zone(&self, domain: &str) -> (String, String) {
        let zone_name = domain.trim_end_matches('.');
        let zone_id = self.dialect.zone_id(domain);

        let text = match self.dialect {
            Dialect::Cloudformation => format!(
                "Resources:\n  \
                 {zone_id}:\n    \
                 Type: AWS::Route53::HostedZone\n    \
                 Properties:\n      \
                 Name: \"{zone_name}\"\n"
            ),
            Dialect::CloudDns => format!(
                "resource \"google_dns_managed_zone\" \"{zone_id}\" {{\n  \
                 name = \"{zone_id}\"\n  \
                 dns_name = \"{zone_name}\"\n  \
                 visibility = \"public\"\n\
                 }}\n"
            ),
            _ => format!(
                "resource \"aws_route53_zone\" \"{zone_id}\" {{\n  \
                 name = \"{zone_name}\"\n\
                 }}\n"
            ),
        };

        (zone_id, text)
    }

    /// Render one record resource block, comment lines first
    pub fn render_record(&self, record: &DnsRecord, zone_id: &str) -> Result<String> {
        let sanitized = sanitize_record_name(&record.name)?;
        let id = self.dialect.record_id(&sanitized, record.rtype);
        let reference = self.dialect.zone_reference(zone_id);

        let mut out = String::new();
        match self.dialect {
            Dialect::Cloudformation => {
                for comment in &record.comments {
                    out.push_str("\n  # ");
                    out.push_str(comment);
                }
                out.push_str(&format!(
                    "\n  {id}:\n    \
                     Type: AWS::Route53::RecordSet\n    \
                     Properties:\n      \
                     HostedZoneId: {reference}\n      \
                     Name: \"{}\"\n      \
                     Type: \"{}\"\n      \
                     TTL: \"{}\"\n      \
                     ResourceRecords:",
                    record.name, record.rtype, record.ttl
                ));
                for datum in &record.data {
                    out.push_str("\n      - ");
                    out.push_str(&ensure_quoted(datum));
                }
                out.push('\n');
            }
            Dialect::CloudDns => {
                for comment in &record.comments {
                    out.push_str("\n# ");
                    out.push_str(comment);
                }
                out.push_str(&format!(
                    "\nresource \"google_dns_record_set\" \"{id}\" {{\n  \
                     managed_zone = {reference}\n  \
                     name    = \"{}\"\n  \
                     type    = \"{}\"\n  \
                     ttl     = \"{}\"\n  \
                     rrdatas = [{}]\n\
                     }}\n",
                    record.name,
                    record.rtype,
                    record.ttl,
                    quoted_list(&record.data)
                ));
            }
            _ => {
                for comment in &record.comments {
                    out.push_str("\n# ");
                    out.push_str(comment);
                }
                out.push_str(&format!(
                    "\nresource \"aws_route53_record\" \"{id}\" {{\n  \
                     zone_id = {reference}\n  \
                     name    = \"{}\"\n  \
                     type    = \"{}\"\n  \
                     ttl     = \"{}\"\n  \
                     records = [{}]\n\
                     }}\n",
                    record.name,
                    record.rtype,
                    record.ttl,
                    quoted_list(&record.data)
                ));
            }
        }

        Ok(out)
    }
}

fn quoted_list(data: &[String]) -> String {
    data.iter()
        .map(|d| ensure_quoted(d))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quote a value unless the source already quoted it
fn ensure_quoted(s: &str) -> String {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        s.to_string()
    } else {
        format!("{s:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting_leaves_quoted_values_alone() {
        assert_eq!(ensure_quoted("\"already quoted\""), "\"already quoted\"");
        assert_eq!(ensure_quoted("127.0.0.1"), "\"127.0.0.1\"");
        assert_eq!(ensure_quoted("\""), "\"\\\"\"");
    }
}
