use std::fmt;

use clap::ValueEnum;
use heck::ToUpperCamelCase;

use crate::dns::enums::RecordType;

/// Output syntax for the generated resource definitions
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Dialect {
    /// Terraform 0.12+ HCL for AWS Route 53
    Modern,
    /// Terraform pre-0.12 interpolation syntax for AWS Route 53
    Legacy,
    /// AWS CloudFormation YAML
    Cloudformation,
    /// Terraform HCL for Google Cloud DNS
    CloudDns,
}

impl Dialect {
    /// Derive the zone resource identifier from the domain
    pub fn zone_id(self, domain: &str) -> String {
        let zone_name = domain.trim_end_matches('.');
        match self {
            Dialect::Cloudformation => zone_name.to_upper_camel_case(),
            _ => zone_name.replace('.', "-"),
        }
    }

    /// Derive the record resource identifier from a sanitized name and type
    pub fn record_id(self, sanitized_name: &str, rtype: RecordType) -> String {
        let id = format!("{sanitized_name}-{rtype}");
        match self {
            Dialect::Cloudformation => id.to_upper_camel_case(),
            _ => id,
        }
    }

    /// Cross-reference expression pointing a record at its zone resource
    pub fn zone_reference(self, zone_id: &str) -> String {
        match self {
            Dialect::Modern => format!("aws_route53_zone.{zone_id}.zone_id"),
            Dialect::Legacy => format!("\"${{aws_route53_zone.{zone_id}.zone_id}}\""),
            Dialect::Cloudformation => format!("!Ref {zone_id}"),
            Dialect::CloudDns => format!("google_dns_managed_zone.{zone_id}.name"),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::Modern => "modern",
            Dialect::Legacy => "legacy",
            Dialect::Cloudformation => "cloudformation",
            Dialect::CloudDns => "cloud-dns",
        };
        f.write_str(name)
    }
}
