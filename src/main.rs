use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use zone53::ConfigGenerator;
use zone53::config::GeneratorConfig;
use zone53::generate::Dialect;

/// Generate Terraform or CloudFormation resource definitions from a DNS
/// zone file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of domain
    #[arg(long)]
    domain: String,

    /// Path to zone file. Defaults to <domain>.zone in working dir
    #[arg(long)]
    zone_file: Option<PathBuf>,

    /// Comma-separated list of record types to ignore
    #[arg(long, default_value = "SOA,NS")]
    exclude: String,

    /// Output syntax
    #[arg(long, value_enum, default_value_t = Dialect::Modern)]
    syntax: Dialect,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = GeneratorConfig::new(args.domain, args.zone_file, &args.exclude, args.syntax);

    let contents = fs::read_to_string(&config.zone_file)
        .map_err(|e| format!("cannot read zone file {}: {e}", config.zone_file.display()))?;

    let generator = ConfigGenerator::new(config.dialect);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    generator.generate(&config, &contents, &mut out)?;

    Ok(())
}
