mod config;
mod error;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use permissions::{BoundRole, Capability, CapabilityRequest, Role};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::{Config, GrantEntry, Lookup};
use error::{Error, Result};

const CONFIG_FILE: &str = "authz.toml";

#[derive(Parser)]
#[command(name = "authz")]
#[command(about = "Evaluate domain authorization checks against a grant table", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the grant table
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether an identity may exercise a capability on a domain
    Check {
        /// Caller identity to resolve in the grant table
        #[arg(short, long)]
        identity: String,
        /// Capability to check (read, write, domain_read, domain_write)
        #[arg(short = 'C', long)]
        capability: Capability,
        /// Domain the request targets
        #[arg(short, long)]
        domain: String,
    },
    /// List the grant table
    Grants,
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            identity,
            capability,
            domain,
        } => cmd_check(&cli.config, &identity, capability, &domain),
        Commands::Grants => cmd_grants(&cli.config),
    }
}

fn cmd_check(path: &Path, identity: &str, capability: Capability, domain: &str) -> Result<()> {
    let config = load_config(path)?;
    let role = resolve(&config, identity)?;
    let request = CapabilityRequest::new(capability, domain);

    let outcome = role.require(&request);
    let allowed = outcome.is_ok();
    info!(identity, %capability, domain, allowed, "authorization check");

    match outcome {
        Ok(()) => {
            println!("allow");
            Ok(())
        }
        Err(permissions::Error::Forbidden { capability, domain }) => {
            println!("deny");
            Err(Error::Denied {
                identity: identity.to_string(),
                capability,
                domain,
            })
        }
        Err(e) => Err(e.into()),
    }
}

fn cmd_grants(path: &Path) -> Result<()> {
    let config = load_config(path)?;
    let mut stdout = io::stdout().lock();
    render_grants(&mut stdout, &config.grants)?;
    stdout.flush()?;
    Ok(())
}

fn render_grants(out: &mut impl Write, grants: &[GrantEntry]) -> io::Result<()> {
    if grants.is_empty() {
        return writeln!(out, "No grants found.");
    }

    writeln!(out, "{:<24}  {:<10}  DOMAIN", "IDENTITY", "ROLE")?;
    writeln!(out, "{}", "-".repeat(60))?;

    for entry in grants {
        writeln!(out, "{:<24}  {:<10}  {}", entry.identity, entry.role, entry.domain)?;
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    Ok(Config::load(path)?)
}

/// Resolve an identity to exactly one bound role.
fn resolve(config: &Config, identity: &str) -> Result<BoundRole> {
    match config.lookup(identity) {
        Lookup::Found(entry) => {
            debug!(identity, role = %entry.role, domain = %entry.domain, "resolved grant");
            Ok(entry.grant().bind())
        }
        Lookup::NotFound => Err(Error::GrantNotFound {
            identity: identity.to_string(),
        }),
        Lookup::Ambiguous(count) => Err(Error::AmbiguousGrant {
            identity: identity.to_string(),
            count,
        }),
    }
}
