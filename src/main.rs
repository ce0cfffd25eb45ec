use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use version_probe::version::checker::check_package_version;
use version_probe::version::compare::version_ge;
use version_probe::version::resolvers::DistInfoResolver;

#[derive(Parser)]
#[command(name = "version-probe")]
#[command(version, about = "Check installed Python package versions against minimum requirements")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report the installed version of a package as JSON
    Check {
        /// Package name to look up
        package: String,

        /// Minimum version the package must meet
        #[arg(long)]
        min_version: Option<String>,

        /// Site-packages directories to scan instead of the detected ones
        #[arg(long = "site-packages")]
        site_packages: Vec<PathBuf>,
    },
    /// Print whether LEFT is greater than or equal to RIGHT
    Compare { left: String, right: String },
}

/// Log level is controlled by RUST_LOG; default is warnings only.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("version_probe=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            package,
            min_version,
            site_packages,
        } => {
            let resolver = if site_packages.is_empty() {
                DistInfoResolver::default()
            } else {
                DistInfoResolver::new(site_packages)
            };
            let report = check_package_version(&resolver, &package, min_version.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Compare { left, right } => {
            println!("{}", version_ge(&left, &right)?);
        }
    }

    Ok(())
}
