//! # dnsutil
//!
//! Prints the system DNS configuration and the query names it produces.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dnsutil")]
#[command(version)]
#[command(about = "Show the DNS resolver configuration and search-list expansion")]
struct Cli {
    /// resolv.conf-style file to read instead of the system default
    #[arg(short = 'f', long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Names to expand through the search list
    #[arg(value_name = "NAME")]
    names: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.file {
        Some(path) => resolv_config::read_config_from(path),
        None => resolv_config::read_config(),
    };

    if let Some(err) = &config.err {
        tracing::warn!(error = %err, "Using default configuration");
    }
    println!("{config:#?}");

    for name in &cli.names {
        match config.name_list(name) {
            Some(names) if names.is_empty() => println!("{name}: no candidates"),
            Some(names) => println!("{name}: {}", names.join(" ")),
            None => println!("{name}: invalid name"),
        }
    }
}
