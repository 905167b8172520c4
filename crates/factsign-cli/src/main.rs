//! factsign CLI - sign operations and check their hashes and fact signs.

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{hash, sign, verify};

#[derive(Parser)]
#[command(name = "factsign")]
#[command(version, about = "Fact signing for blockchain operations")]
struct Cli {
    /// Log signing details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append a fact sign to an operation
    Sign {
        /// Operation JSON file (or stdin if not provided)
        input: Option<String>,
        /// Network ID bound into the signature
        #[arg(long, env = "FACTSIGN_NETWORK_ID")]
        network_id: String,
        /// Signing key with type suffix (mpr or spr)
        #[arg(long, env = "FACTSIGN_SIGNING_KEY", hide_env_values = true)]
        key: String,
        /// Write the signed operation here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the recomputed hash of an operation
    Hash {
        /// Operation JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Check an operation's hash and every fact sign
    Verify {
        /// Operation JSON file (or stdin if not provided)
        input: Option<String>,
        /// Network ID the fact signs were made for
        #[arg(long, env = "FACTSIGN_NETWORK_ID")]
        network_id: String,
        /// Exit with error code if any check fails
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Sign {
            input,
            network_id,
            key,
            output,
        } => sign::run(input, network_id, key, output),
        Commands::Hash { input } => hash::run(input),
        Commands::Verify {
            input,
            network_id,
            strict,
            json,
        } => verify::run(input, network_id, strict, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
