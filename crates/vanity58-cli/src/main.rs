//! vanity58 CLI
//!
//! Bitcoin P2PKH vanity address generator.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::warn;
use vanity58_core::{
    CancelToken, CompiledPattern, NetworkParams, SearchConfig, SearchOutcome, SearchResult,
    VanitySearch,
};

#[derive(Parser)]
#[command(name = "vanity58")]
#[command(version = "0.1.0")]
#[command(about = "Bitcoin vanity address generator", long_about = None)]
struct Cli {
    /// Regex pattern to search for; prompted on stdin when omitted
    #[arg(short, long)]
    pattern: Option<String>,

    /// Target network for the address version byte
    #[arg(short, long, value_enum, default_value = "main")]
    network: NetworkArg,

    /// Number of threads (0 = auto)
    #[arg(long, default_value = "0")]
    threads: usize,

    /// Keys tested per worker between cancellation checks
    #[arg(long, default_value = "1000")]
    batch_size: usize,

    /// Maximum attempts (0 = unlimited)
    #[arg(long, default_value = "0")]
    max_attempts: u64,

    /// Maximum time in seconds (0 = unlimited)
    #[arg(long, default_value = "0")]
    max_time: u64,

    /// Suppress the live progress line
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum NetworkArg {
    Main,
    Test,
}

impl From<NetworkArg> for NetworkParams {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Main => NetworkParams::MAINNET,
            NetworkArg::Test => NetworkParams::TESTNET,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let raw_pattern = match cli.pattern {
        Some(p) => p,
        None => prompt_for_pattern()?,
    };

    // An invalid pattern is reported and we fall back to a non-vanity address
    let pattern = match CompiledPattern::compile(&raw_pattern) {
        Ok(p) => p,
        Err(e) => {
            warn!("{}; generating non-vanity address instead", e);
            CompiledPattern::any()
        }
    };
    let searching = !pattern.is_match_any();

    let config = SearchConfig {
        threads: cli.threads,
        batch_size: cli.batch_size,
        max_attempts: cli.max_attempts,
        max_time_secs: cli.max_time,
        progress: searching && !cli.quiet,
    };

    let search = VanitySearch::new(cli.network.into(), pattern, config);

    if searching {
        if let Some(difficulty) = search.difficulty() {
            eprintln!("Difficulty: {:.0}", difficulty);
        }
        eprintln!("Searching...");
    }

    let cancel = CancelToken::new();
    match search.run(&cancel)? {
        SearchOutcome::Found(result) => print_result(&result),
        SearchOutcome::Cancelled => eprintln!("No match found within limits."),
    }

    Ok(())
}

fn prompt_for_pattern() -> Result<String> {
    print!("Enter pattern, or nothing for non-vanity address: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn print_result(result: &SearchResult) {
    println!("This is a private key in hex:\t[{}]", result.private_key_hex);
    println!("This is a public key in hex:\t[{}]", result.public_key_hex);
    println!(
        "This is the associated Bitcoin address:\t[{}]",
        result.address
    );
}
