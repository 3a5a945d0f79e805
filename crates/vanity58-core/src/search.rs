//! Vanity search engine

use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use vanity58_crypto::rand_core::{CryptoRngCore, OsRng};
use vanity58_crypto::{
    hex, p2pkh_address, AddressDerivationError, KeyGenerationError, NetworkParams,
    Secp256k1Keypair,
};
use vanity58_pattern::{estimate_difficulty, CompiledPattern};

use crate::cancel::CancelToken;
use crate::stats::SearchStats;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("key generation failed: {0}")]
    KeyGeneration(#[from] KeyGenerationError),
    #[error("address derivation failed: {0}")]
    AddressDerivation(#[from] AddressDerivationError),
    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of threads (0 = auto)
    pub threads: usize,
    /// Keys tested per worker between cancellation checks
    pub batch_size: usize,
    /// Maximum attempts (0 = unlimited)
    pub max_attempts: u64,
    /// Maximum time in seconds (0 = unlimited)
    pub max_time_secs: u64,
    /// Print a live progress line to stderr
    pub progress: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threads: 0, // Auto-detect
            batch_size: 1000,
            max_attempts: 0,
            max_time_secs: 0,
            progress: true,
        }
    }
}

/// The matching pair and how the search went
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The matching address
    pub address: String,
    /// Private key, lowercase hex; the sole secret
    pub private_key_hex: String,
    /// Compressed public key, lowercase hex
    pub public_key_hex: String,
    /// Pattern that was matched
    pub pattern: String,
    /// Total keys tested
    pub keys_tested: u64,
    /// Time taken in seconds
    pub time_secs: f64,
    /// Keys per second achieved
    pub keys_per_second: f64,
}

/// How a search ended. Cancellation (including a caller-imposed attempt or
/// time limit) is a normal terminating outcome, not an error.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Found(SearchResult),
    Cancelled,
}

/// One generate-derive cycle, the restartable unit every worker repeats
struct Candidate {
    keypair: Secp256k1Keypair,
    address: String,
}

fn candidate(
    rng: &mut impl CryptoRngCore,
    network: NetworkParams,
) -> Result<Candidate, SearchError> {
    let keypair = Secp256k1Keypair::generate_with(rng)?;
    let address = p2pkh_address(&keypair, network)?;
    Ok(Candidate { keypair, address })
}

/// Vanity search engine
pub struct VanitySearch {
    network: NetworkParams,
    pattern: CompiledPattern,
    config: SearchConfig,
    difficulty: Option<f64>,
}

impl VanitySearch {
    /// Create a new vanity search
    pub fn new(network: NetworkParams, pattern: CompiledPattern, config: SearchConfig) -> Self {
        let difficulty = if pattern.is_match_any() {
            Some(1.0)
        } else {
            estimate_difficulty(pattern.as_str())
        };

        Self {
            network,
            pattern,
            config,
            difficulty,
        }
    }

    /// Expected attempts, when the pattern admits an estimate
    pub fn difficulty(&self) -> Option<f64> {
        self.difficulty
    }

    /// Run the search across a pool of workers racing for the first match.
    ///
    /// Every worker draws keys from its own `OsRng` stream; the first one to
    /// find a match (or hit a limit) cancels the shared token and the rest
    /// stop at their next cancellation check. Errors from a worker abort the
    /// whole search.
    pub fn run(&self, cancel: &CancelToken) -> Result<SearchOutcome, SearchError> {
        let stats = SearchStats::new();

        // Match-any needs exactly one cycle, no loop
        if self.pattern.is_match_any() {
            let c = candidate(&mut OsRng, self.network)?;
            stats.add_keys(1);
            return Ok(SearchOutcome::Found(self.result_from(c, &stats)));
        }

        let num_threads = if self.config.threads == 0 {
            num_cpus::get()
        } else {
            self.config.threads
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()?;

        debug!(threads = num_threads, pattern = self.pattern.as_str(), "starting vanity search");

        // First worker to send wins; the channel holds a single message and
        // later sends are discarded
        let (tx, rx): (
            Sender<Result<Candidate, SearchError>>,
            Receiver<Result<Candidate, SearchError>>,
        ) = bounded(1);

        // Progress printer thread
        let printer_handle = if self.config.progress {
            let stats_for_printer = stats.clone();
            let cancel_for_printer = cancel.clone();
            let difficulty = self.difficulty;
            Some(thread::spawn(move || {
                while !cancel_for_printer.is_cancelled() {
                    eprint!("\r{}", stats_for_printer.format(difficulty));
                    thread::sleep(Duration::from_millis(250));
                }
                eprintln!(); // New line after stats
            }))
        } else {
            None
        };

        let batch_size = self.config.batch_size.max(1);
        let max_attempts = self.config.max_attempts;
        let max_time = self.config.max_time_secs;

        pool.install(|| {
            (0..num_threads).into_par_iter().for_each(|_| {
                // Independent randomness stream per worker
                let mut rng = OsRng;

                while !cancel.is_cancelled() {
                    // Check limits
                    if max_attempts > 0 && stats.total_keys() >= max_attempts {
                        cancel.cancel();
                        break;
                    }
                    if max_time > 0 && stats.elapsed().as_secs() >= max_time {
                        cancel.cancel();
                        break;
                    }

                    // Generate and check batch, observing cancellation
                    // between cycles so latency stays one key, not one batch
                    for n in 0..batch_size {
                        if cancel.is_cancelled() {
                            stats.add_keys(n as u64);
                            return;
                        }

                        match candidate(&mut rng, self.network) {
                            Ok(c) => {
                                if self.pattern.matches(&c.address) {
                                    stats.add_keys(n as u64 + 1);
                                    let _ = tx.try_send(Ok(c));
                                    cancel.cancel();
                                    return;
                                }
                            }
                            Err(e) => {
                                stats.add_keys(n as u64);
                                let _ = tx.try_send(Err(e));
                                cancel.cancel();
                                return;
                            }
                        }
                    }

                    stats.add_keys(batch_size as u64);
                }
            });
        });

        // Limits may have stopped the loop without a winner; make sure the
        // printer thread sees the end either way
        cancel.cancel();
        if let Some(handle) = printer_handle {
            let _ = handle.join();
        }

        match rx.try_recv() {
            Ok(Ok(c)) => Ok(SearchOutcome::Found(self.result_from(c, &stats))),
            Ok(Err(e)) => Err(e),
            Err(_) => Ok(SearchOutcome::Cancelled),
        }
    }

    /// Sequential search over a caller-provided randomness stream.
    ///
    /// This is the single-worker form of [`run`](Self::run); tests drive it
    /// with a seeded rng for reproducible searches.
    pub fn run_single_threaded(
        &self,
        rng: &mut impl CryptoRngCore,
        cancel: &CancelToken,
    ) -> Result<SearchOutcome, SearchError> {
        let stats = SearchStats::new();

        if self.pattern.is_match_any() {
            let c = candidate(rng, self.network)?;
            stats.add_keys(1);
            return Ok(SearchOutcome::Found(self.result_from(c, &stats)));
        }

        while !cancel.is_cancelled() {
            if self.config.max_attempts > 0 && stats.total_keys() >= self.config.max_attempts {
                return Ok(SearchOutcome::Cancelled);
            }
            if self.config.max_time_secs > 0
                && stats.elapsed().as_secs() >= self.config.max_time_secs
            {
                return Ok(SearchOutcome::Cancelled);
            }

            let c = candidate(rng, self.network)?;
            stats.add_keys(1);
            if self.pattern.matches(&c.address) {
                return Ok(SearchOutcome::Found(self.result_from(c, &stats)));
            }
        }

        Ok(SearchOutcome::Cancelled)
    }

    fn result_from(&self, candidate: Candidate, stats: &SearchStats) -> SearchResult {
        SearchResult {
            address: candidate.address,
            private_key_hex: hex::encode(candidate.keypair.private_key_bytes()),
            public_key_hex: hex::encode(candidate.keypair.public_key_compressed()),
            pattern: self.pattern.as_str().to_string(),
            keys_tested: stats.total_keys(),
            time_secs: stats.elapsed().as_secs_f64(),
            keys_per_second: stats.keys_per_second(),
        }
    }
}
