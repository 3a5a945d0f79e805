//! vanity58 Core Engine
//!
//! The vanity search loop: independent generate-derive-match workers racing
//! for the first match, with cooperative cancellation.

mod cancel;
mod search;
mod stats;

pub use cancel::CancelToken;
pub use search::{SearchConfig, SearchError, SearchOutcome, SearchResult, VanitySearch};
pub use stats::SearchStats;

// Re-exports for convenience
pub use vanity58_crypto::{
    AddressDerivationError, KeyGenerationError, NetworkParams, Secp256k1Keypair,
};
pub use vanity58_pattern::{estimate_difficulty, CompiledPattern, PatternError};
