//! vanity58 Crypto Primitives
//!
//! Low-level cryptographic operations for vanity address generation.

pub mod address;
pub mod encoding;
pub mod hash;
pub mod keypair;

pub use self::address::{derive_address, p2pkh_address, AddressDerivationError, NetworkParams};
pub use self::keypair::{KeyGenerationError, Secp256k1Keypair};

// Re-export dependencies for use by other crates
pub use hex;
pub use rand_core;
