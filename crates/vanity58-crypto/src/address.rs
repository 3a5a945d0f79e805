//! P2PKH address derivation

use thiserror::Error;

use crate::encoding::base58check_encode;
use crate::hash::hash160;
use crate::keypair::Secp256k1Keypair;

/// Address parameters for a target network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkParams {
    /// Version byte prepended to the public key hash
    pub pubkey_hash_version: u8,
}

impl NetworkParams {
    /// Main network; addresses start with '1'
    pub const MAINNET: Self = Self { pubkey_hash_version: 0x00 };
    /// Test network; addresses start with 'm' or 'n'
    pub const TESTNET: Self = Self { pubkey_hash_version: 0x6f };
}

#[derive(Error, Debug)]
pub enum AddressDerivationError {
    #[error("public key bytes are empty")]
    EmptyPublicKey,
}

/// Derive a P2PKH address from serialized public key bytes.
///
/// Pipeline: HASH160(pubkey), prepend the network version byte, append the
/// first 4 bytes of double-SHA-256 as checksum, base58 encode. Pure: the same
/// pubkey and network always produce the same string.
pub fn derive_address(
    pubkey: &[u8],
    network: NetworkParams,
) -> Result<String, AddressDerivationError> {
    if pubkey.is_empty() {
        return Err(AddressDerivationError::EmptyPublicKey);
    }

    let h160 = hash160(pubkey);
    Ok(base58check_encode(network.pubkey_hash_version, &h160))
}

/// P2PKH address for a keypair's compressed public key
pub fn p2pkh_address(
    keypair: &Secp256k1Keypair,
    network: NetworkParams,
) -> Result<String, AddressDerivationError> {
    derive_address(&keypair.public_key_compressed(), network)
}
