//! secp256k1 key pair generation

use k256::{PublicKey, SecretKey};
use rand_core::{CryptoRngCore, OsRng};
use thiserror::Error;

/// Retries allowed when rejection-sampling a valid scalar. A candidate is
/// rejected only when it is zero or at least the group order, so more than
/// one retry is already astronomically unlikely.
const MAX_SCALAR_ATTEMPTS: usize = 8;

#[derive(Error, Debug)]
pub enum KeyGenerationError {
    #[error("randomness source failed: {0}")]
    Entropy(rand_core::Error),
    #[error("randomness source produced no valid scalar")]
    InvalidScalar,
    #[error("invalid private key bytes")]
    InvalidPrivateKey,
}

/// A secp256k1 keypair
#[derive(Clone)]
pub struct Secp256k1Keypair {
    secret_key: SecretKey,
    public_key: PublicKey,
}

impl Secp256k1Keypair {
    /// Generate a new random keypair from the operating system's CSPRNG
    pub fn generate() -> Result<Self, KeyGenerationError> {
        Self::generate_with(&mut OsRng)
    }

    /// Generate a keypair from the given randomness source.
    ///
    /// Candidate scalars are rejection-sampled so the private key stays
    /// uniform over the valid range. Tests pass a seeded rng here.
    pub fn generate_with(rng: &mut impl CryptoRngCore) -> Result<Self, KeyGenerationError> {
        for _ in 0..MAX_SCALAR_ATTEMPTS {
            let mut candidate = [0u8; 32];
            rng.try_fill_bytes(&mut candidate)
                .map_err(KeyGenerationError::Entropy)?;

            if let Ok(secret_key) = SecretKey::from_bytes(&candidate.into()) {
                let public_key = secret_key.public_key();
                return Ok(Self { secret_key, public_key });
            }
        }
        Err(KeyGenerationError::InvalidScalar)
    }

    /// Create from raw 32-byte private key
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, KeyGenerationError> {
        let secret_key = SecretKey::from_bytes(bytes.into())
            .map_err(|_| KeyGenerationError::InvalidPrivateKey)?;
        let public_key = secret_key.public_key();
        Ok(Self { secret_key, public_key })
    }

    /// Get the private key as bytes
    pub fn private_key_bytes(&self) -> [u8; 32] {
        self.secret_key.to_bytes().into()
    }

    /// Get the compressed public key (33 bytes: 0x02/0x03 || x)
    pub fn public_key_compressed(&self) -> [u8; 33] {
        use k256::elliptic_curve::sec1::ToEncodedPoint;
        let point = self.public_key.to_encoded_point(true);
        let mut result = [0u8; 33];
        result.copy_from_slice(point.as_bytes());
        result
    }
}
