//! Base58Check encoding (Bitcoin-style with 4-byte checksum)

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Invalid checksum")]
    InvalidChecksum,
    #[error("Invalid character in input")]
    InvalidCharacter,
    #[error("Invalid length")]
    InvalidLength,
}

/// Base58Check encode: version || payload || first 4 bytes of double-SHA-256.
/// Leading zero bytes come out as leading '1' characters.
pub fn base58check_encode(version: u8, payload: &[u8]) -> String {
    use crate::hash::double_sha256;

    let mut data = Vec::with_capacity(1 + payload.len() + 4);
    data.push(version);
    data.extend_from_slice(payload);

    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum[..4]);

    bs58::encode(data).into_string()
}

/// Base58Check decode, returns (version, payload)
pub fn base58check_decode(input: &str) -> Result<(u8, Vec<u8>), EncodingError> {
    use crate::hash::double_sha256;

    let data = bs58::decode(input)
        .into_vec()
        .map_err(|_| EncodingError::InvalidCharacter)?;

    if data.len() < 5 {
        return Err(EncodingError::InvalidLength);
    }

    let (payload_with_version, checksum) = data.split_at(data.len() - 4);
    let computed_checksum = &double_sha256(payload_with_version)[..4];

    if checksum != computed_checksum {
        return Err(EncodingError::InvalidChecksum);
    }

    let version = payload_with_version[0];
    let payload = payload_with_version[1..].to_vec();

    Ok((version, payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base58check_roundtrip() {
        let payload = [1u8; 20];
        let encoded = base58check_encode(0x00, &payload);
        let (version, decoded) = base58check_decode(&encoded).unwrap();
        assert_eq!(version, 0x00);
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_leading_zero_bytes_preserved() {
        // Version 0x00 plus a zero-leading payload must keep its leading '1's
        let payload = [0u8, 0u8, 7u8, 42u8];
        let encoded = base58check_encode(0x00, &payload);
        assert!(encoded.starts_with("111"));

        let (version, decoded) = base58check_decode(&encoded).unwrap();
        assert_eq!(version, 0x00);
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_known_address_vector() {
        // hash160 of the compressed pubkey for privkey = 1
        let h160 = hex::decode("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap();
        let encoded = base58check_encode(0x00, &h160);
        assert_eq!(encoded, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
    }

    #[test]
    fn test_corrupted_checksum_rejected() {
        let payload = [1u8; 20];
        let mut encoded = base58check_encode(0x00, &payload);
        // Swap the last character for a different base58 character
        let last = encoded.pop().unwrap();
        encoded.push(if last == '2' { '3' } else { '2' });
        assert!(matches!(
            base58check_decode(&encoded),
            Err(EncodingError::InvalidChecksum)
        ));
    }
}
