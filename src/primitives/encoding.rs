//! Big-endian hex encoding of big integers.

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serializer};

use crate::{Error, Result};

/// Decodes a big-endian hex string into an unsigned big integer.
///
/// `label` names the value in the error when the input is not valid hex.
pub fn decode_hex(label: &'static str, encoded: &str) -> Result<BigUint> {
    let bytes = hex::decode(encoded.trim())
        .map_err(|source| Error::ParameterDecode { label, source })?;
    Ok(BigUint::from_bytes_be(&bytes))
}

/// Encodes an unsigned big integer as upper-case big-endian hex.
pub fn encode_hex(value: &BigUint) -> String {
    hex::encode_upper(value.to_bytes_be())
}

/// Serde adapter storing a [`BigUint`] as a big-endian hex string.
pub mod serde_hex {
    use super::*;

    /// Serializes the integer as hex.
    pub fn serialize<S>(value: &BigUint, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode_hex(value))
    }

    /// Deserializes the integer from hex.
    pub fn deserialize<'de, D>(deserializer: D) -> core::result::Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        decode_hex("serde", &encoded).map_err(serde::de::Error::custom)
    }
}
