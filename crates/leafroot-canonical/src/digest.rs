use base64::Engine;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use sha2::{Digest as Sha2Digest, Sha256};
use std::fmt;

/// Size in bytes of a SHA-256 digest.
pub const SHA256_SIZE: usize = 32;

/// Supported digest algorithms for content fingerprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlg {
    /// SHA-256.
    #[serde(rename = "sha-256")]
    Sha256,
}

/// Algorithm + raw digest bytes.
///
/// Serializes as `{"alg": "sha-256", "b64": <base64url, no padding>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    alg: DigestAlg,
    bytes: [u8; SHA256_SIZE],
}

impl Digest {
    /// Digest algorithm.
    pub fn alg(&self) -> DigestAlg {
        self.alg
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; SHA256_SIZE] {
        &self.bytes
    }

    /// Base64URL (no padding) rendering.
    pub fn to_b64(&self) -> String {
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(self.bytes)
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alg {
            DigestAlg::Sha256 => write!(f, "sha-256:{}", self.to_b64()),
        }
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Digest", 2)?;
        state.serialize_field("alg", &self.alg)?;
        state.serialize_field("b64", &self.to_b64())?;
        state.end()
    }
}

/// Hashes `input` with SHA-256.
pub fn sha256_digest(input: &[u8]) -> Digest {
    Digest {
        alg: DigestAlg::Sha256,
        bytes: Sha256::digest(input).into(),
    }
}
