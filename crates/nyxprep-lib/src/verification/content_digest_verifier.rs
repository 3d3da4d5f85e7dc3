use crate::config::{DigestAlgorithm, DigestDef};
use sha2::{Digest, Sha256, Sha512};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerificationError {
    #[error("Verification failed: expected {}, got {}",
        hex::encode(.expected),
        hex::encode(.actual)
    )]
    VerificationFailed { expected: Vec<u8>, actual: Vec<u8> },

    #[error("Invalid {algorithm:?} digest `{value}`: {reason}")]
    InvalidDigest {
        algorithm: DigestAlgorithm,
        value: String,
        reason: String,
    },
}

/// Decoded digest of a file's raw upstream contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentDigest {
    Sha256(Vec<u8>),
    Sha512(Vec<u8>),
}

impl ContentDigest {
    pub fn digest_hex(&self) -> String {
        match self {
            ContentDigest::Sha256(bytes) | ContentDigest::Sha512(bytes) => hex::encode(bytes),
        }
    }
}

impl TryFrom<&DigestDef> for ContentDigest {
    type Error = VerificationError;

    fn try_from(def: &DigestDef) -> Result<Self, Self::Error> {
        let invalid = |reason: String| VerificationError::InvalidDigest {
            algorithm: def.algorithm,
            value: def.value.clone(),
            reason,
        };

        let bytes = hex::decode(def.value.trim()).map_err(|e| invalid(e.to_string()))?;
        let expected_len = match def.algorithm {
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha512 => 64,
        };
        if bytes.len() != expected_len {
            return Err(invalid(format!(
                "expected {expected_len} bytes, got {}",
                bytes.len()
            )));
        }

        Ok(match def.algorithm {
            DigestAlgorithm::Sha256 => ContentDigest::Sha256(bytes),
            DigestAlgorithm::Sha512 => ContentDigest::Sha512(bytes),
        })
    }
}

enum ContentDigestHasher {
    Sha256(Sha256),
    Sha512(Sha512),
}

pub struct ContentDigestVerifier {
    hasher: ContentDigestHasher,
    expected_digest: Vec<u8>,
}

impl ContentDigestVerifier {
    #[inline]
    pub fn new(content_digest: ContentDigest) -> Self {
        match content_digest {
            ContentDigest::Sha256(expected_digest) => Self {
                hasher: ContentDigestHasher::Sha256(Sha256::new()),
                expected_digest,
            },
            ContentDigest::Sha512(expected_digest) => Self {
                hasher: ContentDigestHasher::Sha512(Sha512::new()),
                expected_digest,
            },
        }
    }

    #[inline]
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        match &mut self.hasher {
            ContentDigestHasher::Sha256(digest) => Digest::update(digest, data.as_ref()),
            ContentDigestHasher::Sha512(digest) => Digest::update(digest, data.as_ref()),
        };
    }

    pub fn verify(self) -> Result<(), VerificationError> {
        let actual_digest = match self.hasher {
            ContentDigestHasher::Sha256(digest) => digest.finalize().to_vec(),
            ContentDigestHasher::Sha512(digest) => digest.finalize().to_vec(),
        };

        if actual_digest == self.expected_digest {
            Ok(())
        } else {
            Err(VerificationError::VerificationFailed {
                expected: self.expected_digest,
                actual: actual_digest,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // SHA-256 of "hello"
    const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

    fn sha256_def(value: &str) -> DigestDef {
        DigestDef {
            algorithm: DigestAlgorithm::Sha256,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_verify_matching_digest() {
        let digest = ContentDigest::try_from(&sha256_def(HELLO_SHA256)).unwrap();
        let mut verifier = ContentDigestVerifier::new(digest);
        verifier.update(b"hel");
        verifier.update(b"lo");

        assert!(verifier.verify().is_ok());
    }

    #[test]
    fn test_verify_mismatching_digest() {
        let digest = ContentDigest::try_from(&sha256_def(HELLO_SHA256)).unwrap();
        let mut verifier = ContentDigestVerifier::new(digest);
        verifier.update(b"goodbye");

        let err = verifier.verify().unwrap_err();
        assert!(matches!(err, VerificationError::VerificationFailed { .. }));
        assert!(err.to_string().contains(HELLO_SHA256));
    }

    #[test]
    fn test_sha512_digest() {
        let expected = hex::encode(Sha512::digest(b"mongoose"));
        let def = DigestDef {
            algorithm: DigestAlgorithm::Sha512,
            value: expected.clone(),
        };
        let digest = ContentDigest::try_from(&def).unwrap();
        assert_eq!(digest.digest_hex(), expected);

        let mut verifier = ContentDigestVerifier::new(digest);
        verifier.update("mongoose");
        assert!(verifier.verify().is_ok());
    }

    #[test]
    fn test_rejects_non_hex_digest() {
        let result = ContentDigest::try_from(&sha256_def("not-hex"));
        assert!(matches!(
            result,
            Err(VerificationError::InvalidDigest { .. })
        ));
    }

    #[test]
    fn test_rejects_digest_of_wrong_length() {
        let result = ContentDigest::try_from(&sha256_def("00ff"));
        assert!(matches!(
            result,
            Err(VerificationError::InvalidDigest { .. })
        ));
    }
}
