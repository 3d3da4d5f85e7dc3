mod content_digest_verifier;

pub use content_digest_verifier::{ContentDigest, ContentDigestVerifier, VerificationError};
