//! Block header hash adapters

use shared_types::{BlockHeader, Hash256};

use crate::ports::HeaderHasher;

/// Double-SHA-256 over the 80-byte serialized header.
///
/// Networks that identify blocks with a different function inject their own
/// `HeaderHasher`; main's deployed genesis hash is not a double-SHA-256.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleSha256Hasher;

impl HeaderHasher for DoubleSha256Hasher {
    fn header_hash(&self, header: &BlockHeader) -> Hash256 {
        header.double_sha256()
    }
}
