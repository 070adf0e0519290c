//! # Hashing
//!
//! Double-SHA-256 and the merkle tree over transaction ids.

use sha2::{Digest, Sha256};

use crate::entities::Hash256;

/// SHA-256 applied twice.
pub fn double_sha256(data: &[u8]) -> Hash256 {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    Hash256::new(second.into())
}

/// Merkle root over an ordered list of leaf hashes.
///
/// Each level hashes the concatenation of adjacent pairs; an odd node at
/// the end of a level is paired with itself. A single leaf is its own root
/// and an empty list yields the zero hash.
pub fn merkle_root(leaves: &[Hash256]) -> Hash256 {
    if leaves.is_empty() {
        return Hash256::zero();
    }

    let mut level: Vec<Hash256> = leaves.to_vec();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = &pair[0];
                let right = pair.get(1).unwrap_or(left);
                let mut buf = [0u8; 64];
                buf[..32].copy_from_slice(left.as_bytes());
                buf[32..].copy_from_slice(right.as_bytes());
                double_sha256(&buf)
            })
            .collect();
    }
    level[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_sha256_of_empty_input() {
        // Well-known SHA256d("") in display order.
        let hash = double_sha256(b"");
        assert_eq!(
            hash.to_string(),
            "56944c5d3f98413ef45cf54545538103cc9f298e0575820ad3591376e2e0f65d"
        );
    }

    #[test]
    fn test_merkle_root_single_leaf_is_leaf() {
        let leaf = double_sha256(b"leaf");
        assert_eq!(merkle_root(&[leaf]), leaf);
    }

    #[test]
    fn test_merkle_root_odd_count_duplicates_last() {
        let a = double_sha256(b"a");
        let b = double_sha256(b"b");
        let c = double_sha256(b"c");
        assert_eq!(merkle_root(&[a, b, c]), merkle_root(&[a, b, c, c]));
    }

    #[test]
    fn test_merkle_root_empty_is_zero() {
        assert!(merkle_root(&[]).is_zero());
    }
}
