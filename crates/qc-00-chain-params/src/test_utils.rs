//! Test utilities for chain parameters.
//!
//! Deterministic collaborators for building profiles in tests.
//! Enable with the `test-utils` feature flag.
//!
//! # Example
//!
//! ```rust,ignore
//! use qc_00_chain_params::test_utils::FixedTimeSource;
//! use qc_00_chain_params::TimeSource;
//!
//! let time_source = FixedTimeSource::new(1000);
//! assert_eq!(time_source.now().as_secs(), 1000);
//! ```

use std::collections::HashMap;

use shared_types::{BlockHeader, Encodable, Hash256};

use crate::domain::constants::main;
use crate::domain::{build_genesis, ProfileDefinition, Timestamp};
use crate::ports::{FlagSource, HeaderHasher, RandomSource, TimeSource};

/// A time source that returns a fixed timestamp.
#[derive(Debug, Clone)]
pub struct FixedTimeSource {
    timestamp: u64,
}

impl FixedTimeSource {
    /// Create a new fixed time source with the given timestamp (in seconds).
    pub fn new(timestamp: u64) -> Self {
        Self { timestamp }
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        Timestamp::new(self.timestamp)
    }
}

/// Fixed random source: always `value % bound`.
#[derive(Debug, Clone)]
pub struct FixedRandomSource {
    value: u64,
}

impl FixedRandomSource {
    pub fn new(value: u64) -> Self {
        Self { value }
    }
}

impl RandomSource for FixedRandomSource {
    fn random_below(&self, bound: u64) -> u64 {
        if bound == 0 {
            0
        } else {
            self.value % bound
        }
    }
}

/// Header hasher with pinned digests for specific headers.
///
/// Unpinned headers hash with double-SHA-256.
#[derive(Debug, Clone, Default)]
pub struct PinnedHeaderHasher {
    pinned: HashMap<Vec<u8>, Hash256>,
}

impl PinnedHeaderHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the main genesis header to the deployed main genesis hash.
    pub fn with_main_genesis() -> Self {
        let genesis = build_genesis(&ProfileDefinition::main().genesis, &Self::new());
        let hash = main::GENESIS_HASH
            .parse()
            .expect("main genesis hash constant is valid hex");
        Self::new().pin(&genesis.block.header, hash)
    }

    pub fn pin(mut self, header: &BlockHeader, hash: Hash256) -> Self {
        self.pinned.insert(header.encode(), hash);
        self
    }
}

impl HeaderHasher for PinnedHeaderHasher {
    fn header_hash(&self, header: &BlockHeader) -> Hash256 {
        self.pinned
            .get(&header.encode())
            .copied()
            .unwrap_or_else(|| header.double_sha256())
    }
}

/// Flag source backed by a map of flag names.
#[derive(Debug, Clone, Default)]
pub struct MapFlagSource {
    flags: HashMap<String, bool>,
}

impl MapFlagSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: bool) -> Self {
        self.flags.insert(name.to_string(), value);
        self
    }
}

impl FlagSource for MapFlagSource {
    fn read_bool_flag(&self, name: &str, default: bool) -> bool {
        self.flags.get(name).copied().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_time_source_returns_configured_value() {
        assert_eq!(FixedTimeSource::new(12345).now().as_secs(), 12345);
    }

    #[test]
    fn test_fixed_random_wraps_bound() {
        let rng = FixedRandomSource::new(10);
        assert_eq!(rng.random_below(7), 3);
        assert_eq!(rng.random_below(0), 0);
    }

    #[test]
    fn test_pinned_hasher_falls_back_to_double_sha() {
        let hasher = PinnedHeaderHasher::with_main_genesis();
        let other = BlockHeader::default();
        assert_eq!(hasher.header_hash(&other), other.double_sha256());
    }

    #[test]
    fn test_pinned_hasher_returns_main_hash() {
        let hasher = PinnedHeaderHasher::with_main_genesis();
        let genesis = build_genesis(&ProfileDefinition::main().genesis, &hasher);
        assert_eq!(genesis.hash.to_string(), main::GENESIS_HASH);
    }

    #[test]
    fn test_map_flags() {
        let flags = MapFlagSource::new().with("testnet", true);
        assert!(flags.read_bool_flag("testnet", false));
        assert!(!flags.read_bool_flag("other", false));
    }
}
