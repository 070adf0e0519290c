//! # Chain Parameters Subsystem
//!
//! **Subsystem ID:** 0
//!
//! This crate holds the per-network constants a node needs before it can
//! talk to anyone: the genesis block and its hash, the wire magic, default
//! ports, the proof-of-work limit, base58 address prefixes, bootstrap seeds
//! and the proof-of-work to proof-of-stake transition heights.
//!
//! Two networks are defined. Main carries its own values; Test is Main with
//! explicit overrides. Both profiles are built once at startup and never
//! change; only the active selection does.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture with:
//! - **Domain Layer:** Network ids, constants, genesis construction, seed derivation
//! - **Ports Layer:** `ChainParamsApi` inbound; clock, randomness, header hash and flags outbound
//! - **Service Layer:** `NetworkRegistry` and the process-wide handle
//! - **Adapters Layer:** System clock, thread RNG, double-SHA-256 hasher, argument/env flags
//!
//! ## Fatal Startup Errors
//!
//! A genesis hash or merkle root that disagrees with the compiled-in value
//! is returned as `ChainParamsError::GenesisHashMismatch` /
//! `MerkleRootMismatch`. The node must abort startup on either.
//!
//! ## Example
//!
//! ```rust,ignore
//! use qc_00_chain_params::{
//!     BuildContext, ChainParamsApi, NetworkId, NetworkRegistry, SystemTimeSource,
//!     ThreadRandomSource,
//! };
//!
//! let ctx = BuildContext {
//!     hasher: &x11_hasher,
//!     clock: &SystemTimeSource::new(),
//!     rng: &ThreadRandomSource::new(),
//! };
//! let registry = NetworkRegistry::build(&ctx)?;
//! registry.select(NetworkId::Testnet);
//! assert_eq!(registry.active_profile().default_port(), 13301);
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use domain::{
    AddressKind, Base58Prefixes, BuildContext, ChainParamsError, ChainParamsResult, DnsSeed,
    Genesis, GenesisCheckpoint, GenesisParams, MessageStart, NetworkId, NetworkProfile,
    PeerAddress, ProfileDefinition, Timestamp,
};

pub use ports::{ChainParamsApi, FlagSource, HeaderHasher, RandomSource, TimeSource};

pub use adapters::{
    ArgsFlagSource, DoubleSha256Hasher, EnvFlagSource, SystemTimeSource, ThreadRandomSource,
};

pub use service::{global, NetworkRegistry, RegistryConfig};
