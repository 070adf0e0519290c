//! # Domain Layer
//!
//! Network identities, compiled-in constants, genesis construction, fixed
//! seed derivation and the built `NetworkProfile`. No I/O happens here; the
//! clock, randomness and header hash arrive through the ports.

pub mod constants;
pub mod errors;
pub mod genesis;
pub mod network;
pub mod profile;
pub mod seeds;

pub use errors::{ChainParamsError, ChainParamsResult};
pub use genesis::{
    build_genesis, build_verified_genesis, genesis_coinbase, verify_genesis, Genesis,
    GenesisCheckpoint, GenesisParams,
};
pub use network::{AddressKind, Base58Prefixes, MessageStart, NetworkId};
pub use profile::{BuildContext, ExpectedGenesis, NetworkProfile, ProfileDefinition};
pub use seeds::{
    derive_seeds, seed_record_to_ipv4, DnsSeed, PeerAddress, Timestamp, ONE_WEEK_SECS,
};
