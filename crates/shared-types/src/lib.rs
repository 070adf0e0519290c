//! # Shared Types Crate
//!
//! This crate contains the chain primitives consumed by the node subsystems:
//! hashes, transactions, block headers, scripts and the consensus byte
//! encoding that all hashes are computed over.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Every on-chain type is defined here.
//! - **Byte-Exact Encoding**: `Encodable` produces the little-endian wire
//!   layout; transaction ids and merkle roots are double-SHA-256 over it.
//! - **Display Order**: `Hash256` prints and parses in reversed (RPC) byte
//!   order, matching block explorers.

pub mod difficulty;
pub mod encoding;
pub mod entities;
pub mod errors;
pub mod hashing;
pub mod script;

pub use difficulty::{compact_from_target, target_from_compact};
pub use encoding::Encodable;
pub use entities::*;
pub use errors::*;
pub use hashing::{double_sha256, merkle_root};
pub use script::{opcodes, Script};
