//! # Core Domain Entities
//!
//! Defines the chain entities every subsystem agrees on.
//!
//! ## Clusters
//!
//! - **Identity**: `Hash256`
//! - **Chain**: `OutPoint`, `TxIn`, `TxOut`, `Transaction`, `BlockHeader`, `Block`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::encoding::Encodable;
use crate::errors::TypeError;
use crate::hashing::{double_sha256, merkle_root};
use crate::script::Script;

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// A 32-byte hash stored in internal (little-endian) byte order.
///
/// `Display` and `FromStr` use the reversed order shown by explorers and RPC.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse a hash written in display order.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let mut bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        bytes.reverse();
        let mut out = [0u8; 32];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        f.write_str(&hex::encode(reversed))
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({self})")
    }
}

impl FromStr for Hash256 {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Encodable for Hash256 {
    fn encode_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.0);
    }
}

// =============================================================================
// CLUSTER B: THE CHAIN
// =============================================================================

/// Reference to a previous transaction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub txid: Hash256,
    pub vout: u32,
}

impl OutPoint {
    /// The reference carried by coinbase inputs.
    pub const fn null() -> Self {
        Self {
            txid: Hash256::zero(),
            vout: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

impl Encodable for OutPoint {
    fn encode_to(&self, out: &mut Vec<u8>) {
        self.txid.encode_to(out);
        out.extend_from_slice(&self.vout.to_le_bytes());
    }
}

/// A transaction input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    pub previous_output: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

impl TxIn {
    /// Input spending nothing, as found in a coinbase.
    pub fn coinbase(script_sig: Script) -> Self {
        Self {
            previous_output: OutPoint::null(),
            script_sig,
            sequence: u32::MAX,
        }
    }
}

impl Encodable for TxIn {
    fn encode_to(&self, out: &mut Vec<u8>) {
        self.previous_output.encode_to(out);
        self.script_sig.encode_to(out);
        out.extend_from_slice(&self.sequence.to_le_bytes());
    }
}

/// A transaction output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    pub value: i64,
    pub script_pubkey: Script,
}

impl TxOut {
    /// Output with no value and no claimable script.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0 && self.script_pubkey.is_empty()
    }
}

impl Encodable for TxOut {
    fn encode_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.value.to_le_bytes());
        self.script_pubkey.encode_to(out);
    }
}

/// A transaction. Carries its own timestamp, as proof-of-stake chains do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub time: u32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// Double-SHA-256 of the consensus encoding.
    pub fn txid(&self) -> Hash256 {
        double_sha256(&self.encode())
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }
}

impl Encodable for Transaction {
    fn encode_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        out.extend_from_slice(&self.time.to_le_bytes());
        self.inputs.encode_to(out);
        self.outputs.encode_to(out);
        out.extend_from_slice(&self.lock_time.to_le_bytes());
    }
}

/// The 80-byte block header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Protocol version for this block.
    pub version: i32,
    /// Hash of the parent block (creates the chain linkage).
    pub prev_block_hash: Hash256,
    /// Merkle root of all transactions in the block.
    pub merkle_root: Hash256,
    /// Unix timestamp of the block.
    pub time: u32,
    /// Compact difficulty target.
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    /// Serialized header length.
    pub const SIZE: usize = 80;

    /// Double-SHA-256 of the serialized header.
    pub fn double_sha256(&self) -> Hash256 {
        double_sha256(&self.encode())
    }
}

impl Encodable for BlockHeader {
    fn encode_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        self.prev_block_hash.encode_to(out);
        self.merkle_root.encode_to(out);
        out.extend_from_slice(&self.time.to_le_bytes());
        out.extend_from_slice(&self.bits.to_le_bytes());
        out.extend_from_slice(&self.nonce.to_le_bytes());
    }
}

/// A block: header plus ordered transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Merkle root over the transaction ids, in block order.
    pub fn build_merkle_root(&self) -> Hash256 {
        let txids: Vec<Hash256> = self.transactions.iter().map(Transaction::txid).collect();
        merkle_root(&txids)
    }
}
