//! Genesis block construction and verification
//!
//! The genesis block is fully determined by four knobs: a timestamp text,
//! the block time, the pre-mined nonce and the proof-of-work limit. Its hash
//! and merkle root are then checked against compiled-in expectations.

use primitive_types::U256;
use shared_types::{
    compact_from_target, Block, BlockHeader, Hash256, Script, Transaction, TxIn, TxOut,
};
use tracing::{error, info};

use super::errors::{ChainParamsError, ChainParamsResult};
use super::network::NetworkId;
use crate::ports::HeaderHasher;

/// Block and coinbase version used by the genesis block.
pub const GENESIS_VERSION: i32 = 1;

/// Integer pushed after the leading zero in the genesis coinbase script.
pub const GENESIS_COINBASE_TAG: i64 = 42;

/// The public knobs the genesis block is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisParams {
    pub timestamp_text: String,
    pub time: u32,
    pub nonce: u32,
    pub pow_limit: U256,
}

impl GenesisParams {
    /// Compact encoding of the limit, stored as the header's `bits`.
    pub fn bits(&self) -> u32 {
        compact_from_target(self.pow_limit)
    }
}

/// Expected identity of a genesis block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisCheckpoint {
    pub hash: Hash256,
    pub merkle_root: Hash256,
}

impl GenesisCheckpoint {
    /// Parse display-order hex constants.
    pub fn from_hex(hash: &str, merkle_root: &str) -> ChainParamsResult<Self> {
        let parse = |field: &'static str, text: &str| {
            Hash256::from_hex(text).map_err(|e| ChainParamsError::InvalidConstant {
                field,
                reason: e.to_string(),
            })
        };
        Ok(Self {
            hash: parse("genesis_hash", hash)?,
            merkle_root: parse("genesis_merkle_root", merkle_root)?,
        })
    }
}

/// A constructed genesis block and its header hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genesis {
    pub block: Block,
    pub hash: Hash256,
}

impl Genesis {
    pub fn merkle_root(&self) -> Hash256 {
        self.block.header.merkle_root
    }
}

/// The single coinbase: script `0 <42> <timestamp text>`, one empty output.
pub fn genesis_coinbase(params: &GenesisParams) -> Transaction {
    let script_sig = Script::new()
        .push_int(0)
        .push_num(GENESIS_COINBASE_TAG)
        .push_slice(params.timestamp_text.as_bytes());

    Transaction {
        version: GENESIS_VERSION,
        time: params.time,
        inputs: vec![TxIn::coinbase(script_sig)],
        outputs: vec![TxOut::empty()],
        lock_time: 0,
    }
}

/// Assemble the genesis block and hash its header. Deterministic.
pub fn build_genesis(params: &GenesisParams, hasher: &dyn HeaderHasher) -> Genesis {
    let mut block = Block {
        header: BlockHeader {
            version: GENESIS_VERSION,
            prev_block_hash: Hash256::zero(),
            merkle_root: Hash256::zero(),
            time: params.time,
            bits: params.bits(),
            nonce: params.nonce,
        },
        transactions: vec![genesis_coinbase(params)],
    };
    block.header.merkle_root = block.build_merkle_root();

    let hash = hasher.header_hash(&block.header);
    Genesis { block, hash }
}

/// Compare a built genesis against its expected identity.
pub fn verify_genesis(
    network: NetworkId,
    genesis: &Genesis,
    expected: &GenesisCheckpoint,
) -> ChainParamsResult<()> {
    if genesis.hash != expected.hash {
        error!(
            %network,
            expected = %expected.hash,
            actual = %genesis.hash,
            "genesis hash mismatch"
        );
        return Err(ChainParamsError::GenesisHashMismatch {
            network,
            expected: expected.hash,
            actual: genesis.hash,
        });
    }

    if genesis.merkle_root() != expected.merkle_root {
        error!(
            %network,
            expected = %expected.merkle_root,
            actual = %genesis.merkle_root(),
            "genesis merkle root mismatch"
        );
        return Err(ChainParamsError::MerkleRootMismatch {
            network,
            expected: expected.merkle_root,
            actual: genesis.merkle_root(),
        });
    }

    Ok(())
}

/// Build, log and (when a checkpoint is given) verify a network's genesis.
pub fn build_verified_genesis(
    network: NetworkId,
    params: &GenesisParams,
    expected: Option<&GenesisCheckpoint>,
    hasher: &dyn HeaderHasher,
) -> ChainParamsResult<Genesis> {
    let genesis = build_genesis(params, hasher);

    info!(
        %network,
        hash = %genesis.hash,
        merkle_root = %genesis.merkle_root(),
        bits = genesis.block.header.bits,
        nonce = genesis.block.header.nonce,
        "built genesis block"
    );

    if let Some(expected) = expected {
        verify_genesis(network, &genesis, expected)?;
    }
    Ok(genesis)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DoubleSha;

    impl HeaderHasher for DoubleSha {
        fn header_hash(&self, header: &BlockHeader) -> Hash256 {
            header.double_sha256()
        }
    }

    fn main_params() -> GenesisParams {
        GenesisParams {
            timestamp_text: "April Fool's Day 2018: How the EU trolled Britain".to_string(),
            time: 1_523_995_200,
            nonce: 55_382,
            pow_limit: U256::MAX >> 16usize,
        }
    }

    const MAIN_MERKLE: &str = "a7cb4c3a69db0dbc49e0964133af2b1898abd9316eaaa1b72636f197578a1d9f";

    #[test]
    fn test_coinbase_script_layout() {
        let tx = genesis_coinbase(&main_params());
        let script = tx.inputs[0].script_sig.as_bytes();
        assert_eq!(&script[..4], &[0x00, 0x01, 0x2a, 49]);
        assert_eq!(&script[4..], main_params().timestamp_text.as_bytes());
        assert!(tx.is_coinbase());
        assert!(tx.outputs[0].is_empty());
    }

    #[test]
    fn test_main_merkle_root_matches_constant() {
        let genesis = build_genesis(&main_params(), &DoubleSha);
        assert_eq!(genesis.merkle_root().to_string(), MAIN_MERKLE);
    }

    #[test]
    fn test_header_fields() {
        let genesis = build_genesis(&main_params(), &DoubleSha);
        let header = &genesis.block.header;
        assert_eq!(header.version, 1);
        assert!(header.prev_block_hash.is_zero());
        assert_eq!(header.time, 1_523_995_200);
        assert_eq!(header.bits, 0x1f00_ffff);
        assert_eq!(header.nonce, 55_382);
        assert_eq!(genesis.block.transactions.len(), 1);
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = build_genesis(&main_params(), &DoubleSha);
        let b = build_genesis(&main_params(), &DoubleSha);
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_knob_changes_hash() {
        let base = build_genesis(&main_params(), &DoubleSha).hash;

        let mut p = main_params();
        p.nonce += 1;
        assert_ne!(build_genesis(&p, &DoubleSha).hash, base);

        let mut p = main_params();
        p.time += 1;
        assert_ne!(build_genesis(&p, &DoubleSha).hash, base);

        let mut p = main_params();
        p.timestamp_text.push('!');
        assert_ne!(build_genesis(&p, &DoubleSha).hash, base);

        let mut p = main_params();
        p.pow_limit = U256::MAX >> 8usize;
        assert_ne!(build_genesis(&p, &DoubleSha).hash, base);
    }

    #[test]
    fn test_verify_rejects_wrong_hash() {
        let genesis = build_genesis(&main_params(), &DoubleSha);
        let expected = GenesisCheckpoint {
            hash: Hash256::new([0x11; 32]),
            merkle_root: genesis.merkle_root(),
        };
        let err = verify_genesis(NetworkId::Main, &genesis, &expected).unwrap_err();
        assert!(matches!(err, ChainParamsError::GenesisHashMismatch { .. }));
        assert!(err.is_integrity_failure());
    }

    #[test]
    fn test_verify_rejects_wrong_merkle_root() {
        let genesis = build_genesis(&main_params(), &DoubleSha);
        let expected = GenesisCheckpoint {
            hash: genesis.hash,
            merkle_root: Hash256::zero(),
        };
        assert!(matches!(
            verify_genesis(NetworkId::Main, &genesis, &expected),
            Err(ChainParamsError::MerkleRootMismatch { .. })
        ));
    }

    #[test]
    fn test_unchecked_build_always_succeeds() {
        let genesis = build_verified_genesis(NetworkId::Testnet, &main_params(), None, &DoubleSha);
        assert!(genesis.is_ok());
    }

    #[test]
    fn test_checkpoint_rejects_bad_hex() {
        assert!(matches!(
            GenesisCheckpoint::from_hex("xyz", MAIN_MERKLE),
            Err(ChainParamsError::InvalidConstant { field: "genesis_hash", .. })
        ));
    }
}
