//! Network profiles
//!
//! A [`ProfileDefinition`] is the plain record of a network's constants. The
//! test network is written as the main record plus explicit overrides, so a
//! field added later is inherited unless it is listed. [`NetworkProfile`] is
//! the immutable, fully built result: genesis verified, alert key decoded,
//! fixed seeds derived.

use primitive_types::U256;
use shared_types::{Block, Hash256};

use super::constants::{self, main, testnet};
use super::errors::{ChainParamsError, ChainParamsResult};
use super::genesis::{build_verified_genesis, GenesisCheckpoint, GenesisParams};
use super::network::{AddressKind, Base58Prefixes, MessageStart, NetworkId};
use super::seeds::{derive_seeds, DnsSeed, PeerAddress};
use crate::ports::{HeaderHasher, RandomSource, TimeSource};

/// Expected genesis identity, in display-order hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedGenesis {
    pub hash: &'static str,
    pub merkle_root: &'static str,
}

/// Raw constants of one network, before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDefinition {
    pub network: NetworkId,
    pub message_start: MessageStart,
    pub alert_public_key_hex: &'static str,
    pub default_port: u16,
    pub rpc_port: u16,
    pub genesis: GenesisParams,
    /// `None` re-derives the genesis without asserting its identity.
    pub expected_genesis: Option<ExpectedGenesis>,
    pub base58_prefixes: Base58Prefixes,
    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seed_records: &'static [u32],
    pub pool_max_transactions: u32,
    pub darksend_pool_dummy_address: &'static str,
    pub last_pow_block: u32,
    pub pos_start_block: u32,
    pub data_dir_suffix: &'static str,
}

impl ProfileDefinition {
    pub fn main() -> Self {
        Self {
            network: NetworkId::Main,
            message_start: main::MESSAGE_START,
            alert_public_key_hex: main::ALERT_PUBLIC_KEY,
            default_port: main::DEFAULT_PORT,
            rpc_port: main::RPC_PORT,
            genesis: GenesisParams {
                timestamp_text: constants::GENESIS_TIMESTAMP_TEXT.to_string(),
                time: main::GENESIS_TIME,
                nonce: main::GENESIS_NONCE,
                pow_limit: main::pow_limit(),
            },
            expected_genesis: Some(ExpectedGenesis {
                hash: main::GENESIS_HASH,
                merkle_root: main::GENESIS_MERKLE_ROOT,
            }),
            base58_prefixes: Base58Prefixes::new(
                main::PUBKEY_ADDRESS,
                main::SCRIPT_ADDRESS,
                main::SECRET_KEY,
                main::STEALTH_ADDRESS,
                main::EXT_PUBLIC_KEY,
                main::EXT_SECRET_KEY,
            ),
            dns_seeds: main::DNS_SEEDS.to_vec(),
            fixed_seed_records: &main::FIXED_SEEDS,
            pool_max_transactions: constants::POOL_MAX_TRANSACTIONS,
            darksend_pool_dummy_address: constants::DARKSEND_POOL_DUMMY_ADDRESS,
            last_pow_block: main::LAST_POW_BLOCK,
            pos_start_block: constants::POS_START_BLOCK,
            data_dir_suffix: main::DATA_DIR_SUFFIX,
        }
    }

    /// Main with the test network's overrides applied.
    pub fn testnet() -> Self {
        let base = Self::main();
        Self {
            network: NetworkId::Testnet,
            message_start: testnet::MESSAGE_START,
            alert_public_key_hex: testnet::ALERT_PUBLIC_KEY,
            default_port: testnet::DEFAULT_PORT,
            rpc_port: testnet::RPC_PORT,
            genesis: GenesisParams {
                time: testnet::GENESIS_TIME,
                nonce: testnet::GENESIS_NONCE,
                pow_limit: testnet::pow_limit(),
                ..base.genesis.clone()
            },
            expected_genesis: None,
            base58_prefixes: Base58Prefixes::new(
                testnet::PUBKEY_ADDRESS,
                testnet::SCRIPT_ADDRESS,
                testnet::SECRET_KEY,
                testnet::STEALTH_ADDRESS,
                testnet::EXT_PUBLIC_KEY,
                testnet::EXT_SECRET_KEY,
            ),
            dns_seeds: Vec::new(),
            fixed_seed_records: &testnet::FIXED_SEEDS,
            last_pow_block: testnet::LAST_POW_BLOCK,
            data_dir_suffix: testnet::DATA_DIR_SUFFIX,
            ..base
        }
    }

    pub fn for_network(network: NetworkId) -> Self {
        match network {
            NetworkId::Main => Self::main(),
            NetworkId::Testnet => Self::testnet(),
        }
    }
}

/// Collaborators used while building a profile.
#[derive(Clone, Copy)]
pub struct BuildContext<'a> {
    pub hasher: &'a dyn HeaderHasher,
    pub clock: &'a dyn TimeSource,
    pub rng: &'a dyn RandomSource,
}

/// The immutable constants of one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkProfile {
    network: NetworkId,
    message_start: MessageStart,
    alert_public_key: Vec<u8>,
    default_port: u16,
    rpc_port: u16,
    proof_of_work_limit: U256,
    genesis_block: Block,
    genesis_hash: Hash256,
    base58_prefixes: Base58Prefixes,
    dns_seeds: Vec<DnsSeed>,
    fixed_seeds: Vec<PeerAddress>,
    pool_max_transactions: u32,
    darksend_pool_dummy_address: String,
    last_pow_block: u32,
    pos_start_block: u32,
    data_dir_suffix: String,
}

impl NetworkProfile {
    /// Build a profile from its definition.
    ///
    /// # Errors
    ///
    /// - `GenesisHashMismatch` / `MerkleRootMismatch` when the built genesis
    ///   disagrees with the expected one. Startup must abort.
    /// - `InvalidConstant` when a compiled-in hex constant does not parse.
    pub fn build(def: ProfileDefinition, ctx: &BuildContext<'_>) -> ChainParamsResult<Self> {
        let alert_public_key =
            hex::decode(def.alert_public_key_hex).map_err(|e| ChainParamsError::InvalidConstant {
                field: "alert_public_key",
                reason: e.to_string(),
            })?;

        let checkpoint = def
            .expected_genesis
            .map(|expected| GenesisCheckpoint::from_hex(expected.hash, expected.merkle_root))
            .transpose()?;

        let genesis =
            build_verified_genesis(def.network, &def.genesis, checkpoint.as_ref(), ctx.hasher)?;

        let fixed_seeds = derive_seeds(def.fixed_seed_records, def.default_port, ctx.clock, ctx.rng);

        Ok(Self {
            network: def.network,
            message_start: def.message_start,
            alert_public_key,
            default_port: def.default_port,
            rpc_port: def.rpc_port,
            proof_of_work_limit: def.genesis.pow_limit,
            genesis_block: genesis.block,
            genesis_hash: genesis.hash,
            base58_prefixes: def.base58_prefixes,
            dns_seeds: def.dns_seeds,
            fixed_seeds,
            pool_max_transactions: def.pool_max_transactions,
            darksend_pool_dummy_address: def.darksend_pool_dummy_address.to_string(),
            last_pow_block: def.last_pow_block,
            pos_start_block: def.pos_start_block,
            data_dir_suffix: def.data_dir_suffix.to_string(),
        })
    }

    pub fn network_id(&self) -> NetworkId {
        self.network
    }

    pub fn message_start(&self) -> MessageStart {
        self.message_start
    }

    pub fn alert_public_key(&self) -> &[u8] {
        &self.alert_public_key
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    /// Easiest permitted target.
    pub fn proof_of_work_limit(&self) -> U256 {
        self.proof_of_work_limit
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis_block
    }

    pub fn genesis_hash(&self) -> Hash256 {
        self.genesis_hash
    }

    pub fn genesis_merkle_root(&self) -> Hash256 {
        self.genesis_block.header.merkle_root
    }

    pub fn base58_prefix(&self, kind: AddressKind) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[PeerAddress] {
        &self.fixed_seeds
    }

    pub fn pool_max_transactions(&self) -> u32 {
        self.pool_max_transactions
    }

    pub fn darksend_pool_dummy_address(&self) -> &str {
        &self.darksend_pool_dummy_address
    }

    /// Last height at which proof-of-work blocks are accepted.
    pub fn last_pow_block(&self) -> u32 {
        self.last_pow_block
    }

    pub fn pos_start_block(&self) -> u32 {
        self.pos_start_block
    }

    pub fn is_pow_allowed(&self, height: u32) -> bool {
        height <= self.last_pow_block
    }

    /// Subdirectory of the data directory. Empty on main.
    pub fn data_dir_suffix(&self) -> &str {
        &self.data_dir_suffix
    }
}
