//! The network registry: both built profiles plus the active selection.

use parking_lot::RwLock;
use tracing::{info, warn};

use super::config::RegistryConfig;
use crate::domain::{
    BuildContext, ChainParamsResult, MessageStart, NetworkId, NetworkProfile, ProfileDefinition,
};
use crate::ports::{ChainParamsApi, FlagSource};

/// Name of the command-line flag that selects the test network.
pub const TESTNET_FLAG: &str = "testnet";

/// Owns one immutable profile per network and tracks which one is active.
///
/// Main is active after construction. Switching takes a short write lock;
/// readers never observe a half-switched state.
#[derive(Debug)]
pub struct NetworkRegistry {
    main: NetworkProfile,
    testnet: NetworkProfile,
    active: RwLock<NetworkId>,
}

impl NetworkRegistry {
    /// Build both profiles. Any integrity failure aborts the whole build.
    pub fn build(ctx: &BuildContext<'_>) -> ChainParamsResult<Self> {
        let main = NetworkProfile::build(ProfileDefinition::main(), ctx)?;
        let testnet = NetworkProfile::build(ProfileDefinition::testnet(), ctx)?;
        Ok(Self {
            main,
            testnet,
            active: RwLock::new(NetworkId::Main),
        })
    }

    /// Profile of a specific network, regardless of the selection.
    pub fn profile(&self, network: NetworkId) -> &NetworkProfile {
        match network {
            NetworkId::Main => &self.main,
            NetworkId::Testnet => &self.testnet,
        }
    }

    pub fn active_network(&self) -> NetworkId {
        *self.active.read()
    }

    pub(crate) fn set_active(&self, network: NetworkId) {
        let previous = std::mem::replace(&mut *self.active.write(), network);
        info!(from = %previous, to = %network, "selected network");
    }

    /// Select by name (`main`, `mainnet`, `test`, `testnet`).
    ///
    /// # Errors
    ///
    /// `UnknownNetwork` when no profile is registered under `name`. The
    /// selection is left unchanged.
    pub fn select_by_name(&self, name: &str) -> ChainParamsResult<NetworkId> {
        let network = name.parse::<NetworkId>().map_err(|e| {
            warn!(name, "unknown network name");
            e
        })?;
        self.select(network);
        Ok(network)
    }

    /// Select from the `-testnet` command-line flag.
    pub fn select_from_flags(&self, flags: &dyn FlagSource) -> bool {
        self.select_from_environment(flags.read_bool_flag(TESTNET_FLAG, false))
    }

    /// Select the network named by `config`, falling back to its flag.
    pub fn apply_config(&self, config: &RegistryConfig, flags: &dyn FlagSource) -> NetworkId {
        let network = match config.network {
            Some(network) => network,
            None if flags.read_bool_flag(&config.testnet_flag, false) => NetworkId::Testnet,
            None => NetworkId::Main,
        };
        self.select(network);
        network
    }

    /// Network whose wire messages start with `magic`.
    pub fn network_for_magic(&self, magic: MessageStart) -> Option<NetworkId> {
        NetworkId::ALL
            .into_iter()
            .find(|&network| self.profile(network).message_start() == magic)
    }
}
