//! `ChainParamsApi` implementation for the registry.

use super::registry::NetworkRegistry;
use crate::domain::{NetworkId, NetworkProfile};
use crate::ports::ChainParamsApi;

impl ChainParamsApi for NetworkRegistry {
    fn active_profile(&self) -> &NetworkProfile {
        self.profile(self.active_network())
    }

    fn select(&self, network: NetworkId) {
        self.set_active(network);
    }

    fn select_from_environment(&self, use_testnet: bool) -> bool {
        let network = if use_testnet {
            NetworkId::Testnet
        } else {
            NetworkId::Main
        };
        self.select(network);
        true
    }
}
