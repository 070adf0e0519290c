//! Registry configuration
//!
//! Defaults can be overridden from the environment:
//!
//! - `QC_NETWORK`: `main`, `mainnet`, `test` or `testnet`
//! - `QC_TESTNET_FLAG`: name of the flag that selects the test network

use tracing::{info, warn};

use super::registry::TESTNET_FLAG;
use crate::domain::NetworkId;

pub const NETWORK_ENV: &str = "QC_NETWORK";
pub const TESTNET_FLAG_ENV: &str = "QC_TESTNET_FLAG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Flag consulted when no network is configured explicitly.
    pub testnet_flag: String,
    /// Explicit network; wins over the flag.
    pub network: Option<NetworkId>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            testnet_flag: TESTNET_FLAG.to_string(),
            network: None,
        }
    }
}

impl RegistryConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup(NETWORK_ENV) {
            match name.parse::<NetworkId>() {
                Ok(network) => {
                    info!(%network, "network configured from environment");
                    config.network = Some(network);
                }
                Err(_) => warn!(value = %name, "{NETWORK_ENV} names no known network, ignoring"),
            }
        }

        if let Some(flag) = lookup(TESTNET_FLAG_ENV) {
            let flag = flag.trim();
            if !flag.is_empty() {
                config.testnet_flag = flag.trim_start_matches('-').to_string();
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::from_lookup(lookup(&[]));
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.testnet_flag, "testnet");
        assert_eq!(config.network, None);
    }

    #[test]
    fn test_network_override() {
        let config = RegistryConfig::from_lookup(lookup(&[("QC_NETWORK", "TestNet")]));
        assert_eq!(config.network, Some(NetworkId::Testnet));
    }

    #[test]
    fn test_invalid_network_ignored() {
        let config = RegistryConfig::from_lookup(lookup(&[("QC_NETWORK", "regtest")]));
        assert_eq!(config.network, None);
    }

    #[test]
    fn test_flag_name_override() {
        let config = RegistryConfig::from_lookup(lookup(&[("QC_TESTNET_FLAG", "--usetest")]));
        assert_eq!(config.testnet_flag, "usetest");

        let blank = RegistryConfig::from_lookup(lookup(&[("QC_TESTNET_FLAG", "  ")]));
        assert_eq!(blank.testnet_flag, "testnet");
    }
}
