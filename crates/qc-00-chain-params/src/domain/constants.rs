//! Compiled-in network constants
//!
//! Values that identify each network on the wire and in its address space.
//! Changing any of them forks the node off the deployed network.

use primitive_types::U256;

use super::network::MessageStart;
use super::seeds::DnsSeed;

// =============================================================================
// SHARED
// =============================================================================

/// Headline embedded in the genesis coinbase of both networks.
pub const GENESIS_TIMESTAMP_TEXT: &str = "April Fool's Day 2018: How the EU trolled Britain";

pub const POOL_MAX_TRANSACTIONS: u32 = 3;

pub const POS_START_BLOCK: u32 = 3333;

pub const DARKSEND_POOL_DUMMY_ADDRESS: &str = "";

// =============================================================================
// MAIN
// =============================================================================

pub mod main {
    use super::*;

    pub const MESSAGE_START: MessageStart = [0x8c, 0xfc, 0x5a, 0xd3];

    pub const ALERT_PUBLIC_KEY: &str = "0485ac8fc2147631e512c7f4e8c90333910e8ebad7b757366de376a1ad7ea66e11b58cce91cb881720dc9ce20e9f6057dbdc6d7f7dfe74658de8234465d19d43f1";

    // Declared upstream as 78037/78036 and truncated to 16 bits on use.
    pub const DEFAULT_PORT: u16 = 12501;
    pub const RPC_PORT: u16 = 12500;

    pub const POW_LIMIT_SHIFT: usize = 16;

    pub fn pow_limit() -> U256 {
        U256::MAX >> POW_LIMIT_SHIFT
    }

    pub const GENESIS_TIME: u32 = 1_523_995_200;
    pub const GENESIS_NONCE: u32 = 55_382;

    pub const GENESIS_HASH: &str =
        "063499918eec5efad8464fd5643b2844429efa7cb3240a2dc1f39645c564b69c";
    pub const GENESIS_MERKLE_ROOT: &str =
        "a7cb4c3a69db0dbc49e0964133af2b1898abd9316eaaa1b72636f197578a1d9f";

    pub const PUBKEY_ADDRESS: u8 = 70;
    pub const SCRIPT_ADDRESS: u8 = 19;
    pub const SECRET_KEY: u8 = 30;
    pub const STEALTH_ADDRESS: u8 = 140;
    pub const EXT_PUBLIC_KEY: [u8; 4] = [0x04, 0x88, 0xB2, 0x1E];
    pub const EXT_SECRET_KEY: [u8; 4] = [0x04, 0x88, 0xAD, 0xE4];

    pub const DNS_SEEDS: [DnsSeed; 2] = [
        DnsSeed::new("1", "140.82.34.146"),
        DnsSeed::new("2", "207.148.117.114"),
    ];

    /// 140.82.34.146, 207.148.117.114
    pub const FIXED_SEEDS: [u32; 2] = [0x8c52_2292, 0xcf94_7572];

    pub const LAST_POW_BLOCK: u32 = 200_000;

    pub const DATA_DIR_SUFFIX: &str = "";
}

// =============================================================================
// TEST
// =============================================================================

pub mod testnet {
    use super::*;

    pub const MESSAGE_START: MessageStart = [0xc3, 0xdf, 0xb8, 0x5f];

    pub const ALERT_PUBLIC_KEY: &str = "04a5da3e2f20d1e8b49b9b675b69f2a27f62b65af88108cb02135df9f5b5a83cfda167f64867582cc79e2e899c157c7a71f2d23f74e83089f4ed9e093f3dc23ea0";

    // Declared upstream as 78837/78836 and truncated to 16 bits on use.
    pub const DEFAULT_PORT: u16 = 13301;
    pub const RPC_PORT: u16 = 13300;

    pub const POW_LIMIT_SHIFT: usize = 8;

    pub fn pow_limit() -> U256 {
        U256::MAX >> POW_LIMIT_SHIFT
    }

    pub const GENESIS_TIME: u32 = 1_523_995_200;
    pub const GENESIS_NONCE: u32 = 44;

    pub const PUBKEY_ADDRESS: u8 = 25;
    pub const SCRIPT_ADDRESS: u8 = 19;
    pub const SECRET_KEY: u8 = 27;
    pub const STEALTH_ADDRESS: u8 = 80;
    pub const EXT_PUBLIC_KEY: [u8; 4] = [0x04, 0x35, 0x87, 0xCF];
    pub const EXT_SECRET_KEY: [u8; 4] = [0x04, 0x35, 0x83, 0x94];

    pub const FIXED_SEEDS: [u32; 0] = [];

    /// Proof-of-work is never switched off.
    pub const LAST_POW_BLOCK: u32 = 0x7fff_ffff;

    pub const DATA_DIR_SUFFIX: &str = "testnet";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_differs_between_networks() {
        assert_ne!(main::MESSAGE_START, testnet::MESSAGE_START);
    }

    #[test]
    fn test_ports_differ_between_networks() {
        assert_ne!(main::DEFAULT_PORT, testnet::DEFAULT_PORT);
        assert_ne!(main::RPC_PORT, testnet::RPC_PORT);
        assert_eq!(main::DEFAULT_PORT, (78_037u32 & 0xffff) as u16);
        assert_eq!(testnet::RPC_PORT, (78_836u32 & 0xffff) as u16);
    }

    #[test]
    fn test_testnet_limit_is_looser() {
        assert!(testnet::pow_limit() > main::pow_limit());
    }

    #[test]
    fn test_alert_keys_are_uncompressed_points() {
        for key in [main::ALERT_PUBLIC_KEY, testnet::ALERT_PUBLIC_KEY] {
            assert_eq!(key.len(), 130);
            assert!(key.starts_with("04"));
        }
    }
}
