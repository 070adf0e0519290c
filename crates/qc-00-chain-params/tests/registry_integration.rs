//! Integration tests for the network registry, driven through the public API.

use std::collections::HashSet;
use std::sync::Arc;

use qc_00_chain_params::domain::constants::main as main_consts;
use qc_00_chain_params::domain::{build_genesis, ONE_WEEK_SECS};
use qc_00_chain_params::{
    global, AddressKind, ArgsFlagSource, BuildContext, ChainParamsApi, ChainParamsError,
    DoubleSha256Hasher, HeaderHasher, NetworkId, NetworkRegistry, ProfileDefinition,
    RandomSource, SystemTimeSource, ThreadRandomSource, TimeSource,
};
use shared_types::{BlockHeader, Hash256};

/// Main's genesis header hashes to the deployed value; everything else
/// falls through to double-SHA-256.
struct DeployedHasher {
    main_header: BlockHeader,
    main_hash: Hash256,
}

impl DeployedHasher {
    fn new() -> Self {
        let genesis = build_genesis(&ProfileDefinition::main().genesis, &DoubleSha256Hasher);
        Self {
            main_header: genesis.block.header,
            main_hash: main_consts::GENESIS_HASH.parse().unwrap(),
        }
    }
}

impl HeaderHasher for DeployedHasher {
    fn header_hash(&self, header: &BlockHeader) -> Hash256 {
        if *header == self.main_header {
            self.main_hash
        } else {
            DoubleSha256Hasher.header_hash(header)
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn build_registry() -> NetworkRegistry {
    init_tracing();
    let hasher = DeployedHasher::new();
    let ctx = BuildContext {
        hasher: &hasher,
        clock: &SystemTimeSource::new(),
        rng: &ThreadRandomSource::new(),
    };
    NetworkRegistry::build(&ctx).unwrap()
}

#[test]
fn test_main_active_after_startup() {
    let registry = build_registry();
    let profile = registry.active_profile();
    assert_eq!(profile.network_id(), NetworkId::Main);
    assert_eq!(profile.message_start(), [0x8c, 0xfc, 0x5a, 0xd3]);
    assert_eq!(profile.genesis_hash().to_string(), main_consts::GENESIS_HASH);
    assert_eq!(
        profile.genesis_merkle_root().to_string(),
        main_consts::GENESIS_MERKLE_ROOT
    );
}

#[test]
fn test_final_selection_wins() {
    let registry = build_registry();
    registry.select(NetworkId::Testnet);
    assert_eq!(registry.active_profile().network_id(), NetworkId::Testnet);
    registry.select(NetworkId::Main);
    assert_eq!(registry.active_profile().network_id(), NetworkId::Main);
    registry.select(NetworkId::Main);
    assert_eq!(registry.active_profile().network_id(), NetworkId::Main);
}

#[test]
fn test_environment_selection_matches_explicit() {
    let explicit = build_registry();
    explicit.select(NetworkId::Testnet);

    let from_env = build_registry();
    assert!(from_env.select_from_environment(true));
    let (a, b) = (from_env.active_profile(), explicit.active_profile());
    assert_eq!(a.network_id(), b.network_id());
    assert_eq!(a.message_start(), b.message_start());
    assert_eq!(a.genesis_hash(), b.genesis_hash());

    assert!(from_env.select_from_environment(false));
    assert_eq!(from_env.active_network(), NetworkId::Main);
}

#[test]
fn test_command_line_selection() {
    let registry = build_registry();
    assert!(registry.select_from_flags(&ArgsFlagSource::new(["-testnet"])));
    assert_eq!(registry.active_network(), NetworkId::Testnet);
    assert!(registry.select_from_flags(&ArgsFlagSource::new(["-testnet=0"])));
    assert_eq!(registry.active_network(), NetworkId::Main);
}

#[test]
fn test_prefixes_distinct_within_each_network() {
    let registry = build_registry();
    for network in NetworkId::ALL {
        let profile = registry.profile(network);
        let prefixes: HashSet<&[u8]> = AddressKind::ALL
            .iter()
            .map(|&kind| profile.base58_prefix(kind))
            .collect();
        assert_eq!(prefixes.len(), AddressKind::COUNT, "{network}");
    }
}

#[test]
fn test_testnet_pubkey_prefix_differs_from_main() {
    let registry = build_registry();
    assert_ne!(
        registry.profile(NetworkId::Main).base58_prefix(AddressKind::PubkeyAddress),
        registry.profile(NetworkId::Testnet).base58_prefix(AddressKind::PubkeyAddress)
    );
}

#[test]
fn test_fixed_seed_ages_within_window() {
    let before = SystemTimeSource::new().now().as_secs();
    let registry = build_registry();
    let after = SystemTimeSource::new().now().as_secs();

    let seeds = registry.profile(NetworkId::Main).fixed_seeds();
    assert_eq!(seeds.len(), 2);
    for seed in seeds {
        let last_seen = seed.last_seen.as_secs();
        assert!(last_seen <= after - ONE_WEEK_SECS);
        assert!(last_seen > before - 2 * ONE_WEEK_SECS);
        assert_eq!(seed.port(), 12501);
    }
}

#[test]
fn test_testnet_genesis_rederived() {
    let registry = build_registry();
    let main = registry.profile(NetworkId::Main);
    let test = registry.profile(NetworkId::Testnet);
    assert_ne!(main.genesis_hash(), test.genesis_hash());
    assert_eq!(
        test.genesis_hash(),
        DoubleSha256Hasher.header_hash(&test.genesis_block().header)
    );
    assert_eq!(test.genesis_block().header.bits, 0x2000_ffff);
}

#[test]
fn test_magic_lookup() {
    let registry = build_registry();
    for network in NetworkId::ALL {
        let magic = registry.profile(network).message_start();
        assert_eq!(registry.network_for_magic(magic), Some(network));
    }
    assert_eq!(registry.network_for_magic([0; 4]), None);
}

#[test]
fn test_plain_double_sha_cannot_build_main() {
    struct Clock;
    impl TimeSource for Clock {
        fn now(&self) -> qc_00_chain_params::Timestamp {
            qc_00_chain_params::Timestamp::new(1_700_000_000)
        }
    }
    struct Rng;
    impl RandomSource for Rng {
        fn random_below(&self, _bound: u64) -> u64 {
            0
        }
    }

    let ctx = BuildContext {
        hasher: &DoubleSha256Hasher,
        clock: &Clock,
        rng: &Rng,
    };
    let err = NetworkRegistry::build(&ctx).unwrap_err();
    assert!(err.is_integrity_failure());
    assert!(matches!(err, ChainParamsError::GenesisHashMismatch { network: NetworkId::Main, .. }));
}

// The only test touching the process-wide handle.
#[test]
fn test_global_handle_lifecycle() {
    assert!(global::registry().is_err());

    let installed = global::install(build_registry()).unwrap();
    installed.select_by_name("test").unwrap();
    assert_eq!(
        global::registry().unwrap().active_profile().data_dir_suffix(),
        "testnet"
    );

    let removed = global::teardown().unwrap();
    assert!(Arc::ptr_eq(&installed, &removed));
    assert!(matches!(
        global::registry(),
        Err(ChainParamsError::RegistryNotInstalled)
    ));
}
