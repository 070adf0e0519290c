//! Network identifiers and address-encoding prefixes

use std::fmt;
use std::str::FromStr;

use super::errors::ChainParamsError;

/// The closed set of networks a node can join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NetworkId {
    Main,
    Testnet,
}

impl NetworkId {
    /// Every registered network, in registry order.
    pub const ALL: [NetworkId; 2] = [NetworkId::Main, NetworkId::Testnet];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Testnet => "test",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkId {
    type Err = ChainParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Self::Main),
            "test" | "testnet" => Ok(Self::Testnet),
            _ => Err(ChainParamsError::UnknownNetwork(s.to_string())),
        }
    }
}

/// Four framing bytes prefixed to every wire message.
pub type MessageStart = [u8; 4];

/// Kinds of base58-encoded payloads, each with its own version prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    StealthAddress,
    ExtPublicKey,
    ExtSecretKey,
}

impl AddressKind {
    pub const COUNT: usize = 6;

    pub const ALL: [AddressKind; Self::COUNT] = [
        AddressKind::PubkeyAddress,
        AddressKind::ScriptAddress,
        AddressKind::SecretKey,
        AddressKind::StealthAddress,
        AddressKind::ExtPublicKey,
        AddressKind::ExtSecretKey,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Version prefixes for every `AddressKind` of one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base58Prefixes {
    entries: [Vec<u8>; AddressKind::COUNT],
}

impl Base58Prefixes {
    pub fn new(
        pubkey_address: u8,
        script_address: u8,
        secret_key: u8,
        stealth_address: u8,
        ext_public_key: [u8; 4],
        ext_secret_key: [u8; 4],
    ) -> Self {
        Self {
            entries: [
                vec![pubkey_address],
                vec![script_address],
                vec![secret_key],
                vec![stealth_address],
                ext_public_key.to_vec(),
                ext_secret_key.to_vec(),
            ],
        }
    }

    pub fn get(&self, kind: AddressKind) -> &[u8] {
        &self.entries[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (AddressKind, &[u8])> {
        AddressKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }

    /// True when no two kinds share a prefix, so a decoded payload always
    /// identifies its kind.
    pub fn is_unambiguous(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(i, a)| self.entries[i + 1..].iter().all(|b| a != b))
    }

    /// Kind whose prefix the decoded payload starts with.
    pub fn kind_of(&self, payload: &[u8]) -> Option<AddressKind> {
        // Longest prefixes first so a 4-byte extended key prefix wins over a
        // single-byte one sharing its first byte.
        let mut candidates: Vec<_> = self.iter().collect();
        candidates.sort_by_key(|(_, prefix)| std::cmp::Reverse(prefix.len()));
        candidates
            .into_iter()
            .find(|(_, prefix)| payload.starts_with(prefix))
            .map(|(kind, _)| kind)
    }
}
