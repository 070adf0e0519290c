//! Error types for the chain parameters subsystem

use shared_types::Hash256;

use super::NetworkId;

/// Chain parameter errors.
///
/// `GenesisHashMismatch` and `MerkleRootMismatch` are integrity failures: the
/// binary disagrees with itself about which network it belongs to, and the
/// caller is expected to abort startup. `UnknownNetwork` is a programming
/// error in whoever supplied the name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainParamsError {
    #[error("Genesis hash mismatch on {network}: expected {expected}, computed {actual}")]
    GenesisHashMismatch {
        network: NetworkId,
        expected: Hash256,
        actual: Hash256,
    },

    #[error("Genesis merkle root mismatch on {network}: expected {expected}, computed {actual}")]
    MerkleRootMismatch {
        network: NetworkId,
        expected: Hash256,
        actual: Hash256,
    },

    #[error("Invalid compiled-in constant {field}: {reason}")]
    InvalidConstant { field: &'static str, reason: String },

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Network registry not installed")]
    RegistryNotInstalled,

    #[error("Network registry already installed")]
    RegistryAlreadyInstalled,
}

impl ChainParamsError {
    /// Whether startup must abort on this error.
    pub fn is_integrity_failure(&self) -> bool {
        matches!(
            self,
            Self::GenesisHashMismatch { .. } | Self::MerkleRootMismatch { .. }
        )
    }
}

/// Result type for chain parameter operations
pub type ChainParamsResult<T> = Result<T, ChainParamsError>;
