//! # Driving Ports (Inbound API)
//!
//! The read-mostly access point the rest of the node uses to find out which
//! network it is on.

use crate::domain::{NetworkId, NetworkProfile};

/// Primary API for selecting and reading the active network profile.
///
/// # Example
///
/// ```rust,ignore
/// use qc_00_chain_params::ChainParamsApi;
///
/// fn magic<T: ChainParamsApi>(params: &T) -> [u8; 4] {
///     params.active_profile().message_start()
/// }
/// ```
pub trait ChainParamsApi {
    /// The currently selected profile. Never fails.
    fn active_profile(&self) -> &NetworkProfile;

    /// Switch the active selection.
    fn select(&self, network: NetworkId);

    /// Select Test when `use_testnet` is set, Main otherwise. Always succeeds.
    fn select_from_environment(&self, use_testnet: bool) -> bool;
}
