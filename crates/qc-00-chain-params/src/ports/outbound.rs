//! # Driven Ports (Outbound SPI)
//!
//! These are the collaborators this subsystem **requires** from the host
//! application: a clock, an entropy source, the network's block-header hash
//! and command-line flag lookup.

use shared_types::{BlockHeader, Hash256};

use crate::domain::Timestamp;

/// Abstract interface for reading the wall clock.
///
/// Enables deterministic testing by injecting controllable time sources.
/// Production implementations use system time; tests use fixed timestamps.
pub trait TimeSource: Send + Sync {
    /// Get the current timestamp.
    fn now(&self) -> Timestamp;
}

/// Abstract interface for uniform random numbers.
pub trait RandomSource: Send + Sync {
    /// Uniform value in `[0, bound)`. Returns 0 when `bound` is 0.
    fn random_below(&self, bound: u64) -> u64;
}

/// The network's block identity hash.
///
/// Each chain picks its own header hash function; genesis verification
/// compares whatever this returns against the compiled-in expectation.
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct X11Hasher;
///
/// impl HeaderHasher for X11Hasher {
///     fn header_hash(&self, header: &BlockHeader) -> Hash256 {
///         Hash256::new(x11::digest(&header.encode()))
///     }
/// }
/// ```
pub trait HeaderHasher: Send + Sync {
    fn header_hash(&self, header: &BlockHeader) -> Hash256;
}

/// Boolean command-line flag lookup.
pub trait FlagSource {
    /// Value of flag `name` (without leading dashes), or `default` when unset.
    fn read_bool_flag(&self, name: &str, default: bool) -> bool;
}
