//! Bootstrap peers: DNS seed entries and hard-coded fixed seeds
//!
//! Fixed seeds are handed out with a `last_seen` between one and two weeks
//! old, sampled per address. A node only needs one or two of them; once
//! connected it learns fresher addresses, and the jitter keeps every node
//! from advertising identical ages for the same compiled-in hosts.

use std::net::{Ipv4Addr, SocketAddrV4};

use tracing::debug;

use crate::ports::{RandomSource, TimeSource};

/// Seconds in one week.
pub const ONE_WEEK_SECS: u64 = 7 * 24 * 60 * 60;

/// Unix timestamp in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Subtract seconds from timestamp (saturating at 0).
    pub fn sub_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_sub(secs))
    }
}

/// A named DNS seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

impl DnsSeed {
    pub const fn new(name: &'static str, host: &'static str) -> Self {
        Self { name, host }
    }
}

/// A bootstrap peer with its advertised recency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerAddress {
    pub addr: SocketAddrV4,
    pub last_seen: Timestamp,
}

impl PeerAddress {
    pub fn ip(&self) -> Ipv4Addr {
        *self.addr.ip()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// IPv4 address of a compiled seed record.
///
/// Records are written as host-order integers whose most significant byte
/// is the first octet; the byte swap puts them into network order.
pub fn seed_record_to_ipv4(record: u32) -> Ipv4Addr {
    Ipv4Addr::from(record.swap_bytes().to_le_bytes())
}

/// Expand raw seed records into peer addresses on `port`.
///
/// The clock is read once per record, so timestamps are not reproducible
/// between calls.
pub fn derive_seeds(
    records: &[u32],
    port: u16,
    clock: &dyn TimeSource,
    rng: &dyn RandomSource,
) -> Vec<PeerAddress> {
    let seeds: Vec<PeerAddress> = records
        .iter()
        .map(|&record| {
            let age = rng.random_below(ONE_WEEK_SECS) + ONE_WEEK_SECS;
            PeerAddress {
                addr: SocketAddrV4::new(seed_record_to_ipv4(record), port),
                last_seen: clock.now().sub_secs(age),
            }
        })
        .collect();

    debug!(count = seeds.len(), port, "derived fixed seeds");
    seeds
}
