//! # Service Layer
//!
//! The registry that owns both network profiles and the active selection,
//! its configuration, and an optional process-wide handle.

mod api;
pub mod config;
pub mod global;
pub mod registry;

pub use config::{RegistryConfig, NETWORK_ENV, TESTNET_FLAG_ENV};
pub use registry::{NetworkRegistry, TESTNET_FLAG};
