//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driving Ports (Inbound):** the selection and read API exposed to the node
//! - **Driven Ports (Outbound):** clock, randomness, header hashing and flags

pub mod inbound;
pub mod outbound;

pub use inbound::ChainParamsApi;
pub use outbound::{FlagSource, HeaderHasher, RandomSource, TimeSource};
