//! # Adapters Layer
//!
//! Production implementations of the driven ports.

pub mod flags;
pub mod hasher;
pub mod random;
pub mod time;

pub use flags::{interpret_bool, ArgsFlagSource, EnvFlagSource, ENV_FLAG_PREFIX};
pub use hasher::DoubleSha256Hasher;
pub use random::ThreadRandomSource;
pub use time::SystemTimeSource;
