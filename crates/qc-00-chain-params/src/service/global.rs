//! Process-wide registry handle
//!
//! For code that cannot have the registry passed in. The handle must be
//! installed explicitly at startup and can be torn down again; nothing is
//! built lazily.

use std::sync::Arc;

use parking_lot::RwLock;

use super::registry::NetworkRegistry;
use crate::domain::{ChainParamsError, ChainParamsResult};

static REGISTRY: RwLock<Option<Arc<NetworkRegistry>>> = parking_lot::const_rwlock(None);

/// Install the process-wide registry.
///
/// # Errors
///
/// `RegistryAlreadyInstalled` if a registry is installed and not torn down.
pub fn install(registry: NetworkRegistry) -> ChainParamsResult<Arc<NetworkRegistry>> {
    let mut slot = REGISTRY.write();
    if slot.is_some() {
        return Err(ChainParamsError::RegistryAlreadyInstalled);
    }
    let registry = Arc::new(registry);
    *slot = Some(Arc::clone(&registry));
    Ok(registry)
}

/// The installed registry.
///
/// # Errors
///
/// `RegistryNotInstalled` before [`install`] or after [`teardown`].
pub fn registry() -> ChainParamsResult<Arc<NetworkRegistry>> {
    REGISTRY
        .read()
        .as_ref()
        .map(Arc::clone)
        .ok_or(ChainParamsError::RegistryNotInstalled)
}

pub fn is_installed() -> bool {
    REGISTRY.read().is_some()
}

/// Remove the installed registry, returning it. Outstanding handles stay valid.
pub fn teardown() -> Option<Arc<NetworkRegistry>> {
    REGISTRY.write().take()
}
