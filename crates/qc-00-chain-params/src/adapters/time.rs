use crate::domain::Timestamp;
use crate::ports::TimeSource;

/// Production time source using the system clock.
///
/// For testing, use `FixedTimeSource` from the test utilities.
///
/// # Example
///
/// ```rust
/// use qc_00_chain_params::adapters::SystemTimeSource;
/// use qc_00_chain_params::ports::TimeSource;
///
/// let time_source = SystemTimeSource::new();
/// assert!(time_source.now().as_secs() > 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl SystemTimeSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();

        Timestamp::new(duration.as_secs())
    }
}
