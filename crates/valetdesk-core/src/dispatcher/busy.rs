//! Per-screen in-flight flag.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Result, ValetError};

/// Boolean guard that allows one action at a time.
#[derive(Debug, Default)]
pub struct BusyFlag(AtomicBool);

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Claim the flag until the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// * `ValetError::Busy` - When another guard is still alive
    pub fn try_acquire(&self) -> Result<BusyGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| BusyGuard(self))
            .map_err(|_| ValetError::Busy)
    }
}

/// Releases the flag on drop, including when the action's future is dropped
/// mid-request.
#[derive(Debug)]
pub struct BusyGuard<'a>(&'a BusyFlag);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        (self.0).0.store(false, Ordering::Release);
    }
}
