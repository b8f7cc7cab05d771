//! Reentrancy lock.
//!
//! Every state-mutating entry point holds a [`LockGuard`] for its whole
//! duration. External calls made while the guard is held (asset transfers,
//! swaps, staking hooks) can run arbitrary code; if that code calls back
//! into a mutating entry point of the same pool it is rejected immediately.

use core::cell::Cell;

use pinocchio_log::log;

use crate::SharePoolError;

/// Single-writer lock for one pool instance.
#[derive(Debug, Default)]
pub struct ReentrancyLock {
    locked: Cell<bool>,
}

/// Releases the lock when dropped, including on early return.
#[derive(Debug)]
pub struct LockGuard<'a> {
    lock: &'a ReentrancyLock,
}

impl ReentrancyLock {
    /// Create an unlocked lock.
    pub const fn new() -> Self {
        Self { locked: Cell::new(false) }
    }

    /// Whether a mutating operation is in progress.
    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    /// Take the lock, failing with `Reentrancy` if it is already held.
    pub fn enter(&self) -> Result<LockGuard<'_>, SharePoolError> {
        if self.locked.replace(true) {
            log!("reentrant call rejected");
            return Err(SharePoolError::Reentrancy);
        }
        Ok(LockGuard { lock: self })
    }
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        self.lock.locked.set(false);
    }
}
