//! Reserve tracking.
//!
//! The pool never caches its reserve. Every operation observes the raw
//! balance from the reserve ledger and subtracts the accrued fee at the
//! moment of use, because other parties can move the reserve asset into or
//! out of the pool between operations.

use pinocchio::pubkey::Pubkey;

use crate::SharePoolError;
use crate::interfaces::AssetLedger;

/// Reserve and supply observed at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolSnapshot {
    /// Raw reserve-asset balance held by the pool
    pub raw_reserve: u128,
    /// Spendable reserve (raw − accrued fee)
    pub reserve: u128,
    /// Total shares outstanding
    pub supply: u128,
}

/// `raw − accrued_fee`.
///
/// # Errors
/// `InvalidReserveState` if the accrued fee exceeds the raw balance.
#[inline]
pub fn spendable_reserve(raw_reserve: u128, accrued_fee: u128) -> Result<u128, SharePoolError> {
    raw_reserve
        .checked_sub(accrued_fee)
        .ok_or(SharePoolError::InvalidReserveState)
}

/// Observe the pool's raw reserve balance and combine it with the ledger
/// supply into a pricing snapshot.
pub fn snapshot(
    reserve: &dyn AssetLedger,
    pool_address: &Pubkey,
    accrued_fee: u128,
    supply: u128,
) -> Result<PoolSnapshot, SharePoolError> {
    let raw_reserve = reserve.balance_of(pool_address);
    Ok(PoolSnapshot {
        raw_reserve,
        reserve: spendable_reserve(raw_reserve, accrued_fee)?,
        supply,
    })
}
