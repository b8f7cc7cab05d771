//! Share pricing.
//!
//! Converts between shares and base-asset amounts using a snapshot taken
//! before the operation moves any funds or shares. Pricing against a
//! post-transfer reserve would let a depositor's own funds dilute their price.

use share_pool_interface::{base_for_shares, shares_for_deposit};

use crate::SharePoolError;
use crate::reserve::PoolSnapshot;

/// Shares owed for `net` base value deposited against `snapshot`.
///
/// # Errors
/// `ZeroShares` if the deposit rounds down to nothing, or if shares exist
/// but the spendable reserve is zero (they cannot be priced).
pub fn price_mint(net: u128, snapshot: &PoolSnapshot) -> Result<u128, SharePoolError> {
    if snapshot.supply > 0 && snapshot.reserve == 0 {
        return Err(SharePoolError::ZeroShares);
    }
    let shares = shares_for_deposit(net, snapshot.reserve, snapshot.supply)
        .ok_or(SharePoolError::ArithmeticOverflow)?;
    if shares == 0 {
        return Err(SharePoolError::ZeroShares);
    }
    Ok(shares)
}

/// Gross base owed for burning `shares` against `snapshot`.
///
/// # Errors
/// - `EmptyPool` if there is no supply to redeem against
/// - `ZeroAmount` if the redemption rounds down to nothing
pub fn price_burn(shares: u128, snapshot: &PoolSnapshot) -> Result<u128, SharePoolError> {
    if snapshot.supply == 0 {
        return Err(SharePoolError::EmptyPool);
    }
    let gross = base_for_shares(shares, snapshot.reserve, snapshot.supply)
        .ok_or(SharePoolError::ArithmeticOverflow)?;
    if gross == 0 {
        return Err(SharePoolError::ZeroAmount);
    }
    Ok(gross)
}
