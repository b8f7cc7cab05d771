//! Core types and fixed-point math for the share pool.

use bytemuck::{Pod, Zeroable};
use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer for intermediate products.
    pub struct U256(4);
}

/// Fixed-point precision (1e18). Shares, reserves and fee rates all use it.
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Maximum fee rate (100%, expressed in WAD).
pub const MAX_FEE_RATE: u64 = WAD as u64;

// ============================================================================
// Fixed-Point Helpers
// ============================================================================

/// Compute `a × b / denominator`, rounded down.
///
/// The product is carried in 256 bits so that two 18-decimal quantities can
/// be multiplied without overflowing before the division.
///
/// # Returns
/// `None` if `denominator` is zero or the quotient does not fit in `u128`
///
/// # Example
/// ```
/// use share_pool_interface::mul_div;
///
/// let huge = u128::MAX / 2;
/// assert_eq!(mul_div(huge, 4, 2), Some(huge * 2));
/// assert_eq!(mul_div(1, 1, 0), None);
/// ```
#[inline]
pub fn mul_div(a: u128, b: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let product = U256::from(a) * U256::from(b);
    let quotient = product.checked_div(U256::from(denominator))?;
    if quotient > U256::from(u128::MAX) {
        return None;
    }
    Some(quotient.as_u128())
}

/// Returns true if `rate` is a valid fee rate (0 ≤ rate ≤ 100%).
#[inline]
pub const fn is_valid_fee_rate(rate: u64) -> bool {
    rate <= MAX_FEE_RATE
}

/// Fee charged on `gross` at `fee_rate` (WAD), rounded down.
#[inline]
pub fn calculate_fee(gross: u128, fee_rate: u64) -> Option<u128> {
    if !is_valid_fee_rate(fee_rate) {
        return None;
    }
    mul_div(gross, fee_rate as u128, WAD)
}

// ============================================================================
// Fee Split Functions
// ============================================================================

/// Split a gross base amount entering the pool into `(net, fee)`.
///
/// The net part is what gets priced into shares; the fee is accrued.
///
/// # Example
/// ```
/// use share_pool_interface::{WAD, calculate_mint_output};
///
/// // 1000 base units at 1% fee
/// let (net, fee) = calculate_mint_output(1000, (WAD / 100) as u64).unwrap();
/// assert_eq!(fee, 10);
/// assert_eq!(net, 990);
/// ```
#[inline]
pub fn calculate_mint_output(gross: u128, mint_fee_rate: u64) -> Option<(u128, u128)> {
    let fee = calculate_fee(gross, mint_fee_rate)?;
    let net = gross.checked_sub(fee)?;
    Some((net, fee))
}

/// Split a gross base amount owed on redemption into `(payout, fee)`.
///
/// # Example
/// ```
/// use share_pool_interface::{WAD, calculate_burn_output};
///
/// // 1000 base units at 0.5% fee
/// let (payout, fee) = calculate_burn_output(1000, (WAD / 200) as u64).unwrap();
/// assert_eq!(fee, 5);
/// assert_eq!(payout, 995);
/// ```
#[inline]
pub fn calculate_burn_output(gross: u128, burn_fee_rate: u64) -> Option<(u128, u128)> {
    let fee = calculate_fee(gross, burn_fee_rate)?;
    let payout = gross.checked_sub(fee)?;
    Some((payout, fee))
}

// ============================================================================
// Share Pricing Functions
// ============================================================================

/// Shares owed for a net base deposit against the pre-deposit snapshot.
///
/// Bootstrap rule: with `supply == 0` one share is issued per unit of net
/// base value, which fixes the initial price at 1:1.
///
/// # Returns
/// `None` if the pool has supply but no reserve (unpriceable) or on overflow.
/// A result of `Some(0)` means the deposit rounded away to nothing.
///
/// # Example
/// ```
/// use share_pool_interface::shares_for_deposit;
///
/// assert_eq!(shares_for_deposit(500, 0, 0), Some(500));
/// // Pool at 2 base per share: 500 base buys 250 shares
/// assert_eq!(shares_for_deposit(500, 2000, 1000), Some(250));
/// ```
#[inline]
pub fn shares_for_deposit(net: u128, reserve: u128, supply: u128) -> Option<u128> {
    if supply == 0 {
        return Some(net);
    }
    mul_div(net, supply, reserve)
}

/// Gross base owed for burning `shares` against the pre-burn snapshot.
///
/// # Returns
/// `None` if `supply` is zero or on overflow.
///
/// # Example
/// ```
/// use share_pool_interface::base_for_shares;
///
/// assert_eq!(base_for_shares(250, 2000, 1000), Some(500));
/// assert_eq!(base_for_shares(1, 1000, 0), None);
/// ```
#[inline]
pub fn base_for_shares(shares: u128, reserve: u128, supply: u128) -> Option<u128> {
    mul_div(shares, reserve, supply)
}

// ============================================================================
// Call Parameters
// ============================================================================

/// Parameters for a mint call.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct MintParams {
    /// Amount of the input asset to pull from the depositor
    pub amount: u128,
    /// Minimum reserve output accepted from the swap step
    /// (ignored when the input asset is the reserve asset)
    pub min_amount_out: u128,
}

impl MintParams {
    /// Size in bytes
    pub const SIZE: usize = core::mem::size_of::<Self>();

    /// Mint parameters for a direct reserve-asset deposit.
    pub const fn direct(amount: u128) -> Self {
        Self { amount, min_amount_out: 0 }
    }
}

/// Parameters for a burn call.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct BurnParams {
    /// Shares to burn from the holder
    pub shares: u128,
    /// Minimum output-asset amount accepted from the swap step
    /// (ignored when paying out in the reserve asset)
    pub min_amount_out: u128,
}

impl BurnParams {
    /// Size in bytes
    pub const SIZE: usize = core::mem::size_of::<Self>();

    /// Burn parameters for a reserve-asset payout.
    pub const fn direct(shares: u128) -> Self {
        Self { shares, min_amount_out: 0 }
    }
}

/// Outcome of a successful mint.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct MintReceipt {
    /// Gross base amount that entered pricing (after any swap)
    pub gross: u128,
    /// Fee accrued
    pub fee: u128,
    /// Shares credited to the recipient
    pub shares: u128,
}

/// Outcome of a successful burn.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct BurnReceipt {
    /// Gross base amount owed before fee
    pub gross: u128,
    /// Fee accrued
    pub fee: u128,
    /// Amount delivered to the recipient, in the output asset
    pub amount_out: u128,
}
