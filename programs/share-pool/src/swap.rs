//! Swap bridge.
//!
//! Converts non-reserve assets into the reserve before pricing (mint) and the
//! reserve into the requested output asset after pricing (burn). The router
//! always receives an explicit minimum output from the caller.
//!
//! # Received-Balance Clamp
//!
//! Assets may deliver less than requested (transfer fees, rounding). Pull-ins
//! therefore measure the pool's balance before and after the transfer and
//! only ever approve or credit what actually arrived:
//!
//! ```text
//! received = min(requested, balance_after − balance_before)
//! ```

use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;

use crate::interfaces::{AssetLedger, SwapRequest, SwapRouter};
use crate::{PoolState, SharePoolConfig, SharePoolError};

/// Non-reserve asset plus the router that converts it.
pub struct SwapLeg<'a> {
    /// Ledger of the non-reserve asset
    pub asset: &'a mut dyn AssetLedger,
    /// Router performing the conversion
    pub router: &'a mut dyn SwapRouter,
}

impl SwapLeg<'_> {
    /// Asset and router addresses of this leg.
    pub fn identities(&self) -> (Pubkey, Pubkey) {
        (self.asset.asset(), self.router.address())
    }
}

/// Validate the router against the configured one.
pub fn require_router(config: &SharePoolConfig, router: &Pubkey) -> Result<(), SharePoolError> {
    if config.swap_router == Pubkey::default() || *router != config.swap_router {
        log!("swap: router does not match configured router");
        return Err(SharePoolError::InvalidSwapRouter);
    }
    Ok(())
}

/// Validate a mint-side swap leg: approved, non-reserve input asset and the
/// configured router.
pub fn validate_input_leg(
    state: &PoolState,
    asset: &Pubkey,
    router: &Pubkey,
) -> Result<(), SharePoolError> {
    if *asset == state.config.reserve_asset {
        return Err(SharePoolError::InvalidReserveAsset);
    }
    if let Err(e) = state.require_approved_asset(asset) {
        log!("mint: approved asset only");
        return Err(e);
    }
    require_router(&state.config, router)
}

/// Validate a burn-side swap leg: non-reserve output asset and the configured
/// router. Output assets need not be approved.
pub fn validate_output_leg(
    config: &SharePoolConfig,
    asset: &Pubkey,
    router: &Pubkey,
) -> Result<(), SharePoolError> {
    if *asset == config.reserve_asset {
        return Err(SharePoolError::InvalidReserveAsset);
    }
    require_router(config, router)
}

/// Pull `requested` from `from` into the pool and return what arrived.
pub fn pull_in(
    ledger: &mut dyn AssetLedger,
    from: &Pubkey,
    pool_address: &Pubkey,
    requested: u128,
) -> Result<u128, SharePoolError> {
    let before = ledger.balance_of(pool_address);
    ledger.transfer_in(from, pool_address, requested)?;
    let after = ledger.balance_of(pool_address);

    let delivered = after
        .checked_sub(before)
        .ok_or(SharePoolError::AssetTransferFailed)?;
    Ok(delivered.min(requested))
}

/// Approve the router for `amount_in` and swap it from `token_in` to
/// `token_out`, enforcing `min_amount_out`.
fn swap(
    config: &SharePoolConfig,
    input: &mut dyn AssetLedger,
    router: &mut dyn SwapRouter,
    token_out: Pubkey,
    amount_in: u128,
    min_amount_out: u128,
) -> Result<u128, SharePoolError> {
    let pool_address = config.pool_address;
    input.approve(&pool_address, &router.address(), amount_in)?;

    let request = SwapRequest {
        token_in: input.asset(),
        token_out,
        amount_in,
        min_amount_out,
        fee_tier: config.swap_fee_tier,
    };
    let amount_out = router.swap_exact_in(&pool_address, &request)?;

    if amount_out < min_amount_out {
        log!("swap: output below minimum");
        return Err(SharePoolError::SlippageExceeded);
    }
    Ok(amount_out)
}

/// Pull the input asset from `depositor` and convert what arrived into the
/// reserve asset. Returns the reserve amount bought (the mint's gross).
///
/// The router's reported output must actually have reached the pool's
/// reserve balance.
pub fn swap_into_reserve(
    config: &SharePoolConfig,
    reserve: &dyn AssetLedger,
    leg: SwapLeg<'_>,
    depositor: &Pubkey,
    requested: u128,
    min_amount_out: u128,
) -> Result<u128, SharePoolError> {
    let SwapLeg { asset, router } = leg;

    let received = pull_in(asset, depositor, &config.pool_address, requested)?;
    if received == 0 {
        return Err(SharePoolError::ZeroAmount);
    }

    let reserve_before = reserve.balance_of(&config.pool_address);
    let amount_out = swap(config, asset, router, config.reserve_asset, received, min_amount_out)?;
    let reserve_after = reserve.balance_of(&config.pool_address);

    if reserve_after.saturating_sub(reserve_before) < amount_out {
        log!("swap: router output not delivered");
        return Err(SharePoolError::AssetTransferFailed);
    }
    Ok(amount_out)
}

/// Convert `amount` of the reserve into the leg's output asset and deliver it
/// to `recipient`. Returns the output amount delivered.
pub fn swap_out_of_reserve(
    config: &SharePoolConfig,
    reserve: &mut dyn AssetLedger,
    leg: SwapLeg<'_>,
    recipient: &Pubkey,
    amount: u128,
    min_amount_out: u128,
) -> Result<u128, SharePoolError> {
    let SwapLeg { asset, router } = leg;

    let amount_out = swap(config, reserve, router, asset.asset(), amount, min_amount_out)?;
    asset.transfer_out(&config.pool_address, recipient, amount_out)?;
    Ok(amount_out)
}
