//! Burn instruction handler.
//!
//! Pool prices the shares against the pre-burn snapshot, enforces the
//! collateral floor, accrues the burn fee, destroys the shares and pays the
//! net amount out in the reserve asset or, through the swap bridge, in
//! another asset.

use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;
use share_pool_interface::{BurnParams, BurnReceipt};

use crate::events::{SharesBurnedEvent, emit_event};
use crate::fees::{accrue_burn, split_burn};
use crate::interfaces::{AssetLedger, CollateralRegistry};
use crate::pricing::price_burn;
use crate::solvency::enforce_floor;
use crate::swap::{SwapLeg, swap_out_of_reserve, validate_output_leg};
use crate::{SharePool, SharePoolError};

/// Accounts for the Burn instruction.
pub struct BurnAccounts<'a> {
    /// Caller; the shares are burned from this holder
    pub holder: Pubkey,
    /// Receives the payout
    pub recipient: Pubkey,
    /// Reserve asset ledger
    pub reserve: &'a mut dyn AssetLedger,
    /// Output asset and router, when paying out a non-reserve asset
    pub swap: Option<SwapLeg<'a>>,
    /// Source of the collateral floor
    pub registry: &'a dyn CollateralRegistry,
}

/// Process a burn.
pub fn process_burn(
    pool: &SharePool,
    accounts: BurnAccounts<'_>,
    params: BurnParams,
) -> Result<BurnReceipt, SharePoolError> {
    pool.require_allowed(&accounts.holder)?;
    burn_shares(pool, accounts, params)
}

/// Burn without the allowlist check (the caller has already been admitted).
///
/// 1. Validates gates, the reserve asset and (if present) the swap leg
/// 2. Snapshots reserve and supply before the shares are removed
/// 3. Prices the shares; checks the collateral floor with a fresh registry read
/// 4. Splits the burn fee off the gross amount
/// 5. Accrues the fee and burns the shares
/// 6. Pays out the net amount (swapping if requested), emits `SharesBurned`
pub(crate) fn burn_shares(
    pool: &SharePool,
    accounts: BurnAccounts<'_>,
    params: BurnParams,
) -> Result<BurnReceipt, SharePoolError> {
    let BurnAccounts {
        holder,
        recipient,
        reserve,
        swap,
        registry,
    } = accounts;

    let reserve_asset = reserve.asset();
    let leg = swap.as_ref().map(SwapLeg::identities);

    let (config, balance) = pool.try_map(|state| {
        state.config.require_active()?;
        state.config.require_reserve_asset(&reserve_asset)?;
        if let Some((asset, router)) = &leg {
            validate_output_leg(&state.config, asset, router)?;
        }
        Ok((state.config, state.ledger.balance_of(&holder)))
    })?;

    if params.shares == 0 {
        log!("burn: shares must be non-zero");
        return Err(SharePoolError::ZeroAmount);
    }

    // Price against the pool as it stood before these shares are removed
    let snapshot = pool.snapshot(&*reserve)?;
    if snapshot.supply == 0 {
        return Err(SharePoolError::EmptyPool);
    }
    if balance < params.shares {
        log!("burn: insufficient shares");
        return Err(SharePoolError::InsufficientShares);
    }

    let gross = price_burn(params.shares, &snapshot)?;
    enforce_floor(registry, snapshot.reserve, gross)?;
    let split = split_burn(&config, gross)?;

    pool.try_inspect_mut(|state| {
        accrue_burn(&mut state.config, &split)?;
        state.ledger.burn(&holder, params.shares)?;

        state.config.total_shares_burned = state
            .config
            .total_shares_burned
            .checked_add(params.shares)
            .ok_or(SharePoolError::ArithmeticOverflow)?;
        state.config.burn_count = state
            .config
            .burn_count
            .checked_add(1)
            .ok_or(SharePoolError::ArithmeticOverflow)?;
        Ok(())
    })?;

    // Interactions: pay out the net amount
    let (output_asset, amount_out) = match swap {
        None => {
            if split.net > 0 {
                reserve.transfer_out(&config.pool_address, &recipient, split.net)?;
            }
            (reserve_asset, split.net)
        }
        Some(leg) => {
            let output_asset = leg.asset.asset();
            let amount_out = if split.net > 0 {
                swap_out_of_reserve(
                    &config,
                    reserve,
                    leg,
                    &recipient,
                    split.net,
                    params.min_amount_out,
                )?
            } else {
                0
            };
            if amount_out < params.min_amount_out {
                log!("burn: output below minimum");
                return Err(SharePoolError::SlippageExceeded);
            }
            (output_asset, amount_out)
        }
    };

    pool.try_inspect_mut(|state| {
        emit_event(
            state,
            &SharesBurnedEvent {
                holder,
                output_asset,
                shares: params.shares,
                gross: split.gross,
                fee: split.fee,
                amount_out,
            },
        );
        Ok(())
    })?;

    log!("burn: shares burned");
    Ok(BurnReceipt {
        gross: split.gross,
        fee: split.fee,
        amount_out,
    })
}
