//! Mint instruction handler.
//!
//! Pool pulls the input asset from the depositor, converts it into the
//! reserve asset if needed, prices the net amount against the pre-deposit
//! snapshot and mints shares to the recipient.

use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;
use share_pool_interface::{MintParams, MintReceipt};

use crate::events::{SharesMintedEvent, emit_event};
use crate::fees::{accrue_mint, split_mint};
use crate::interfaces::AssetLedger;
use crate::pricing::price_mint;
use crate::swap::{SwapLeg, pull_in, swap_into_reserve, validate_input_leg};
use crate::{SharePool, SharePoolError};

/// Accounts for the Mint instruction.
pub struct MintAccounts<'a> {
    /// Caller; source of the input asset
    pub depositor: Pubkey,
    /// Receives the minted shares
    pub recipient: Pubkey,
    /// Reserve asset ledger
    pub reserve: &'a mut dyn AssetLedger,
    /// Input asset and router, when depositing a non-reserve asset
    pub swap: Option<SwapLeg<'a>>,
}

/// Process a mint.
///
/// 1. Validates gates, the reserve asset and (if present) the swap leg
/// 2. Snapshots reserve and supply before any funds move
/// 3. Pulls the input in; swaps it to the reserve if it is not the reserve
/// 4. Splits the fee off the gross reserve amount
/// 5. Prices the net amount against the snapshot
/// 6. Accrues the fee, mints shares, emits `SharesMinted`
pub fn process_mint(
    pool: &SharePool,
    accounts: MintAccounts<'_>,
    params: MintParams,
) -> Result<MintReceipt, SharePoolError> {
    let MintAccounts {
        depositor,
        recipient,
        reserve,
        swap,
    } = accounts;

    pool.require_allowed(&depositor)?;

    let reserve_asset = reserve.asset();
    let leg = swap.as_ref().map(SwapLeg::identities);

    let config = pool.try_map(|state| {
        state.config.require_active()?;
        state.config.require_reserve_asset(&reserve_asset)?;
        if let Some((asset, router)) = &leg {
            validate_input_leg(state, asset, router)?;
        }
        Ok(state.config)
    })?;

    if params.amount == 0 {
        log!("mint: amount must be non-zero");
        return Err(SharePoolError::ZeroAmount);
    }

    // Price against the pool as it stood before this deposit
    let snapshot = pool.snapshot(&*reserve)?;

    let gross = match swap {
        Some(leg) => swap_into_reserve(
            &config,
            &*reserve,
            leg,
            &depositor,
            params.amount,
            params.min_amount_out,
        )?,
        None => pull_in(reserve, &depositor, &config.pool_address, params.amount)?,
    };
    if gross == 0 {
        log!("mint: nothing received");
        return Err(SharePoolError::ZeroAmount);
    }

    let split = split_mint(&config, gross)?;
    let shares = price_mint(split.net, &snapshot)?;

    pool.try_inspect_mut(|state| {
        accrue_mint(&mut state.config, &split)?;
        state.ledger.mint(&recipient, shares)?;

        state.config.total_shares_minted = state
            .config
            .total_shares_minted
            .checked_add(shares)
            .ok_or(SharePoolError::ArithmeticOverflow)?;
        state.config.mint_count = state
            .config
            .mint_count
            .checked_add(1)
            .ok_or(SharePoolError::ArithmeticOverflow)?;

        let new_supply = state.ledger.total_supply();
        emit_event(
            state,
            &SharesMintedEvent {
                recipient,
                gross: split.gross,
                fee: split.fee,
                shares,
                new_supply,
            },
        );
        Ok(())
    })?;

    log!("mint: shares minted");
    Ok(MintReceipt {
        gross: split.gross,
        fee: split.fee,
        shares,
    })
}
