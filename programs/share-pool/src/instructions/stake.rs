//! Staking boundary.
//!
//! Staked shares sit in pool custody (the ledger entry of the pool's own
//! address); the staking subsystem keeps the per-holder bookkeeping through
//! [`StakingHook`]. Both directions pass through the transfer hook.

use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;
use share_pool_interface::{BurnParams, BurnReceipt};

use super::burn::{BurnAccounts, burn_shares};
use super::transfer::transfer_hook;
use crate::interfaces::StakingHook;
use crate::{SharePool, SharePoolError};

/// Accounts for the UnstakeAndBurn instruction.
pub struct UnstakeAccounts<'a> {
    /// Staking bookkeeping
    pub staking: &'a mut dyn StakingHook,
    /// Burn accounts; `burn.holder` is the staker
    pub burn: BurnAccounts<'a>,
}

/// Process a stake: holder → pool custody, then notify the staking hook.
pub fn process_stake(
    pool: &SharePool,
    holder: &Pubkey,
    amount: u128,
    staking: &mut dyn StakingHook,
) -> Result<(), SharePoolError> {
    pool.require_allowed(holder)?;

    pool.try_inspect_mut(|state| {
        state.config.require_active()?;
        let custody = state.config.pool_address;
        transfer_hook(state, holder, &custody, amount)
    })?;

    staking.on_stake(holder, amount)?;
    log!("stake: shares staked");
    Ok(())
}

/// Process an unstake-and-burn.
///
/// 1. Requires the holder's staked balance to cover the amount
/// 2. Moves the shares from custody back to the holder
/// 3. Burns them exactly as a direct burn would
/// 4. Notifies the staking hook
pub fn process_unstake_and_burn(
    pool: &SharePool,
    accounts: UnstakeAccounts<'_>,
    params: BurnParams,
) -> Result<BurnReceipt, SharePoolError> {
    let UnstakeAccounts { staking, burn } = accounts;
    let holder = burn.holder;

    pool.require_allowed(&holder)?;

    if staking.staked_balance(&holder) < params.shares {
        log!("unstake: insufficient stake");
        return Err(SharePoolError::InsufficientStake);
    }

    pool.try_inspect_mut(|state| {
        state.config.require_active()?;
        let custody = state.config.pool_address;
        transfer_hook(state, &custody, &holder, params.shares)
    })?;

    let receipt = burn_shares(pool, burn, params)?;

    staking.on_unstake(&holder, params.shares)?;
    log!("unstake: shares unstaked and burned");
    Ok(receipt)
}
