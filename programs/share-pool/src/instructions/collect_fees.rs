//! Collect accrued fees.
//!
//! Transfers the entire accrued fee to the authority and zeroes it in the
//! same operation. Collection is all-or-nothing.

use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;

use crate::events::{FeesCollectedEvent, emit_event};
use crate::fees::take_accrued;
use crate::interfaces::AssetLedger;
use crate::reserve::spendable_reserve;
use crate::{SharePool, SharePoolError};

/// Accounts for the CollectFees instruction.
pub struct CollectFeesAccounts<'a> {
    /// Must match the pool authority; receives the fees
    pub authority: Pubkey,
    /// Reserve asset ledger
    pub reserve: &'a mut dyn AssetLedger,
}

/// Process fee collection. Returns the amount transferred (0 if nothing had
/// accrued, in which case no event is emitted).
pub fn process_collect_fees(
    pool: &SharePool,
    accounts: CollectFeesAccounts<'_>,
) -> Result<u128, SharePoolError> {
    let CollectFeesAccounts { authority, reserve } = accounts;

    let reserve_asset = reserve.asset();
    let config = pool.try_map(|state| {
        state.config.require_authority(&authority)?;
        state.config.require_active()?;
        state.config.require_reserve_asset(&reserve_asset)?;
        Ok(state.config)
    })?;

    if config.accrued_fee == 0 {
        log!("collect_fees: nothing to collect");
        return Ok(0);
    }

    // Accrued fee must be fully backed by the raw balance
    spendable_reserve(reserve.balance_of(&config.pool_address), config.accrued_fee)?;

    let amount = pool.try_inspect_mut(|state| take_accrued(&mut state.config))?;
    reserve.transfer_out(&config.pool_address, &authority, amount)?;

    pool.try_inspect_mut(|state| {
        emit_event(state, &FeesCollectedEvent { recipient: authority, amount });
        Ok(())
    })?;

    log!("collect_fees: fees collected");
    Ok(amount)
}
