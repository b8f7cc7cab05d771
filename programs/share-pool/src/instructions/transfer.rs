//! Peer-to-peer share transfers.

use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;

use crate::{PoolState, SharePool, SharePoolError};

/// Move shares between holders through the transfer-eligibility gate.
///
/// Every share movement that is not a mint or a burn goes through here.
pub(crate) fn transfer_hook(
    state: &mut PoolState,
    from: &Pubkey,
    to: &Pubkey,
    amount: u128,
) -> Result<(), SharePoolError> {
    if let Err(e) = state.config.require_transfers_enabled() {
        log!("transfer: share transfers are locked");
        return Err(e);
    }
    if amount == 0 {
        return Err(SharePoolError::ZeroAmount);
    }
    state.ledger.move_shares(from, to, amount)
}

/// Process a share transfer from `from` to `to`.
pub fn process_transfer_shares(
    pool: &SharePool,
    from: &Pubkey,
    to: &Pubkey,
    amount: u128,
) -> Result<(), SharePoolError> {
    pool.try_inspect_mut(|state| {
        state.config.require_active()?;
        transfer_hook(state, from, to, amount)
    })
}
