//! `TransferAuthority` instruction handler.
//!
//! Initiates a two-step authority transfer by setting `pending_authority`.
//! The new authority must call `accept_authority` to complete the transfer.

use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;

use crate::events::{AuthorityTransferInitiatedEvent, emit_event};
use crate::{SharePool, SharePoolError};

/// Process transfer authority.
///
/// Sets the `pending_authority` field on the pool config and emits
/// `AuthorityTransferInitiated` when it changes. Proposing the default
/// address cancels a pending transfer.
pub fn process_transfer_authority(
    pool: &SharePool,
    authority: &Pubkey,
    new_authority: Pubkey,
) -> Result<(), SharePoolError> {
    pool.try_inspect_mut(|state| {
        let previous_pending = state.config.pending_authority;
        state.config.propose_authority(authority, new_authority)?;
        if previous_pending == new_authority {
            return Ok(());
        }

        emit_event(
            state,
            &AuthorityTransferInitiatedEvent {
                current_authority: *authority,
                pending_authority: new_authority,
            },
        );
        log!("transfer_authority: pending authority set");
        Ok(())
    })
}
