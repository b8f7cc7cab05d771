//! `AcceptAuthority` instruction handler.
//!
//! Completes the two-step authority transfer by accepting the pending authority role.
//! Must be called by the `pending_authority` address.

use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;

use crate::events::{AuthorityTransferredEvent, emit_event};
use crate::{SharePool, SharePoolError};

/// Process accept authority.
///
/// The signer must match the `pending_authority` field on the pool config.
pub fn process_accept_authority(
    pool: &SharePool,
    signer: &Pubkey,
) -> Result<(), SharePoolError> {
    pool.try_inspect_mut(|state| {
        let previous = state.config.accept_pending_authority(signer)?;

        emit_event(
            state,
            &AuthorityTransferredEvent {
                previous,
                new: *signer,
            },
        );
        log!("accept_authority: authority transferred");
        Ok(())
    })
}
