//! Set pool active state.

use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;

use crate::events::{PoolActiveUpdatedEvent, emit_event};
use crate::{SharePool, SharePoolError};

/// Set the active state for the pool.
///
/// When inactive, mint, burn, fee collection and share movements are blocked.
pub fn process_set_pool_active(
    pool: &SharePool,
    authority: &Pubkey,
    is_active: bool,
) -> Result<(), SharePoolError> {
    pool.try_inspect_mut(|state| {
        state.config.require_authority(authority)?;

        if state.config.is_active() == is_active {
            return Ok(());
        }
        state.config.is_active = is_active as u8;

        emit_event(
            state,
            &PoolActiveUpdatedEvent {
                is_active: is_active as u8,
                _padding: [0; 7],
            },
        );
        log!("set_pool_active: success");
        Ok(())
    })
}
