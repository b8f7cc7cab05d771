//! Toggle share transferability.

use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;

use crate::events::{TransferabilityUpdatedEvent, emit_event};
use crate::{SharePool, SharePoolError};

/// Enable or disable peer-to-peer share movements (transfers and staking).
pub fn process_set_transfers_enabled(
    pool: &SharePool,
    authority: &Pubkey,
    enabled: bool,
) -> Result<(), SharePoolError> {
    pool.try_inspect_mut(|state| {
        state.config.require_authority(authority)?;

        if state.config.transfers_enabled() == enabled {
            return Ok(());
        }
        state.config.transfers_enabled = enabled as u8;

        emit_event(
            state,
            &TransferabilityUpdatedEvent {
                enabled: enabled as u8,
                _padding: [0; 7],
            },
        );
        log!("set_transfers_enabled: success");
        Ok(())
    })
}
