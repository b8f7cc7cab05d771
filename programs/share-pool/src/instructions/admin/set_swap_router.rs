//! Set the swap router.

use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;

use crate::events::{SwapRouterUpdatedEvent, emit_event};
use crate::{SharePool, SharePoolError};

/// Set the swap router and the fee tier passed to it.
///
/// The default (all-zero) address disables swaps.
pub fn process_set_swap_router(
    pool: &SharePool,
    authority: &Pubkey,
    router: Pubkey,
    fee_tier: u32,
) -> Result<(), SharePoolError> {
    pool.try_inspect_mut(|state| {
        state.config.require_authority(authority)?;

        let previous_router = state.config.swap_router;
        if previous_router == router && state.config.swap_fee_tier == fee_tier {
            return Ok(());
        }

        state.config.swap_router = router;
        state.config.swap_fee_tier = fee_tier;

        emit_event(
            state,
            &SwapRouterUpdatedEvent {
                router,
                previous_router,
                fee_tier,
                _padding: [0; 4],
            },
        );
        log!("set_swap_router: success");
        Ok(())
    })
}
