//! Set pool fee rates.

use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;

use crate::events::{FeeRatesUpdatedEvent, emit_event};
use crate::fees::validate_fee_rates;
use crate::{SharePool, SharePoolError};

/// Update fee rates for the pool.
///
/// Fee rates are WAD fractions (1e16 = 1%, max 1e18 = 100%).
pub fn process_set_fee_rates(
    pool: &SharePool,
    authority: &Pubkey,
    mint_fee_rate: u64,
    burn_fee_rate: u64,
) -> Result<(), SharePoolError> {
    pool.try_inspect_mut(|state| {
        state.config.require_authority(authority)?;
        validate_fee_rates(mint_fee_rate, burn_fee_rate)?;

        let previous_mint_fee_rate = state.config.mint_fee_rate;
        let previous_burn_fee_rate = state.config.burn_fee_rate;
        if previous_mint_fee_rate == mint_fee_rate && previous_burn_fee_rate == burn_fee_rate {
            return Ok(());
        }

        state.config.mint_fee_rate = mint_fee_rate;
        state.config.burn_fee_rate = burn_fee_rate;

        emit_event(
            state,
            &FeeRatesUpdatedEvent {
                mint_fee_rate,
                burn_fee_rate,
                previous_mint_fee_rate,
                previous_burn_fee_rate,
            },
        );
        log!("set_fee_rates: success");
        Ok(())
    })
}
