//! Fee accrual.
//!
//! Fees are taken from the gross base-asset amount in both directions and
//! accumulate in `SharePoolConfig::accrued_fee` until the authority collects
//! them.

use pinocchio_log::log;
use share_pool_interface::{calculate_burn_output, calculate_mint_output, is_valid_fee_rate};

use crate::{SharePoolConfig, SharePoolError};

/// A gross amount split into fee and net parts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeSplit {
    /// Amount before fee
    pub gross: u128,
    /// Fee accrued to the beneficiary
    pub fee: u128,
    /// Amount after fee
    pub net: u128,
}

/// Validate a fee rate pair.
///
/// Rates above 100% are rejected.
pub fn validate_fee_rates(mint_fee_rate: u64, burn_fee_rate: u64) -> Result<(), SharePoolError> {
    if !is_valid_fee_rate(mint_fee_rate) || !is_valid_fee_rate(burn_fee_rate) {
        log!("set_fee_rates: fee rate exceeds 100%");
        return Err(SharePoolError::FeeTooHigh);
    }
    Ok(())
}

/// Split the gross base amount of a deposit at the current mint fee rate.
pub fn split_mint(config: &SharePoolConfig, gross: u128) -> Result<FeeSplit, SharePoolError> {
    let (net, fee) = calculate_mint_output(gross, config.mint_fee_rate)
        .ok_or(SharePoolError::ArithmeticOverflow)?;
    Ok(FeeSplit { gross, fee, net })
}

/// Split the gross base amount of a redemption at the current burn fee rate.
pub fn split_burn(config: &SharePoolConfig, gross: u128) -> Result<FeeSplit, SharePoolError> {
    let (net, fee) = calculate_burn_output(gross, config.burn_fee_rate)
        .ok_or(SharePoolError::ArithmeticOverflow)?;
    Ok(FeeSplit { gross, fee, net })
}

/// Accrue a mint fee and record the deposit statistics.
pub fn accrue_mint(config: &mut SharePoolConfig, split: &FeeSplit) -> Result<(), SharePoolError> {
    accrue(config, split.fee)?;
    config.total_mint_fees = config
        .total_mint_fees
        .checked_add(split.fee)
        .ok_or(SharePoolError::ArithmeticOverflow)?;
    config.total_deposited = config
        .total_deposited
        .checked_add(split.gross)
        .ok_or(SharePoolError::ArithmeticOverflow)?;
    Ok(())
}

/// Accrue a burn fee and record the redemption statistics.
pub fn accrue_burn(config: &mut SharePoolConfig, split: &FeeSplit) -> Result<(), SharePoolError> {
    accrue(config, split.fee)?;
    config.total_burn_fees = config
        .total_burn_fees
        .checked_add(split.fee)
        .ok_or(SharePoolError::ArithmeticOverflow)?;
    config.total_redeemed = config
        .total_redeemed
        .checked_add(split.gross)
        .ok_or(SharePoolError::ArithmeticOverflow)?;
    Ok(())
}

fn accrue(config: &mut SharePoolConfig, fee: u128) -> Result<(), SharePoolError> {
    config.accrued_fee = config
        .accrued_fee
        .checked_add(fee)
        .ok_or(SharePoolError::ArithmeticOverflow)?;
    Ok(())
}

/// Take the entire accrued fee for collection. Returns the amount taken.
///
/// Collection is all-or-nothing: the caller must transfer exactly the
/// returned amount in the same operation.
pub fn take_accrued(config: &mut SharePoolConfig) -> Result<u128, SharePoolError> {
    let amount = config.accrued_fee;
    config.total_fees_collected = config
        .total_fees_collected
        .checked_add(amount)
        .ok_or(SharePoolError::ArithmeticOverflow)?;
    config.accrued_fee = 0;
    Ok(amount)
}
