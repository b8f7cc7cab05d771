//! Collateral floor enforcement.

use pinocchio_log::log;

use crate::SharePoolError;
use crate::interfaces::CollateralRegistry;

/// Verify that paying out `gross` keeps the spendable reserve at or above
/// `min_collateral`.
///
/// ```text
/// spendable_before − gross ≥ min_collateral
/// ```
pub fn check_redemption(
    spendable_before: u128,
    gross: u128,
    min_collateral: u128,
) -> Result<(), SharePoolError> {
    match spendable_before.checked_sub(gross) {
        Some(remaining) if remaining >= min_collateral => Ok(()),
        _ => {
            log!("burn: redemption exceeds available excess");
            Err(SharePoolError::RedemptionExceedsExcess)
        }
    }
}

/// Read the floor from the registry and check the redemption against it.
///
/// The registry is queried on every call so governance changes apply to the
/// very next redemption.
pub fn enforce_floor(
    registry: &dyn CollateralRegistry,
    spendable_before: u128,
    gross: u128,
) -> Result<(), SharePoolError> {
    check_redemption(spendable_before, gross, registry.min_collateral())
}
