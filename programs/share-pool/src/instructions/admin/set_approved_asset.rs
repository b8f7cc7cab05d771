//! Approve or revoke a swap input asset.

use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;

use crate::events::{ApprovedAssetUpdatedEvent, emit_event};
use crate::{SharePool, SharePoolError};

/// Add `asset` to (or remove it from) the set of assets accepted as mint
/// inputs through the swap bridge.
///
/// The reserve asset is deposited directly and can never be listed.
pub fn process_set_approved_asset(
    pool: &SharePool,
    authority: &Pubkey,
    asset: Pubkey,
    approved: bool,
) -> Result<(), SharePoolError> {
    pool.try_inspect_mut(|state| {
        state.config.require_authority(authority)?;

        if asset == state.config.reserve_asset {
            log!("set_approved_asset: reserve asset cannot be listed");
            return Err(SharePoolError::InvalidReserveAsset);
        }

        if !state.set_asset_approval(asset, approved) {
            return Ok(());
        }

        emit_event(
            state,
            &ApprovedAssetUpdatedEvent {
                asset,
                approved: approved as u8,
                _padding: [0; 7],
            },
        );
        log!("set_approved_asset: success");
        Ok(())
    })
}
