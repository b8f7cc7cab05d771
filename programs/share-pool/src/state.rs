//! Share pool state.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use bytemuck::{Pod, Zeroable};
use pinocchio::pubkey::Pubkey;

use crate::SharePoolError;
use crate::ledger::{LedgerCheckpoint, ShareLedger};

/// Share pool configuration record.
///
/// Holds every scalar the pool owns: identities, fee configuration, gate
/// flags, the accrued fee and lifetime statistics. Mutated only through the
/// pool's validated entry points.
///
/// # Fee Accrual
///
/// `accrued_fee` is the portion of the raw reserve balance that belongs to
/// the fee beneficiary. It is excluded from pricing:
///
/// ```text
/// spendable_reserve = reserve_ledger.balance_of(pool_address) - accrued_fee
/// ```
///
/// and is only ever decreased by `collect_fees`, which zeroes it in the same
/// operation that transfers it out.
///
/// ## Example
///
/// ```text
/// Raw reserve 1000e18, accrued_fee 0, supply 1000e18   (1 base per share)
/// Mint 100e18 gross at 1% fee:
///   fee = 1e18, net = 99e18, shares = 99e18 * 1000e18 / 1000e18 = 99e18
///   raw = 1100e18, accrued_fee = 1e18, spendable = 1099e18, supply = 1099e18
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct SharePoolConfig {
    /// Authority that can update pool config and collect fees
    pub authority: Pubkey,
    /// Pending authority for two-step transfer.
    /// Set by `transfer_authority`, must call `accept_authority` to complete.
    pub pending_authority: Pubkey,
    /// Address under which the pool holds assets and custodies staked shares
    pub pool_address: Pubkey,
    /// The designated reserve (base) asset
    pub reserve_asset: Pubkey,
    /// Swap router used to convert non-reserve assets
    pub swap_router: Pubkey,

    /// Fees accrued but not yet collected (reserve base units, WAD)
    pub accrued_fee: u128,
    /// Cumulative shares minted
    pub total_shares_minted: u128,
    /// Cumulative shares burned
    pub total_shares_burned: u128,
    /// Cumulative gross base deposited (after swap, before fee)
    pub total_deposited: u128,
    /// Cumulative gross base redeemed (before fee)
    pub total_redeemed: u128,
    /// Total mint fees accrued
    pub total_mint_fees: u128,
    /// Total burn fees accrued
    pub total_burn_fees: u128,
    /// Total fees transferred to the authority
    pub total_fees_collected: u128,

    /// Mint fee rate (WAD, max 1e18 = 100%)
    pub mint_fee_rate: u64,
    /// Burn fee rate (WAD, max 1e18 = 100%)
    pub burn_fee_rate: u64,
    /// Number of mint operations
    pub mint_count: u64,
    /// Number of burn operations
    pub burn_count: u64,

    /// Fee tier passed to the swap router
    pub swap_fee_tier: u32,
    /// Whether mutating pool operations are enabled
    pub is_active: u8,
    /// Whether peer-to-peer share transfers are enabled
    pub transfers_enabled: u8,
    /// Padding for 16-byte alignment
    pub _padding: [u8; 10],
}

impl SharePoolConfig {
    /// Record size
    pub const SIZE: usize = core::mem::size_of::<Self>();

    /// Check if the pool is active
    pub fn is_active(&self) -> bool {
        self.is_active != 0
    }

    /// Check if peer-to-peer transfers are enabled
    pub fn transfers_enabled(&self) -> bool {
        self.transfers_enabled != 0
    }

    /// Check if pool is active, returning error if paused.
    #[inline]
    pub fn require_active(&self) -> Result<(), SharePoolError> {
        if !self.is_active() {
            return Err(SharePoolError::PoolPaused);
        }
        Ok(())
    }

    /// Check if signer matches authority, returning error if unauthorized.
    #[inline]
    pub fn require_authority(&self, signer: &Pubkey) -> Result<(), SharePoolError> {
        if self.authority != *signer {
            return Err(SharePoolError::Unauthorized);
        }
        Ok(())
    }

    /// Check that share transfers are unlocked.
    #[inline]
    pub fn require_transfers_enabled(&self) -> Result<(), SharePoolError> {
        if !self.transfers_enabled() {
            return Err(SharePoolError::TransfersLocked);
        }
        Ok(())
    }

    /// Validate that `asset` is the configured reserve asset.
    #[inline]
    pub fn require_reserve_asset(&self, asset: &Pubkey) -> Result<(), SharePoolError> {
        if self.reserve_asset != *asset {
            return Err(SharePoolError::InvalidReserveAsset);
        }
        Ok(())
    }

    /// Step one of the authority handover: record `new_authority` as pending.
    /// Proposing the default address withdraws an earlier proposal.
    pub fn propose_authority(
        &mut self,
        signer: &Pubkey,
        new_authority: Pubkey,
    ) -> Result<(), SharePoolError> {
        self.require_authority(signer)?;
        self.pending_authority = new_authority;
        Ok(())
    }

    /// Step two: the pending authority takes over. Returns the outgoing
    /// authority.
    pub fn accept_pending_authority(&mut self, signer: &Pubkey) -> Result<Pubkey, SharePoolError> {
        if self.pending_authority == Pubkey::default() {
            return Err(SharePoolError::NoPendingAuthority);
        }
        if self.pending_authority != *signer {
            return Err(SharePoolError::Unauthorized);
        }
        let previous = core::mem::replace(&mut self.authority, self.pending_authority);
        self.pending_authority = Pubkey::default();
        Ok(previous)
    }
}

/// Parameters for creating a pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InitPoolParams {
    /// Address the pool holds assets under
    pub pool_address: Pubkey,
    /// Initial authority
    pub authority: Pubkey,
    /// Reserve asset
    pub reserve_asset: Pubkey,
    /// Swap router (default pubkey = no router configured)
    pub swap_router: Pubkey,
    /// Swap router fee tier
    pub swap_fee_tier: u32,
    /// Mint fee rate (WAD)
    pub mint_fee_rate: u64,
    /// Burn fee rate (WAD)
    pub burn_fee_rate: u64,
    /// Whether share transfers start enabled
    pub transfers_enabled: bool,
}

impl InitPoolParams {
    /// Build the initial config record. Fee rates are validated by the caller.
    pub(crate) fn into_config(self) -> SharePoolConfig {
        SharePoolConfig {
            authority: self.authority,
            pool_address: self.pool_address,
            reserve_asset: self.reserve_asset,
            swap_router: self.swap_router,
            swap_fee_tier: self.swap_fee_tier,
            mint_fee_rate: self.mint_fee_rate,
            burn_fee_rate: self.burn_fee_rate,
            is_active: 1,
            transfers_enabled: self.transfers_enabled as u8,
            ..SharePoolConfig::zeroed()
        }
    }
}

/// Everything a pool operation may mutate.
///
/// A failed operation is undone through a [`Checkpoint`]: the config record
/// is copied whole, while the ledger and the approved set replay their undo
/// journals and the event buffer is truncated. Rollback cost is bounded by
/// what the operation touched, not by the size of the pool.
#[derive(Debug)]
pub struct PoolState {
    /// Scalar configuration and accounting
    pub config: SharePoolConfig,
    /// Share balances
    pub ledger: ShareLedger,
    /// Non-reserve assets accepted as mint inputs
    pub approved_assets: BTreeSet<Pubkey>,
    /// Serialized events not yet taken by the host
    pub events: Vec<Vec<u8>>,
    /// `(asset, was approved)` for every approval change since the checkpoint
    asset_journal: Vec<(Pubkey, bool)>,
}

/// Rollback point taken when a mutating operation starts.
#[derive(Clone, Copy, Debug)]
pub struct Checkpoint {
    config: SharePoolConfig,
    ledger: LedgerCheckpoint,
    events: usize,
}

impl PoolState {
    /// Fresh state for a new pool.
    pub fn new(config: SharePoolConfig) -> Self {
        Self {
            config,
            ledger: ShareLedger::default(),
            approved_assets: BTreeSet::new(),
            events: Vec::new(),
            asset_journal: Vec::new(),
        }
    }

    /// Mark the state a failed operation must return to.
    pub fn checkpoint(&mut self) -> Checkpoint {
        self.commit();
        Checkpoint {
            config: self.config,
            ledger: self.ledger.checkpoint(),
            events: self.events.len(),
        }
    }

    /// Undo everything written since `checkpoint`.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.config = checkpoint.config;
        self.ledger.rollback(checkpoint.ledger);
        while let Some((asset, was_approved)) = self.asset_journal.pop() {
            if was_approved {
                self.approved_assets.insert(asset);
            } else {
                self.approved_assets.remove(&asset);
            }
        }
        self.events.truncate(checkpoint.events);
    }

    /// Discard the undo journals of a committed operation.
    pub fn commit(&mut self) {
        self.ledger.commit();
        self.asset_journal.clear();
    }

    /// Approve or revoke `asset` as a swap input. Returns whether the set
    /// changed.
    pub fn set_asset_approval(&mut self, asset: Pubkey, approved: bool) -> bool {
        let was_approved = self.approved_assets.contains(&asset);
        if was_approved == approved {
            return false;
        }
        self.asset_journal.push((asset, was_approved));
        if approved {
            self.approved_assets.insert(asset);
        } else {
            self.approved_assets.remove(&asset);
        }
        true
    }

    /// Check that `asset` may be used as a swap input.
    #[inline]
    pub fn require_approved_asset(&self, asset: &Pubkey) -> Result<(), SharePoolError> {
        if !self.approved_assets.contains(asset) {
            return Err(SharePoolError::AssetNotApproved);
        }
        Ok(())
    }
}
