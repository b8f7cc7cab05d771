//! Share pool entry points.
//!
//! [`SharePool`] owns the pool state and exposes one method per operation.
//! Every mutating method:
//!
//! 1. Takes the reentrancy lock (nested calls fail with `Reentrancy`)
//! 2. Checkpoints the state (config copy, ledger and approval journals,
//!    event buffer length)
//! 3. Runs the instruction handler
//! 4. Rolls back to the checkpoint if the handler failed
//!
//! Handlers access state through short [`map`](SharePool::map) /
//! [`try_inspect_mut`](SharePool::try_inspect_mut) borrows that are never
//! held across a collaborator call, so read-only views remain usable from
//! callbacks.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cell::RefCell;

use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;
use share_pool_interface::{BurnParams, BurnReceipt, MintParams, MintReceipt};

use crate::fees::{split_burn, split_mint, validate_fee_rates};
use crate::guard::ReentrancyLock;
use crate::instructions::{
    self, BurnAccounts, CollectFeesAccounts, MintAccounts, UnstakeAccounts,
};
use crate::interfaces::{Allowlist, AssetLedger, OpenAllowlist, StakingHook};
use crate::pricing::{price_burn, price_mint};
use crate::reserve::{self, PoolSnapshot};
use crate::{InitPoolParams, PoolState, SharePoolConfig, SharePoolError};

/// A single-asset share pool.
pub struct SharePool {
    state: RefCell<PoolState>,
    lock: ReentrancyLock,
    allowlist: Box<dyn Allowlist>,
}

impl SharePool {
    /// Create a pool that admits every caller.
    ///
    /// # Errors
    /// `FeeTooHigh` if either fee rate exceeds 100%.
    pub fn new(params: InitPoolParams) -> Result<Self, SharePoolError> {
        Self::with_allowlist(params, Box::new(OpenAllowlist))
    }

    /// Create a pool gated by `allowlist`.
    ///
    /// # Errors
    /// `FeeTooHigh` if either fee rate exceeds 100%.
    pub fn with_allowlist(
        params: InitPoolParams,
        allowlist: Box<dyn Allowlist>,
    ) -> Result<Self, SharePoolError> {
        if let Err(e) = validate_fee_rates(params.mint_fee_rate, params.burn_fee_rate) {
            log!("init_pool: fee rate exceeds 100%");
            return Err(e);
        }

        log!("init_pool: pool initialized successfully");
        Ok(Self {
            state: RefCell::new(PoolState::new(params.into_config())),
            lock: ReentrancyLock::new(),
            allowlist,
        })
    }

    // =========================================================================
    // State access
    // =========================================================================

    /// Read from the state.
    pub(crate) fn map<T>(&self, f: impl FnOnce(&PoolState) -> T) -> T {
        f(&self.state.borrow())
    }

    /// Read from the state, propagating the closure's error.
    pub(crate) fn try_map<T>(
        &self,
        f: impl FnOnce(&PoolState) -> Result<T, SharePoolError>,
    ) -> Result<T, SharePoolError> {
        f(&self.state.borrow())
    }

    /// Mutate the state, propagating the closure's error.
    pub(crate) fn try_inspect_mut<T>(
        &self,
        f: impl FnOnce(&mut PoolState) -> Result<T, SharePoolError>,
    ) -> Result<T, SharePoolError> {
        f(&mut self.state.borrow_mut())
    }

    /// Fail with `NotAllowlisted` unless `who` passes the allowlist.
    pub(crate) fn require_allowed(&self, who: &Pubkey) -> Result<(), SharePoolError> {
        if !self.allowlist.is_allowed(who) {
            log!("allowlist: caller not allowlisted");
            return Err(SharePoolError::NotAllowlisted);
        }
        Ok(())
    }

    /// Run `f` as one atomic, non-reentrant operation.
    fn atomic<T>(
        &self,
        f: impl FnOnce(&Self) -> Result<T, SharePoolError>,
    ) -> Result<T, SharePoolError> {
        let _guard = self.lock.enter()?;
        let checkpoint = self.state.borrow_mut().checkpoint();

        let result = f(self);
        let mut state = self.state.borrow_mut();
        match result {
            Ok(_) => state.commit(),
            Err(_) => state.rollback(checkpoint),
        }
        result
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Copy of the current configuration record.
    pub fn config(&self) -> SharePoolConfig {
        self.map(|state| state.config)
    }

    /// Total shares outstanding.
    pub fn total_supply(&self) -> u128 {
        self.map(|state| state.ledger.total_supply())
    }

    /// Share balance of `holder`.
    pub fn balance_of(&self, holder: &Pubkey) -> u128 {
        self.map(|state| state.ledger.balance_of(holder))
    }

    /// Fees accrued but not yet collected.
    pub fn accrued_fee(&self) -> u128 {
        self.map(|state| state.config.accrued_fee)
    }

    /// Whether `asset` is accepted as a swap input.
    pub fn is_approved_asset(&self, asset: &Pubkey) -> bool {
        self.map(|state| state.approved_assets.contains(asset))
    }

    /// Whether a mutating operation is in progress.
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Current pricing snapshot against `reserve`.
    ///
    /// # Errors
    /// `InvalidReserveState` if the accrued fee exceeds the raw balance.
    pub fn snapshot(&self, reserve: &dyn AssetLedger) -> Result<PoolSnapshot, SharePoolError> {
        let (pool_address, accrued_fee, supply) = self.map(|state| {
            (state.config.pool_address, state.config.accrued_fee, state.ledger.total_supply())
        });
        reserve::snapshot(reserve, &pool_address, accrued_fee, supply)
    }

    /// Spendable reserve: raw reserve balance minus accrued fee.
    ///
    /// # Errors
    /// `InvalidReserveState` if the accrued fee exceeds the raw balance.
    pub fn spendable_reserve(&self, reserve: &dyn AssetLedger) -> Result<u128, SharePoolError> {
        Ok(self.snapshot(reserve)?.reserve)
    }

    /// Shares a direct reserve deposit of `amount` would mint right now.
    ///
    /// # Errors
    /// Same pricing errors as [`mint`](Self::mint).
    pub fn preview_mint(
        &self,
        reserve: &dyn AssetLedger,
        amount: u128,
    ) -> Result<MintReceipt, SharePoolError> {
        let snapshot = self.snapshot(reserve)?;
        let split = split_mint(&self.config(), amount)?;
        let shares = price_mint(split.net, &snapshot)?;
        Ok(MintReceipt { gross: split.gross, fee: split.fee, shares })
    }

    /// Reserve a burn of `shares` would pay out right now.
    ///
    /// Does not apply the collateral floor.
    ///
    /// # Errors
    /// Same pricing errors as [`burn`](Self::burn).
    pub fn preview_burn(
        &self,
        reserve: &dyn AssetLedger,
        shares: u128,
    ) -> Result<BurnReceipt, SharePoolError> {
        let snapshot = self.snapshot(reserve)?;
        let gross = price_burn(shares, &snapshot)?;
        let split = split_burn(&self.config(), gross)?;
        Ok(BurnReceipt { gross: split.gross, fee: split.fee, amount_out: split.net })
    }

    /// Drain the serialized events emitted by committed operations.
    pub fn take_events(&self) -> Vec<Vec<u8>> {
        // Events of an in-flight operation are not committed yet
        if self.lock.is_locked() {
            return Vec::new();
        }
        core::mem::take(&mut self.state.borrow_mut().events)
    }

    // =========================================================================
    // Core operations
    // =========================================================================

    /// Deposit the reserve asset (or swap an approved asset into it) and mint
    /// shares to `accounts.recipient`.
    ///
    /// # Errors
    /// Access, asset-policy, pricing and arithmetic errors; see
    /// [`SharePoolError`].
    pub fn mint(
        &self,
        accounts: MintAccounts<'_>,
        params: MintParams,
    ) -> Result<MintReceipt, SharePoolError> {
        self.atomic(|pool| instructions::process_mint(pool, accounts, params))
    }

    /// Burn shares and pay the reserve (or a swapped output asset) to
    /// `accounts.recipient`.
    ///
    /// # Errors
    /// Access, balance, solvency, asset-policy and pricing errors; see
    /// [`SharePoolError`].
    pub fn burn(
        &self,
        accounts: BurnAccounts<'_>,
        params: BurnParams,
    ) -> Result<BurnReceipt, SharePoolError> {
        self.atomic(|pool| instructions::process_burn(pool, accounts, params))
    }

    /// Transfer the entire accrued fee to the authority. Returns the amount.
    ///
    /// # Errors
    /// `Unauthorized`, `PoolPaused`, `InvalidReserveAsset`,
    /// `InvalidReserveState` or a transfer failure.
    pub fn collect_fees(&self, accounts: CollectFeesAccounts<'_>) -> Result<u128, SharePoolError> {
        self.atomic(|pool| instructions::process_collect_fees(pool, accounts))
    }

    /// Move shares between holders.
    ///
    /// # Errors
    /// `TransfersLocked`, `PoolPaused`, `ZeroAmount` or `InsufficientShares`.
    pub fn transfer_shares(
        &self,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(), SharePoolError> {
        self.atomic(|pool| instructions::process_transfer_shares(pool, from, to, amount))
    }

    /// Move shares into pool custody and record the stake.
    ///
    /// # Errors
    /// Access errors, `TransfersLocked`, `InsufficientShares` or a staking
    /// hook failure.
    pub fn stake(
        &self,
        holder: &Pubkey,
        amount: u128,
        staking: &mut dyn StakingHook,
    ) -> Result<(), SharePoolError> {
        self.atomic(|pool| instructions::process_stake(pool, holder, amount, staking))
    }

    /// Release staked shares back to the holder and burn them.
    ///
    /// # Errors
    /// `InsufficientStake`, `TransfersLocked`, plus every error of
    /// [`burn`](Self::burn).
    pub fn unstake_and_burn(
        &self,
        accounts: UnstakeAccounts<'_>,
        params: BurnParams,
    ) -> Result<BurnReceipt, SharePoolError> {
        self.atomic(|pool| instructions::process_unstake_and_burn(pool, accounts, params))
    }

    // =========================================================================
    // Admin operations
    // =========================================================================

    /// Update mint and burn fee rates (WAD).
    ///
    /// # Errors
    /// `Unauthorized` or `FeeTooHigh`.
    pub fn set_fee_rates(
        &self,
        authority: &Pubkey,
        mint_fee_rate: u64,
        burn_fee_rate: u64,
    ) -> Result<(), SharePoolError> {
        self.atomic(|pool| {
            instructions::admin::process_set_fee_rates(pool, authority, mint_fee_rate, burn_fee_rate)
        })
    }

    /// Set the swap router and its fee tier.
    ///
    /// # Errors
    /// `Unauthorized`.
    pub fn set_swap_router(
        &self,
        authority: &Pubkey,
        router: Pubkey,
        fee_tier: u32,
    ) -> Result<(), SharePoolError> {
        self.atomic(|pool| {
            instructions::admin::process_set_swap_router(pool, authority, router, fee_tier)
        })
    }

    /// Enable or disable peer-to-peer share transfers.
    ///
    /// # Errors
    /// `Unauthorized`.
    pub fn set_transfers_enabled(
        &self,
        authority: &Pubkey,
        enabled: bool,
    ) -> Result<(), SharePoolError> {
        self.atomic(|pool| {
            instructions::admin::process_set_transfers_enabled(pool, authority, enabled)
        })
    }

    /// Approve or revoke a swap input asset.
    ///
    /// # Errors
    /// `Unauthorized`, or `InvalidReserveAsset` for the reserve asset.
    pub fn set_approved_asset(
        &self,
        authority: &Pubkey,
        asset: Pubkey,
        approved: bool,
    ) -> Result<(), SharePoolError> {
        self.atomic(|pool| {
            instructions::admin::process_set_approved_asset(pool, authority, asset, approved)
        })
    }

    /// Pause or resume the pool.
    ///
    /// # Errors
    /// `Unauthorized`.
    pub fn set_pool_active(&self, authority: &Pubkey, is_active: bool) -> Result<(), SharePoolError> {
        self.atomic(|pool| instructions::admin::process_set_pool_active(pool, authority, is_active))
    }

    /// Propose `new_authority` (step one of two).
    ///
    /// # Errors
    /// `Unauthorized`.
    pub fn transfer_authority(
        &self,
        authority: &Pubkey,
        new_authority: Pubkey,
    ) -> Result<(), SharePoolError> {
        self.atomic(|pool| {
            instructions::admin::process_transfer_authority(pool, authority, new_authority)
        })
    }

    /// Accept a pending authority transfer (step two of two).
    ///
    /// # Errors
    /// `NoPendingAuthority` or `Unauthorized`.
    pub fn accept_authority(&self, pending_authority: &Pubkey) -> Result<(), SharePoolError> {
        self.atomic(|pool| instructions::admin::process_accept_authority(pool, pending_authority))
    }
}
