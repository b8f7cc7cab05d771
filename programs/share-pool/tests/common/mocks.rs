//! In-memory collaborators for share-pool tests.
//!
//! All asset ledgers and routers share one [`Bank`] so that a router's swap
//! is visible to every ledger handle, the way token accounts are on a real
//! ledger.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use pinocchio::pubkey::Pubkey;
use share_pool::{
    Allowlist, AssetLedger, BurnAccounts, CollateralRegistry, MintAccounts, SharePool,
    SharePoolError, StakingHook, SwapRequest, SwapRouter,
};
use share_pool_interface::{BurnParams, MintParams};

use super::setup::{ONE_PERCENT, RESERVE_ASSET};

/// Balances and allowances for every asset.
#[derive(Default)]
pub struct Bank {
    balances: HashMap<(Pubkey, Pubkey), u128>,
    allowances: HashMap<(Pubkey, Pubkey, Pubkey), u128>,
    transfer_fee_bps: HashMap<Pubkey, u128>,
}

/// Bank shared between ledger and router handles.
pub type SharedBank = Rc<RefCell<Bank>>;

impl Bank {
    pub fn balance(&self, asset: &Pubkey, owner: &Pubkey) -> u128 {
        self.balances.get(&(*asset, *owner)).copied().unwrap_or(0)
    }

    pub fn credit(&mut self, asset: &Pubkey, owner: &Pubkey, amount: u128) {
        *self.balances.entry((*asset, *owner)).or_insert(0) += amount;
    }

    pub fn debit(
        &mut self,
        asset: &Pubkey,
        owner: &Pubkey,
        amount: u128,
    ) -> Result<(), SharePoolError> {
        let balance = self.balances.entry((*asset, *owner)).or_insert(0);
        *balance = balance
            .checked_sub(amount)
            .ok_or(SharePoolError::AssetTransferFailed)?;
        Ok(())
    }

    pub fn allowance(&self, asset: &Pubkey, owner: &Pubkey, spender: &Pubkey) -> u128 {
        self.allowances
            .get(&(*asset, *owner, *spender))
            .copied()
            .unwrap_or(0)
    }

    pub fn spend_allowance(
        &mut self,
        asset: &Pubkey,
        owner: &Pubkey,
        spender: &Pubkey,
        amount: u128,
    ) -> Result<(), SharePoolError> {
        let allowance = self
            .allowances
            .entry((*asset, *owner, *spender))
            .or_insert(0);
        *allowance = allowance
            .checked_sub(amount)
            .ok_or(SharePoolError::AssetTransferFailed)?;
        Ok(())
    }

    /// Move `amount`, skimming the asset's transfer fee from what arrives.
    pub fn transfer(
        &mut self,
        asset: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(), SharePoolError> {
        self.debit(asset, from, amount)?;
        let bps = self.transfer_fee_bps.get(asset).copied().unwrap_or(0);
        let skimmed = amount * bps / 10_000;
        self.credit(asset, to, amount - skimmed);
        Ok(())
    }
}

/// Ledger handle for one asset.
pub struct MockLedger {
    pub bank: SharedBank,
    pub asset: Pubkey,
}

impl MockLedger {
    pub fn new(bank: &SharedBank, asset: Pubkey) -> Self {
        Self {
            bank: Rc::clone(bank),
            asset,
        }
    }

    pub fn mint_to(&self, owner: &Pubkey, amount: u128) {
        self.bank.borrow_mut().credit(&self.asset, owner, amount);
    }

    pub fn balance(&self, owner: &Pubkey) -> u128 {
        self.bank.borrow().balance(&self.asset, owner)
    }

    pub fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u128 {
        self.bank.borrow().allowance(&self.asset, owner, spender)
    }

    /// Make every transfer of this asset deliver `bps` less.
    pub fn set_transfer_fee_bps(&self, bps: u128) {
        self.bank
            .borrow_mut()
            .transfer_fee_bps
            .insert(self.asset, bps);
    }
}

impl AssetLedger for MockLedger {
    fn asset(&self) -> Pubkey {
        self.asset
    }

    fn balance_of(&self, owner: &Pubkey) -> u128 {
        self.balance(owner)
    }

    fn transfer_in(
        &mut self,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(), SharePoolError> {
        self.bank.borrow_mut().transfer(&self.asset, from, to, amount)
    }

    fn transfer_out(
        &mut self,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(), SharePoolError> {
        self.bank.borrow_mut().transfer(&self.asset, from, to, amount)
    }

    fn approve(
        &mut self,
        owner: &Pubkey,
        spender: &Pubkey,
        amount: u128,
    ) -> Result<(), SharePoolError> {
        self.bank
            .borrow_mut()
            .allowances
            .insert((self.asset, *owner, *spender), amount);
        Ok(())
    }
}

/// Router swapping at a fixed `rate_num / rate_den` in both directions.
pub struct MockRouter {
    pub bank: SharedBank,
    pub address: Pubkey,
    pub rate_num: u128,
    pub rate_den: u128,
    /// Fail internally when the output is below the minimum
    pub enforce_min: bool,
    /// Added to the reported output without being delivered
    pub overreport: u128,
    pub requests: Vec<SwapRequest>,
}

impl MockRouter {
    pub fn new(bank: &SharedBank, address: Pubkey, rate_num: u128, rate_den: u128) -> Self {
        Self {
            bank: Rc::clone(bank),
            address,
            rate_num,
            rate_den,
            enforce_min: true,
            overreport: 0,
            requests: Vec::new(),
        }
    }
}

impl SwapRouter for MockRouter {
    fn address(&self) -> Pubkey {
        self.address
    }

    fn swap_exact_in(
        &mut self,
        owner: &Pubkey,
        request: &SwapRequest,
    ) -> Result<u128, SharePoolError> {
        self.requests.push(*request);

        let amount_out = request.amount_in * self.rate_num / self.rate_den;
        if self.enforce_min && amount_out < request.min_amount_out {
            return Err(SharePoolError::SlippageExceeded);
        }

        let mut bank = self.bank.borrow_mut();
        bank.spend_allowance(&request.token_in, owner, &self.address, request.amount_in)?;
        bank.debit(&request.token_in, owner, request.amount_in)?;
        bank.credit(&request.token_out, owner, amount_out);
        Ok(amount_out + self.overreport)
    }
}

/// Registry with an adjustable floor.
#[derive(Default)]
pub struct FixedRegistry {
    pub floor: Cell<u128>,
}

impl FixedRegistry {
    pub fn new(floor: u128) -> Self {
        Self {
            floor: Cell::new(floor),
        }
    }
}

impl CollateralRegistry for FixedRegistry {
    fn min_collateral(&self) -> u128 {
        self.floor.get()
    }
}

/// Allowlist rejecting the listed addresses.
pub struct DenyList(pub Vec<Pubkey>);

impl Allowlist for DenyList {
    fn is_allowed(&self, who: &Pubkey) -> bool {
        !self.0.contains(who)
    }
}

/// Staking bookkeeping double.
#[derive(Default)]
pub struct MockStaking {
    pub stakes: HashMap<Pubkey, u128>,
    pub fail_on_unstake: bool,
}

impl StakingHook for MockStaking {
    fn staked_balance(&self, holder: &Pubkey) -> u128 {
        self.stakes.get(holder).copied().unwrap_or(0)
    }

    fn on_stake(&mut self, holder: &Pubkey, amount: u128) -> Result<(), SharePoolError> {
        *self.stakes.entry(*holder).or_insert(0) += amount;
        Ok(())
    }

    fn on_unstake(&mut self, holder: &Pubkey, amount: u128) -> Result<(), SharePoolError> {
        if self.fail_on_unstake {
            return Err(SharePoolError::InsufficientStake);
        }
        let stake = self.stakes.entry(*holder).or_insert(0);
        *stake = stake
            .checked_sub(amount)
            .ok_or(SharePoolError::InsufficientStake)?;
        Ok(())
    }
}

/// What a re-entering collaborator observed during its callback.
#[derive(Debug, Default)]
pub struct ReentryLog {
    pub mint: Option<Result<(), SharePoolError>>,
    pub burn: Option<Result<(), SharePoolError>>,
    pub admin: Option<Result<(), SharePoolError>>,
    pub locked: bool,
    pub supply_seen: u128,
}

/// Try every kind of mutating call against `pool` as `attacker`, recording
/// the results alongside what the read-only views reported.
pub fn attempt_reentry(
    pool: &SharePool,
    bank: &SharedBank,
    reserve_asset: Pubkey,
    attacker: Pubkey,
    authority: Pubkey,
) -> ReentryLog {
    let mut reserve = MockLedger::new(bank, reserve_asset);
    let registry = FixedRegistry::new(0);

    let locked = pool.is_locked();
    let supply_seen = pool.total_supply();

    let mint = pool
        .mint(
            MintAccounts {
                depositor: attacker,
                recipient: attacker,
                reserve: &mut reserve,
                swap: None,
            },
            MintParams::direct(1_000),
        )
        .map(|_| ());
    let burn = pool
        .burn(
            BurnAccounts {
                holder: attacker,
                recipient: attacker,
                reserve: &mut reserve,
                swap: None,
                registry: &registry,
            },
            BurnParams::direct(1),
        )
        .map(|_| ());
    let admin = pool.set_fee_rates(&authority, ONE_PERCENT, ONE_PERCENT);

    ReentryLog {
        mint: Some(mint),
        burn: Some(burn),
        admin: Some(admin),
        locked,
        supply_seen,
    }
}

/// Reserve ledger that calls back into the pool from inside `transfer_in`
/// and `transfer_out`.
pub struct ReentrantLedger {
    pub inner: MockLedger,
    pub pool: Rc<SharePool>,
    pub attacker: Pubkey,
    pub authority: Pubkey,
    pub log: ReentryLog,
}

impl ReentrantLedger {
    fn reenter(&mut self) {
        self.log = attempt_reentry(
            &self.pool,
            &self.inner.bank,
            self.inner.asset,
            self.attacker,
            self.authority,
        );
    }
}

impl AssetLedger for ReentrantLedger {
    fn asset(&self) -> Pubkey {
        self.inner.asset
    }

    fn balance_of(&self, owner: &Pubkey) -> u128 {
        self.inner.balance_of(owner)
    }

    fn transfer_in(
        &mut self,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(), SharePoolError> {
        self.reenter();
        self.inner.transfer_in(from, to, amount)
    }

    fn transfer_out(
        &mut self,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(), SharePoolError> {
        self.reenter();
        self.inner.transfer_out(from, to, amount)
    }

    fn approve(
        &mut self,
        owner: &Pubkey,
        spender: &Pubkey,
        amount: u128,
    ) -> Result<(), SharePoolError> {
        self.inner.approve(owner, spender, amount)
    }
}

/// Router that calls back into the pool before performing the swap.
pub struct ReentrantRouter {
    pub inner: MockRouter,
    pub pool: Rc<SharePool>,
    pub attacker: Pubkey,
    pub authority: Pubkey,
    pub log: ReentryLog,
}

impl SwapRouter for ReentrantRouter {
    fn address(&self) -> Pubkey {
        self.inner.address
    }

    fn swap_exact_in(
        &mut self,
        owner: &Pubkey,
        request: &SwapRequest,
    ) -> Result<u128, SharePoolError> {
        self.log = attempt_reentry(
            &self.pool,
            &self.inner.bank,
            RESERVE_ASSET,
            self.attacker,
            self.authority,
        );
        self.inner.swap_exact_in(owner, request)
    }
}

/// Staking hook that calls back into the pool from both notifications.
pub struct ReentrantStaking {
    pub inner: MockStaking,
    pub bank: SharedBank,
    pub pool: Rc<SharePool>,
    pub attacker: Pubkey,
    pub authority: Pubkey,
    pub log: ReentryLog,
}

impl ReentrantStaking {
    fn reenter(&mut self) {
        self.log = attempt_reentry(
            &self.pool,
            &self.bank,
            RESERVE_ASSET,
            self.attacker,
            self.authority,
        );
    }
}

impl StakingHook for ReentrantStaking {
    fn staked_balance(&self, holder: &Pubkey) -> u128 {
        self.inner.staked_balance(holder)
    }

    fn on_stake(&mut self, holder: &Pubkey, amount: u128) -> Result<(), SharePoolError> {
        self.reenter();
        self.inner.on_stake(holder, amount)
    }

    fn on_unstake(&mut self, holder: &Pubkey, amount: u128) -> Result<(), SharePoolError> {
        self.reenter();
        self.inner.on_unstake(holder, amount)
    }
}
