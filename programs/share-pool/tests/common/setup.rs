//! Pool fixtures for share-pool tests.

use std::cell::RefCell;
use std::rc::Rc;

use pinocchio::pubkey::Pubkey;
use share_pool::{
    BurnAccounts, CollectFeesAccounts, InitPoolParams, MintAccounts, SharePool, SharePoolError,
    SwapLeg,
};
use share_pool_interface::{BurnParams, BurnReceipt, MintParams, MintReceipt, WAD};

use super::mocks::{Bank, FixedRegistry, MockLedger, MockRouter, SharedBank};

pub const POOL: Pubkey = [0xAA; 32];
pub const AUTHORITY: Pubkey = [0xA0; 32];
pub const ROUTER: Pubkey = [0xB0; 32];
pub const RESERVE_ASSET: Pubkey = [0x01; 32];
pub const TOKEN_X: Pubkey = [0x02; 32];
pub const TOKEN_Y: Pubkey = [0x03; 32];

pub const ALICE: Pubkey = [0x11; 32];
pub const BOB: Pubkey = [0x12; 32];
pub const CAROL: Pubkey = [0x13; 32];

/// One percent as a WAD fee rate.
pub const ONE_PERCENT: u64 = (WAD / 100) as u64;

/// Default pool parameters: no fees, router configured, transfers enabled.
pub fn default_params() -> InitPoolParams {
    InitPoolParams {
        pool_address: POOL,
        authority: AUTHORITY,
        reserve_asset: RESERVE_ASSET,
        swap_router: ROUTER,
        swap_fee_tier: 3_000,
        mint_fee_rate: 0,
        burn_fee_rate: 0,
        transfers_enabled: true,
    }
}

/// Pool plus its collaborators.
///
/// The router pays 2 units of `token_out` per unit of `token_in` in either
/// direction.
pub struct TestEnv {
    pub bank: SharedBank,
    pub pool: SharePool,
    pub reserve: MockLedger,
    pub token: MockLedger,
    pub router: MockRouter,
    pub registry: FixedRegistry,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_params(default_params())
    }

    pub fn with_fees(mint_fee_rate: u64, burn_fee_rate: u64) -> Self {
        Self::with_params(InitPoolParams {
            mint_fee_rate,
            burn_fee_rate,
            ..default_params()
        })
    }

    pub fn with_params(params: InitPoolParams) -> Self {
        Self::with_pool(SharePool::new(params).unwrap())
    }

    pub fn with_pool(pool: SharePool) -> Self {
        let bank: SharedBank = Rc::new(RefCell::new(Bank::default()));
        Self {
            reserve: MockLedger::new(&bank, RESERVE_ASSET),
            token: MockLedger::new(&bank, TOKEN_X),
            router: MockRouter::new(&bank, ROUTER, 2, 1),
            registry: FixedRegistry::new(0),
            bank,
            pool,
        }
    }

    /// Credit `amount` of the reserve asset to `who`.
    pub fn fund(&self, who: &Pubkey, amount: u128) {
        self.reserve.mint_to(who, amount);
    }

    /// Direct reserve deposit by `who`, shares to `who`.
    pub fn mint(&mut self, who: &Pubkey, amount: u128) -> Result<MintReceipt, SharePoolError> {
        self.pool.mint(
            MintAccounts {
                depositor: *who,
                recipient: *who,
                reserve: &mut self.reserve,
                swap: None,
            },
            MintParams::direct(amount),
        )
    }

    /// Fund `who` and deposit.
    pub fn fund_and_mint(&mut self, who: &Pubkey, amount: u128) -> MintReceipt {
        self.fund(who, amount);
        self.mint(who, amount).unwrap()
    }

    /// Burn `shares` held by `who`, paying out the reserve to `who`.
    pub fn burn(&mut self, who: &Pubkey, shares: u128) -> Result<BurnReceipt, SharePoolError> {
        self.pool.burn(
            BurnAccounts {
                holder: *who,
                recipient: *who,
                reserve: &mut self.reserve,
                swap: None,
                registry: &self.registry,
            },
            BurnParams::direct(shares),
        )
    }

    /// Deposit TOKEN_X through the router.
    pub fn mint_via_swap(
        &mut self,
        who: &Pubkey,
        amount: u128,
        min_amount_out: u128,
    ) -> Result<MintReceipt, SharePoolError> {
        self.pool.mint(
            MintAccounts {
                depositor: *who,
                recipient: *who,
                reserve: &mut self.reserve,
                swap: Some(SwapLeg {
                    asset: &mut self.token,
                    router: &mut self.router,
                }),
            },
            MintParams {
                amount,
                min_amount_out,
            },
        )
    }

    /// Burn and receive TOKEN_X through the router.
    pub fn burn_via_swap(
        &mut self,
        who: &Pubkey,
        shares: u128,
        min_amount_out: u128,
    ) -> Result<BurnReceipt, SharePoolError> {
        self.pool.burn(
            BurnAccounts {
                holder: *who,
                recipient: *who,
                reserve: &mut self.reserve,
                swap: Some(SwapLeg {
                    asset: &mut self.token,
                    router: &mut self.router,
                }),
                registry: &self.registry,
            },
            BurnParams {
                shares,
                min_amount_out,
            },
        )
    }

    pub fn collect_fees(&mut self, caller: &Pubkey) -> Result<u128, SharePoolError> {
        self.pool.collect_fees(CollectFeesAccounts {
            authority: *caller,
            reserve: &mut self.reserve,
        })
    }

    /// Approve TOKEN_X as a swap input.
    pub fn approve_token(&self) {
        self.pool
            .set_approved_asset(&AUTHORITY, TOKEN_X, true)
            .unwrap();
    }

    /// Raw reserve balance held by the pool.
    pub fn raw_reserve(&self) -> u128 {
        self.reserve.balance(&POOL)
    }

    /// Raw reserve minus accrued fee.
    pub fn spendable(&self) -> u128 {
        self.pool.spendable_reserve(&self.reserve).unwrap()
    }
}
