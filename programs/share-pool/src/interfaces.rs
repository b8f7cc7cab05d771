//! External collaborators.
//!
//! The pool never moves assets or reads governance values itself; it calls
//! these capabilities, which a host adapter implements against the real
//! ledgers and which tests implement with doubles. Every fallible call
//! propagates its error as a whole-operation abort.

use pinocchio::pubkey::Pubkey;

use crate::SharePoolError;

/// Ledger of one fungible asset, amounts normalized to 18 decimals.
pub trait AssetLedger {
    /// The asset this ledger tracks.
    fn asset(&self) -> Pubkey;

    /// Balance held by `owner`.
    fn balance_of(&self, owner: &Pubkey) -> u128;

    /// Pull `amount` from `from` into `to` (authorized by `from`).
    ///
    /// Assets with transfer fees may deliver less than `amount`; the pool
    /// measures what actually arrived.
    fn transfer_in(&mut self, from: &Pubkey, to: &Pubkey, amount: u128)
    -> Result<(), SharePoolError>;

    /// Send `amount` from `from` (the pool) to `to`.
    fn transfer_out(
        &mut self,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(), SharePoolError>;

    /// Allow `spender` to pull up to `amount` from `owner`.
    fn approve(&mut self, owner: &Pubkey, spender: &Pubkey, amount: u128)
    -> Result<(), SharePoolError>;
}

/// Exact-input swap request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapRequest {
    /// Asset sold
    pub token_in: Pubkey,
    /// Asset bought
    pub token_out: Pubkey,
    /// Amount sold (must be approved to the router beforehand)
    pub amount_in: u128,
    /// Minimum acceptable amount bought
    pub min_amount_out: u128,
    /// Router fee tier
    pub fee_tier: u32,
}

/// External swap facility.
pub trait SwapRouter {
    /// Address the router pulls approvals under.
    fn address(&self) -> Pubkey;

    /// Swap `request.amount_in` of `token_in` held by `owner` into
    /// `token_out`, delivered back to `owner`. Returns the amount bought.
    ///
    /// Must fail if the amount bought would be below `request.min_amount_out`.
    fn swap_exact_in(&mut self, owner: &Pubkey, request: &SwapRequest)
    -> Result<u128, SharePoolError>;
}

/// Source of the protocol-level collateral floor.
pub trait CollateralRegistry {
    /// Minimum spendable reserve that must remain after any redemption.
    fn min_collateral(&self) -> u128;
}

/// Allowlist gate for mint, burn and staking entry points.
pub trait Allowlist {
    /// Whether `who` may call gated entry points.
    fn is_allowed(&self, who: &Pubkey) -> bool;
}

/// Allowlist that admits everyone.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenAllowlist;

impl Allowlist for OpenAllowlist {
    fn is_allowed(&self, _who: &Pubkey) -> bool {
        true
    }
}

/// Bookkeeping side of the staking subsystem.
///
/// The pool moves the shares themselves (into and out of its own custody);
/// the hook records who staked what.
pub trait StakingHook {
    /// Shares currently staked by `holder`.
    fn staked_balance(&self, holder: &Pubkey) -> u128;

    /// Record that `holder` staked `amount` shares.
    fn on_stake(&mut self, holder: &Pubkey, amount: u128) -> Result<(), SharePoolError>;

    /// Record that `holder` unstaked `amount` shares.
    fn on_unstake(&mut self, holder: &Pubkey, amount: u128) -> Result<(), SharePoolError>;
}
