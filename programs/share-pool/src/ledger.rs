//! Share ledger.
//!
//! Fixed-point share balances per holder plus the total supply. The ledger
//! enforces `total_supply == Σ balances` on every mutation; policy (who may
//! mint, whether transfers are allowed) is decided by the caller.
//!
//! Every balance write is journaled as `(holder, previous balance)` so a
//! failed operation can be undone in time proportional to the entries it
//! touched.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use pinocchio::pubkey::Pubkey;

use crate::SharePoolError;

/// Share balances and total supply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareLedger {
    balances: BTreeMap<Pubkey, u128>,
    total_supply: u128,
    journal: Vec<(Pubkey, u128)>,
}

/// Ledger position to roll back to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerCheckpoint {
    journal_len: usize,
    total_supply: u128,
}

impl ShareLedger {
    /// Share balance of `holder` (zero if never credited).
    pub fn balance_of(&self, holder: &Pubkey) -> u128 {
        self.balances.get(holder).copied().unwrap_or(0)
    }

    /// Total shares outstanding.
    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    /// Number of holders with a non-zero balance.
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Mark the current position. Writes after this point can be undone with
    /// [`rollback`](Self::rollback).
    pub fn checkpoint(&self) -> LedgerCheckpoint {
        LedgerCheckpoint {
            journal_len: self.journal.len(),
            total_supply: self.total_supply,
        }
    }

    /// Undo every write made since `checkpoint`, newest first.
    pub fn rollback(&mut self, checkpoint: LedgerCheckpoint) {
        while self.journal.len() > checkpoint.journal_len {
            let Some((holder, previous)) = self.journal.pop() else {
                break;
            };
            self.write(holder, previous);
        }
        self.total_supply = checkpoint.total_supply;
    }

    /// Drop the undo journal once an operation has committed.
    pub fn commit(&mut self) {
        self.journal.clear();
    }

    /// Credit `amount` new shares to `to`.
    pub fn mint(&mut self, to: &Pubkey, amount: u128) -> Result<(), SharePoolError> {
        let total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(SharePoolError::ArithmeticOverflow)?;
        self.credit(to, amount)?;
        self.total_supply = total_supply;
        Ok(())
    }

    /// Destroy `amount` shares held by `from`.
    pub fn burn(&mut self, from: &Pubkey, amount: u128) -> Result<(), SharePoolError> {
        self.debit(from, amount)?;
        // Supply is at least the holder's balance, so this cannot underflow
        self.total_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(SharePoolError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Move `amount` shares from `from` to `to`. Supply is unchanged.
    pub fn move_shares(
        &mut self,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(), SharePoolError> {
        self.debit(from, amount)?;
        self.credit(to, amount)
    }

    fn credit(&mut self, holder: &Pubkey, amount: u128) -> Result<(), SharePoolError> {
        if amount == 0 {
            return Ok(());
        }
        let balance = self.balance_of(holder);
        let updated = balance
            .checked_add(amount)
            .ok_or(SharePoolError::ArithmeticOverflow)?;
        self.journal.push((*holder, balance));
        self.write(*holder, updated);
        Ok(())
    }

    fn debit(&mut self, holder: &Pubkey, amount: u128) -> Result<(), SharePoolError> {
        let balance = self.balance_of(holder);
        let remaining = balance
            .checked_sub(amount)
            .ok_or(SharePoolError::InsufficientShares)?;
        self.journal.push((*holder, balance));
        self.write(*holder, remaining);
        Ok(())
    }

    /// Zero balances are removed so `holder_count` only counts real holders.
    fn write(&mut self, holder: Pubkey, balance: u128) {
        if balance == 0 {
            self.balances.remove(&holder);
        } else {
            self.balances.insert(holder, balance);
        }
    }

    #[cfg(test)]
    fn sum_of_balances(&self) -> u128 {
        self.balances.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: Pubkey = [1; 32];
    const BOB: Pubkey = [2; 32];

    #[test]
    fn test_mint_and_burn() {
        let mut ledger = ShareLedger::default();
        ledger.mint(&ALICE, 100).unwrap();
        ledger.mint(&BOB, 50).unwrap();
        assert_eq!(ledger.total_supply(), 150);

        ledger.burn(&ALICE, 40).unwrap();
        assert_eq!(ledger.balance_of(&ALICE), 60);
        assert_eq!(ledger.total_supply(), 110);
        assert_eq!(ledger.sum_of_balances(), ledger.total_supply());
    }

    #[test]
    fn test_full_burn_removes_holder() {
        let mut ledger = ShareLedger::default();
        ledger.mint(&ALICE, 100).unwrap();
        ledger.burn(&ALICE, 100).unwrap();
        assert_eq!(ledger.balance_of(&ALICE), 0);
        assert_eq!(ledger.holder_count(), 0);
        assert_eq!(ledger.total_supply(), 0);
    }

    #[test]
    fn test_burn_exceeding_balance() {
        let mut ledger = ShareLedger::default();
        ledger.mint(&ALICE, 10).unwrap();
        ledger.mint(&BOB, 100).unwrap();
        assert_eq!(ledger.burn(&ALICE, 11), Err(SharePoolError::InsufficientShares));
        assert_eq!(ledger.balance_of(&ALICE), 10);
        assert_eq!(ledger.total_supply(), 110);
    }

    #[test]
    fn test_move_shares_preserves_supply() {
        let mut ledger = ShareLedger::default();
        ledger.mint(&ALICE, 100).unwrap();
        ledger.move_shares(&ALICE, &BOB, 30).unwrap();
        assert_eq!(ledger.balance_of(&ALICE), 70);
        assert_eq!(ledger.balance_of(&BOB), 30);
        assert_eq!(ledger.total_supply(), 100);
        assert_eq!(ledger.sum_of_balances(), 100);
    }

    #[test]
    fn test_mint_overflow() {
        let mut ledger = ShareLedger::default();
        ledger.mint(&ALICE, u128::MAX).unwrap();
        assert_eq!(ledger.mint(&BOB, 1), Err(SharePoolError::ArithmeticOverflow));
        assert_eq!(ledger.balance_of(&BOB), 0);
    }

    #[test]
    fn test_rollback_restores_touched_entries() {
        let mut ledger = ShareLedger::default();
        ledger.mint(&ALICE, 100).unwrap();
        ledger.commit();
        let before = ledger.clone();

        let checkpoint = ledger.checkpoint();
        ledger.move_shares(&ALICE, &BOB, 100).unwrap();
        ledger.mint(&BOB, 5).unwrap();
        ledger.burn(&BOB, 30).unwrap();
        assert_eq!(ledger.balance_of(&ALICE), 0);

        ledger.rollback(checkpoint);
        assert_eq!(ledger, before);
        assert_eq!(ledger.holder_count(), 1);
        assert_eq!(ledger.sum_of_balances(), ledger.total_supply());
    }

    #[test]
    fn test_rollback_keeps_writes_before_checkpoint() {
        let mut ledger = ShareLedger::default();
        ledger.mint(&ALICE, 10).unwrap();
        let checkpoint = ledger.checkpoint();
        ledger.mint(&ALICE, 90).unwrap();

        ledger.rollback(checkpoint);
        assert_eq!(ledger.balance_of(&ALICE), 10);
        assert_eq!(ledger.total_supply(), 10);
    }

    #[test]
    fn test_zero_mint_creates_no_entry() {
        let mut ledger = ShareLedger::default();
        ledger.mint(&ALICE, 0).unwrap();
        assert_eq!(ledger.holder_count(), 0);
    }
}
