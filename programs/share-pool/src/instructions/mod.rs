//! Share pool instruction handlers.
//!
//! Each handler runs inside [`SharePool`](crate::SharePool)'s atomic
//! wrapper: the reentrancy lock is held and the state is checkpointed before
//! the handler starts. Handlers follow checks → effects → interactions,
//! except the mint-side pull-in, which must happen first to learn the
//! gross amount.

// Admin instructions (configuration, pausing, authority)
pub mod admin;

// Pool operation modules
mod burn;
mod mint;

// Share movement
mod stake;
mod transfer;

// Fee collection
mod collect_fees;

// Re-export pool operation accounts and handlers
pub use burn::{BurnAccounts, process_burn};
pub use mint::{MintAccounts, process_mint};

// Re-export share movement accounts and handlers
pub use stake::{UnstakeAccounts, process_stake, process_unstake_and_burn};
pub use transfer::process_transfer_shares;

pub use collect_fees::{CollectFeesAccounts, process_collect_fees};
