//! Share Pool
//!
//! Mint/burn accounting engine for a single-asset liquidity pool. The pool
//! issues fungible shares against deposits of one reserve asset and redeems
//! them back into it, charging configurable fees and enforcing a collateral
//! floor.
//!
//! # Architecture
//!
//! The pool owns only its accounting (share ledger, accrued fee, config).
//! Everything else is reached through collaborator traits in [`interfaces`]:
//! asset ledgers, the swap router, the collateral registry, the allowlist
//! and the staking subsystem.
//!
//! ```text
//! mint:  pull in ─► [swap → reserve] ─► fee ─► price vs. pre-deposit snapshot ─► credit shares
//! burn:  price vs. pre-burn snapshot ─► collateral floor ─► fee ─► burn ─► pay out [─► swap]
//! ```
//!
//! # Operations
//!
//! - `mint` / `burn`: share issuance and redemption
//! - `collect_fees`: sweep the accrued fee to the authority
//! - `transfer_shares`, `stake`, `unstake_and_burn`: share movements gated by
//!   the transfer flag
//! - Admin: fee rates, swap router, transferability, approved assets, pause,
//!   two-step authority transfer

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod errors;
pub mod events;
pub mod fees;
pub mod guard;
pub mod instructions;
pub mod interfaces;
pub mod ledger;
pub mod pool;
pub mod pricing;
pub mod reserve;
pub mod solvency;
pub mod state;
pub mod swap;

// Error and event types
pub use errors::SharePoolError;
pub use events::{
    ApprovedAssetUpdatedEvent, AuthorityTransferInitiatedEvent, AuthorityTransferredEvent, Event,
    EventType, FeeRatesUpdatedEvent, FeesCollectedEvent, PoolActiveUpdatedEvent, SharesBurnedEvent,
    SharesMintedEvent, SwapRouterUpdatedEvent, TransferabilityUpdatedEvent, decode_event,
    emit_event, event_type_of,
};

// Instruction accounts
pub use instructions::{BurnAccounts, CollectFeesAccounts, MintAccounts, UnstakeAccounts};

// Collaborators
pub use interfaces::{
    Allowlist, AssetLedger, CollateralRegistry, OpenAllowlist, StakingHook, SwapRequest,
    SwapRouter,
};
pub use swap::SwapLeg;

// State and entry points
pub use pool::SharePool;
pub use state::{InitPoolParams, PoolState, SharePoolConfig};
