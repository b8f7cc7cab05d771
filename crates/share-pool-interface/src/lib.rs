//! Share Pool Interface
//!
//! Shared math, types and error codes for the share pool engine and for
//! anything that needs to quote it (clients, indexers, adapters).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        share-pool                           │
//! │  • Share ledger (mint / burn / transfer hook)               │
//! │  • Reserve tracking and fee accrual                         │
//! │  • Solvency floor and swap bridge                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  share-pool-interface                       │
//! │  • WAD fixed-point math (256-bit intermediates)             │
//! │  • Fee split and share pricing formulas                     │
//! │  • Error taxonomy and call parameters                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Fee Calculation
//!
//! Fees are charged on the gross base-asset amount in both directions:
//! ```text
//! fee = gross × rate / WAD
//! net = gross − fee
//! ```
//!
//! # Share Pricing
//!
//! ```text
//! mint:  shares = net × supply₀ / reserve₀     (shares = net when supply₀ = 0)
//! burn:  gross  = shares × reserve₀ / supply₀
//! ```
//!
//! where `(reserve₀, supply₀)` is snapshotted before the operation touches
//! either side.
//!
//! # Modules
//!
//! - `types`: Constants, math helpers, call parameters
//! - `error`: Pool error taxonomy

#![no_std]

mod error;
mod types;

pub use error::*;
pub use types::*;
