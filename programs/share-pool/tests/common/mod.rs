//! Shared test helpers for share-pool tests.

#![allow(dead_code)]

pub mod mocks;
pub mod setup;

pub use mocks::*;
pub use setup::*;
