//! Admin instructions for share pool management.
//!
//! These instructions are authority-gated and manage pool configuration.
//! They remain available while the pool is paused. Each emits its event only
//! when the stored value actually changes.

mod accept_authority;
mod set_approved_asset;
mod set_fee_rates;
mod set_pool_active;
mod set_swap_router;
mod set_transfers_enabled;
mod transfer_authority;

pub use accept_authority::process_accept_authority;
pub use set_approved_asset::process_set_approved_asset;
pub use set_fee_rates::process_set_fee_rates;
pub use set_pool_active::process_set_pool_active;
pub use set_swap_router::process_set_swap_router;
pub use set_transfers_enabled::process_set_transfers_enabled;
pub use transfer_authority::process_transfer_authority;
