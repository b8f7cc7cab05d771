//! Event definitions for the share pool.
//!
//! Events are appended to the pool's event buffer during an operation and
//! handed to the host via [`SharePool::take_events`](crate::SharePool::take_events).
//! A failed operation rolls the buffer back together with the rest of the
//! state, so only committed operations ever produce events.
//!
//! # Event Types
//!
//! - [`SharesMintedEvent`] - Emitted when shares are minted
//! - [`SharesBurnedEvent`] - Emitted when shares are burned
//! - [`FeesCollectedEvent`] - Emitted when accrued fees are collected
//! - Admin events (16-31) for every effective configuration change
//!
//! # Wire Format
//!
//! ```text
//! [discriminator: u64 LE][event body: Pod bytes]
//! ```

use alloc::vec::Vec;
use bytemuck::{Pod, Zeroable};
use num_enum::TryFromPrimitive;
use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;

use crate::PoolState;

/// Event type discriminators for identifying event types in the buffer.
///
/// Each event type has a unique u64 discriminator prepended to its serialized data.
/// This allows indexers to identify and parse different event types.
///
/// # Ranges
/// - **1-15**: Core events (mint, burn, fee collection)
/// - **16-31**: Admin events
#[repr(u64)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, strum::IntoStaticStr)]
pub enum EventType {
    // =========================================================================
    // Core Events (1-15) - Share supply and fee flows
    // =========================================================================
    /// Shares minted against a deposit
    SharesMinted = 1,
    /// Shares burned for a redemption
    SharesBurned = 2,
    /// Accrued fees transferred to the authority
    FeesCollected = 3,
    // Reserved: 4-15

    // =========================================================================
    // Admin Events (16-31) - Configuration changes
    // =========================================================================
    /// Mint/burn fee rates changed
    FeeRatesUpdated = 16,
    /// Swap router or fee tier changed
    SwapRouterUpdated = 17,
    /// Share transfer gate toggled
    TransferabilityUpdated = 18,
    /// Swap input asset approved or revoked
    ApprovedAssetUpdated = 19,
    /// Pool paused or resumed
    PoolActiveUpdated = 20,
    /// Authority transfer completed
    AuthorityTransferred = 21,
    /// Authority transfer proposed, awaiting acceptance
    AuthorityTransferInitiated = 22,
}

/// A fixed-layout event record.
pub trait Event: Pod {
    /// Discriminator written ahead of the body.
    const EVENT_TYPE: EventType;

    /// Serialize as `[discriminator LE | body]`.
    fn to_event_bytes(&self) -> Vec<u8> {
        let body = bytemuck::bytes_of(self);
        let mut bytes = Vec::with_capacity(8 + body.len());
        bytes.extend_from_slice(&(Self::EVENT_TYPE as u64).to_le_bytes());
        bytes.extend_from_slice(body);
        bytes
    }
}

/// Read the discriminator of a serialized event.
pub fn event_type_of(bytes: &[u8]) -> Option<EventType> {
    let discriminator = u64::from_le_bytes(bytes.get(..8)?.try_into().ok()?);
    EventType::try_from(discriminator).ok()
}

/// Decode a serialized event, returning `None` on a discriminator or length
/// mismatch.
pub fn decode_event<T: Event>(bytes: &[u8]) -> Option<T> {
    if event_type_of(bytes)? != T::EVENT_TYPE {
        return None;
    }
    bytemuck::try_pod_read_unaligned(&bytes[8..]).ok()
}

/// Append an event to the pool's buffer.
pub fn emit_event<T: Event>(state: &mut PoolState, event: &T) {
    let name: &'static str = T::EVENT_TYPE.into();
    log!("event: {}", name);
    state.events.push(event.to_event_bytes());
}

macro_rules! impl_event {
    ($ty:ty, $kind:ident) => {
        impl Event for $ty {
            const EVENT_TYPE: EventType = EventType::$kind;
        }
    };
}

/// Event emitted when shares are minted.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct SharesMintedEvent {
    /// Share recipient
    pub recipient: Pubkey,
    /// Gross reserve amount received (after any swap, before fee)
    pub gross: u128,
    /// Mint fee accrued
    pub fee: u128,
    /// Shares minted
    pub shares: u128,
    /// Total supply after the mint
    pub new_supply: u128,
}

/// Event emitted when shares are burned.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct SharesBurnedEvent {
    /// Holder whose shares were burned
    pub holder: Pubkey,
    /// Asset delivered to the recipient
    pub output_asset: Pubkey,
    /// Shares burned
    pub shares: u128,
    /// Gross reserve value redeemed (before fee)
    pub gross: u128,
    /// Burn fee accrued
    pub fee: u128,
    /// Amount of `output_asset` delivered
    pub amount_out: u128,
}

/// Event emitted when accrued fees are collected.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct FeesCollectedEvent {
    /// Fee recipient (the authority)
    pub recipient: Pubkey,
    /// Reserve amount transferred
    pub amount: u128,
}

/// Event emitted when fee rates change.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct FeeRatesUpdatedEvent {
    /// New mint fee rate (WAD)
    pub mint_fee_rate: u64,
    /// New burn fee rate (WAD)
    pub burn_fee_rate: u64,
    /// Previous mint fee rate (WAD)
    pub previous_mint_fee_rate: u64,
    /// Previous burn fee rate (WAD)
    pub previous_burn_fee_rate: u64,
}

/// Event emitted when the swap router or its fee tier changes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct SwapRouterUpdatedEvent {
    /// New router
    pub router: Pubkey,
    /// Previous router
    pub previous_router: Pubkey,
    /// New fee tier
    pub fee_tier: u32,
    /// Padding for 8-byte alignment
    pub _padding: [u8; 4],
}

/// Event emitted when share transferability is toggled.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct TransferabilityUpdatedEvent {
    /// 1 if transfers are now enabled
    pub enabled: u8,
    /// Padding for 8-byte alignment
    pub _padding: [u8; 7],
}

/// Event emitted when a swap input asset is approved or revoked.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct ApprovedAssetUpdatedEvent {
    /// Asset affected
    pub asset: Pubkey,
    /// 1 if the asset is now approved
    pub approved: u8,
    /// Padding for 8-byte alignment
    pub _padding: [u8; 7],
}

/// Event emitted when the pool is paused or resumed.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct PoolActiveUpdatedEvent {
    /// 1 if the pool is now active
    pub is_active: u8,
    /// Padding for 8-byte alignment
    pub _padding: [u8; 7],
}

/// Event emitted when a pending authority accepts.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct AuthorityTransferredEvent {
    /// Outgoing authority
    pub previous: Pubkey,
    /// Incoming authority
    pub new: Pubkey,
}

/// Event emitted when the authority proposes a successor.
///
/// The handover is not effective until the pending authority accepts; a
/// default `pending_authority` means an earlier proposal was withdrawn.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct AuthorityTransferInitiatedEvent {
    /// Authority making the proposal
    pub current_authority: Pubkey,
    /// Address that must accept
    pub pending_authority: Pubkey,
}

impl_event!(SharesMintedEvent, SharesMinted);
impl_event!(SharesBurnedEvent, SharesBurned);
impl_event!(FeesCollectedEvent, FeesCollected);
impl_event!(FeeRatesUpdatedEvent, FeeRatesUpdated);
impl_event!(SwapRouterUpdatedEvent, SwapRouterUpdated);
impl_event!(TransferabilityUpdatedEvent, TransferabilityUpdated);
impl_event!(ApprovedAssetUpdatedEvent, ApprovedAssetUpdated);
impl_event!(PoolActiveUpdatedEvent, PoolActiveUpdated);
impl_event!(AuthorityTransferredEvent, AuthorityTransferred);
impl_event!(AuthorityTransferInitiatedEvent, AuthorityTransferInitiated);
