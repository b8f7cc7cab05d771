//! Pool error taxonomy.

use num_enum::TryFromPrimitive;

/// Error kinds shared by every share pool implementation.
///
/// Each kind is a whole-operation failure: the operation aborts and leaves
/// pool state unchanged. Detailed error codes in the pool crate map onto
/// exactly one of these kinds.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, strum::IntoStaticStr)]
pub enum PoolError {
    /// Fee rate above 100%
    ConfigurationError = 0,

    /// Peer-to-peer share transfer while transfers are locked
    TransferPolicyError = 1,

    /// Asset not approved for swap input, or asset/router mismatch
    AssetPolicyError = 2,

    /// Burn or unstake exceeds the caller's balance
    InsufficientBalanceError = 3,

    /// Burn against zero total supply
    EmptyPoolError = 4,

    /// Redemption would breach the collateral floor
    SolvencyError = 5,

    /// Computed share or base amount is zero where value is required
    DegenerateResultError = 6,

    /// Rejected by the pause, allowlist or ownership gate
    AccessError = 7,

    /// Mutating entry point called while another is in progress
    ReentrancyError = 8,

    /// Arithmetic overflow in computation
    ArithmeticError = 9,
}

impl PoolError {
    /// Convert to error code
    pub const fn to_u32(self) -> u32 {
        self as u32
    }

    /// Create from error code
    pub fn from_u32(code: u32) -> Option<Self> {
        Self::try_from(code).ok()
    }

    /// Returns the kind name as a static string.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.into()
    }
}
