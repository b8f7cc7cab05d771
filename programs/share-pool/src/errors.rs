//! Share pool errors.

use num_enum::TryFromPrimitive;
use pinocchio::program_error::ProgramError;
use share_pool_interface::PoolError;

/// Share pool error codes.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, strum::IntoStaticStr)]
pub enum SharePoolError {
    /// Pool is paused
    PoolPaused = 0,
    /// Unauthorized - caller is not the authority
    Unauthorized = 1,
    /// Caller is not on the allowlist
    NotAllowlisted = 2,
    /// No pending authority to accept
    NoPendingAuthority = 3,
    /// A mutating operation is already in progress on this pool
    Reentrancy = 4,
    /// Fee rate exceeds 100%
    FeeTooHigh = 5,
    /// Share transfers are locked
    TransfersLocked = 6,
    /// Swap input asset is not approved
    AssetNotApproved = 7,
    /// Asset does not match the configured reserve, or is the reserve where a
    /// non-reserve asset is required
    InvalidReserveAsset = 8,
    /// Swap router does not match the configured router
    InvalidSwapRouter = 9,
    /// External asset transfer failed
    AssetTransferFailed = 10,
    /// Swap output below the caller's minimum
    SlippageExceeded = 11,
    /// Burn or transfer exceeds the holder's share balance
    InsufficientShares = 12,
    /// Unstake exceeds the holder's staked amount
    InsufficientStake = 13,
    /// Nothing to redeem - total supply is zero
    EmptyPool = 14,
    /// Redemption exceeds available excess over the collateral floor
    RedemptionExceedsExcess = 15,
    /// Accrued fee exceeds the raw reserve balance
    InvalidReserveState = 16,
    /// Deposit would mint zero shares, or shares exist against an empty reserve
    ZeroShares = 17,
    /// Amount is zero where a non-zero amount is required
    ZeroAmount = 18,
    /// Arithmetic overflow
    ArithmeticOverflow = 19,
}

impl SharePoolError {
    /// The error kind this code belongs to.
    pub const fn kind(self) -> PoolError {
        match self {
            Self::FeeTooHigh => PoolError::ConfigurationError,
            Self::TransfersLocked => PoolError::TransferPolicyError,
            Self::AssetNotApproved
            | Self::InvalidReserveAsset
            | Self::InvalidSwapRouter
            | Self::AssetTransferFailed
            | Self::SlippageExceeded => PoolError::AssetPolicyError,
            Self::InsufficientShares | Self::InsufficientStake => {
                PoolError::InsufficientBalanceError
            }
            Self::EmptyPool => PoolError::EmptyPoolError,
            Self::RedemptionExceedsExcess | Self::InvalidReserveState => PoolError::SolvencyError,
            Self::ZeroShares | Self::ZeroAmount => PoolError::DegenerateResultError,
            Self::PoolPaused | Self::Unauthorized | Self::NotAllowlisted | Self::NoPendingAuthority => {
                PoolError::AccessError
            }
            Self::Reentrancy => PoolError::ReentrancyError,
            Self::ArithmeticOverflow => PoolError::ArithmeticError,
        }
    }

    /// Returns the error name as a static string.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl From<SharePoolError> for ProgramError {
    fn from(e: SharePoolError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
