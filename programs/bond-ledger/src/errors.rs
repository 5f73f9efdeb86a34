use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    #[msg("Only the instance creator can perform this action")]
    Unauthorized,

    #[msg("An account already exists at the derived address")]
    DuplicateSeed,

    #[msg("No account exists at the derived address")]
    NotFound,

    #[msg("Bonding period is disabled")]
    PeriodDisabled,

    #[msg("Period table is malformed - enabled periods need a nonzero length, a multiplier of at least 1.0x and a treasury split within 100%")]
    InvalidPeriodTable,

    #[msg("Emission schedule is malformed - initial reserve cannot exceed the halving threshold")]
    InvalidEmissionSchedule,

    #[msg("Runway fee cannot exceed 100%")]
    FeeTooHigh,

    #[msg("Coupon has already been redeemed")]
    AlreadyRedeemed,

    #[msg("Coupon is still locked")]
    StillLocked,

    #[msg("Insufficient token balance to cover this operation")]
    InsufficientFunds,

    #[msg("Redemption vault does not hold enough base tokens")]
    InsufficientVault,

    #[msg("Bond amount is below the minimum tick")]
    BondTooSmall,

    #[msg("Amount must not be zero")]
    ZeroAmount,

    #[msg("Id must be between 1 and 24 bytes")]
    InvalidIdLength,

    #[msg("Token account mint does not match the expected mint")]
    MintMismatch,

    #[msg("Base and quote mint must differ")]
    IdenticalMints,

    #[msg("Vote option does not belong to this token instance")]
    VoteTargetMismatch,

    #[msg("Arithmetic overflow occurred")]
    Overflow,
}
