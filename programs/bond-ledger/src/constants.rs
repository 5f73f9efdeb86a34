use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

pub const BASE_VAULT_SEED: &[u8] = b"base_token";

pub const ANCHOR_DISCRIMINATOR: usize = 8;

/// Seed strings (registry ids, instance ids, vote options, coupon nonces)
/// are capped well below the 32-byte PDA seed limit.
pub const MAX_ID_LEN: usize = 24;

pub const BOND_PERIODS: usize = 10;

/// Period multipliers are scaled by 10^4: 10000 = 1.0x.
pub const MULTIPLIER_SCALE: u64 = 10_000;

/// Runway fee and treasury splits are scaled by 10^5: 100000 = 100%.
pub const FEE_SCALE: u64 = 100_000;

/// Minimum bond tick. Rejects zero and dust amounts that would round
/// every split and emission to nothing.
pub const MIN_BOND_AMOUNT: u64 = 1_000;

/// Flat fee charged by the registry for creating a token instance.
pub const CREATION_FEE: u64 = 15 * LAMPORTS_PER_SOL;
