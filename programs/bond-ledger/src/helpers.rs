// Fee-split and emission math plus token CPI helpers shared by the
// bonding instructions. All intermediate products are widened to u128
// and checked back into u64 so accumulators fail closed instead of
// wrapping.

use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Transfer};

use crate::{constants::*, errors::*};

// Proportional cut of `amount`: (amount * numerator) / FEE_SCALE.
// Used for the runway fee and the per-period treasury split.
pub fn fee_cut(amount: u64, numerator: u64) -> Result<u64> {
    let cut = (amount as u128)
        .checked_mul(numerator as u128)
        .ok_or(LedgerError::Overflow)?
        .checked_div(FEE_SCALE as u128)
        .ok_or(LedgerError::Overflow)?;
    u64::try_from(cut).map_err(|_| error!(LedgerError::Overflow))
}

// Base-token emission credited for a bond:
// (amount / bonding_cost) * emission_rate * multiplier / MULTIPLIER_SCALE.
// The division by bonding_cost happens after the multiplication by the
// emission rate so sub-cost amounts still earn a proportional reward.
pub fn bond_emission(
    amount: u64,
    emission_rate: u64,
    bonding_cost: u64,
    multiplier: u32,
) -> Result<u64> {
    let reward = (amount as u128)
        .checked_mul(emission_rate as u128)
        .ok_or(LedgerError::Overflow)?
        .checked_div(bonding_cost as u128)
        .ok_or(LedgerError::Overflow)?
        .checked_mul(multiplier as u128)
        .ok_or(LedgerError::Overflow)?
        .checked_div(MULTIPLIER_SCALE as u128)
        .ok_or(LedgerError::Overflow)?;
    u64::try_from(reward).map_err(|_| error!(LedgerError::Overflow))
}

// Transfer tokens signed by the caller. Used for bond splits, the
// creation fee and vault topups.
pub fn transfer_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}

// Transfer tokens out of a PDA-owned vault. Used by redemption, where
// the ledger PDA is the vault authority.
pub fn transfer_from_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[authority_seeds];

    transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}
