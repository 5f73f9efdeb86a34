// Bonding-curve token ledger.
//
// A registry mints tracked token instances for a flat fee; each
// instance lets participants lock quote tokens for a chosen period in
// exchange for a time-locked claim on base tokens plus voting weight.
//
// Instructions:
// - create_registry: one registry per deployment namespace seed
// - create_instance: register a tracked token with its emission and
//   bonding-period tables
// - create_vote_option: creator-only vote tally under an instance
// - topup_vault: fund the redemption vault with base tokens
// - bond: lock quote tokens, split across sinks, issue a coupon
// - redeem: release a matured coupon's base tokens from the vault

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod helpers;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod bond_ledger {
    use super::*;

    pub fn create_registry(ctx: Context<CreateRegistry>, id: String) -> Result<()> {
        ctx.accounts.create_registry(id, &ctx.bumps)
    }

    pub fn create_instance(
        ctx: Context<CreateInstance>,
        id: String,
        params: CreateInstanceParams,
    ) -> Result<()> {
        ctx.accounts.create_instance(id, params, &ctx.bumps)
    }

    pub fn create_vote_option(ctx: Context<CreateVoteOption>, id: String) -> Result<()> {
        ctx.accounts.create_vote_option(id, &ctx.bumps)
    }

    pub fn topup_vault(ctx: Context<TopupVault>, amount: u64) -> Result<()> {
        ctx.accounts.topup_vault(amount)
    }

    pub fn bond(
        ctx: Context<Bond>,
        coupon_id: String,
        amount: u64,
        period_index: u8,
    ) -> Result<()> {
        ctx.accounts.bond(coupon_id, amount, period_index, &ctx.bumps)
    }

    pub fn redeem(ctx: Context<Redeem>, _coupon_id: String) -> Result<()> {
        ctx.accounts.redeem()
    }
}
