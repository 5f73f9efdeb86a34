use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::constants::*;
use crate::errors::*;
use crate::state::*;

// One registry per seed. The registry address is derived from the id
// alone, so creating the same id twice fails at account creation.
#[derive(Accounts)]
#[instruction(id: String)]
pub struct CreateRegistry<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + Registry::INIT_SPACE,
        seeds = [id.as_bytes()],
        bump,
    )]
    pub registry: Account<'info, Registry>,

    // Mint the creation fee is charged in
    pub payment_mint: Account<'info, Mint>,

    // Token account the creation fees accrue to
    #[account(
        constraint = payment_address.mint == payment_mint.key() @ LedgerError::MintMismatch
    )]
    pub payment_address: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateRegistry<'info> {
    pub fn create_registry(&mut self, id: String, bumps: &CreateRegistryBumps) -> Result<()> {
        require!(
            !id.is_empty() && id.len() <= MAX_ID_LEN,
            LedgerError::InvalidIdLength
        );

        self.registry.set_inner(Registry {
            id,
            index: 0,
            cost: CREATION_FEE,
            payment_mint: self.payment_mint.key(),
            payment_address: self.payment_address.key(),
            total_collected: 0,
            bump: bumps.registry,
        });

        Ok(())
    }
}
