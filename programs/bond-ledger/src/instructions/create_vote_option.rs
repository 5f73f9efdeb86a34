use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::*;
use crate::state::*;

// Vote options are creator-only; one PDA per (instance, option id), so
// a duplicate option id fails at account creation.
#[derive(Accounts)]
#[instruction(id: String)]
pub struct CreateVoteOption<'info> {
    #[account(
        mut,
        address = ledger.creator_address @ LedgerError::Unauthorized,
    )]
    pub creator: Signer<'info>,

    #[account(
        seeds = [registry.id.as_bytes()],
        bump = registry.bump,
    )]
    pub registry: Box<Account<'info, Registry>>,

    #[account(
        seeds = [registry.key().as_ref(), ledger.id.as_bytes()],
        bump = ledger.ledger_bump,
    )]
    pub ledger: Box<Account<'info, TokenLedger>>,

    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + VoteTally::INIT_SPACE,
        seeds = [ledger.key().as_ref(), id.as_bytes()],
        bump,
    )]
    pub vote_tally: Box<Account<'info, VoteTally>>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateVoteOption<'info> {
    pub fn create_vote_option(&mut self, id: String, bumps: &CreateVoteOptionBumps) -> Result<()> {
        require!(
            !id.is_empty() && id.len() <= MAX_ID_LEN,
            LedgerError::InvalidIdLength
        );

        self.vote_tally.set_inner(VoteTally {
            id,
            token_state_address: self.ledger.key(),
            total_votes: 0,
            bump: bumps.vote_tally,
        });

        Ok(())
    }
}
