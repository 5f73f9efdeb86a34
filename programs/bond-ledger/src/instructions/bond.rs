use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::*;
use crate::helpers::transfer_tokens;
use crate::state::*;

// The core state transition: locks quote tokens for a chosen period,
// splits them across the runway/surplus/reserve sinks, advances the
// emission schedule and issues a time-locked redemption coupon. An
// optional vote tally account turns the bond into a weighted vote.
#[derive(Accounts)]
#[instruction(coupon_id: String)]
pub struct Bond<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [registry.id.as_bytes()],
        bump = registry.bump,
    )]
    pub registry: Box<Account<'info, Registry>>,

    #[account(
        mut,
        seeds = [registry.key().as_ref(), ledger.id.as_bytes()],
        bump = ledger.ledger_bump,
    )]
    pub ledger: Box<Account<'info, TokenLedger>>,

    #[account(
        mut,
        constraint = user_quote_token.mint == ledger.quote_mint @ LedgerError::MintMismatch,
        constraint = user_quote_token.owner == user.key() @ LedgerError::Unauthorized,
    )]
    pub user_quote_token: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        address = ledger.quote_reserve_address @ LedgerError::MintMismatch,
    )]
    pub quote_reserve: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        address = ledger.quote_surplus_address @ LedgerError::MintMismatch,
    )]
    pub quote_surplus: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        address = ledger.quote_runway_address @ LedgerError::MintMismatch,
    )]
    pub quote_runway: Box<Account<'info, TokenAccount>>,

    // Coupon ids are caller-chosen; reusing one for the same user and
    // instance lands on an existing PDA and fails creation
    #[account(
        init,
        payer = user,
        space = ANCHOR_DISCRIMINATOR + Coupon::INIT_SPACE,
        seeds = [ledger.key().as_ref(), user.key().as_ref(), coupon_id.as_bytes()],
        bump,
    )]
    pub coupon: Box<Account<'info, Coupon>>,

    #[account(
        mut,
        constraint = vote_tally.token_state_address == ledger.key() @ LedgerError::VoteTargetMismatch,
    )]
    pub vote_tally: Option<Account<'info, VoteTally>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Bond<'info> {
    pub fn bond(
        &mut self,
        coupon_id: String,
        amount: u64,
        period_index: u8,
        bumps: &BondBumps,
    ) -> Result<()> {
        require!(
            !coupon_id.is_empty() && coupon_id.len() <= MAX_ID_LEN,
            LedgerError::InvalidIdLength
        );
        require!(
            self.user_quote_token.amount >= amount,
            LedgerError::InsufficientFunds
        );

        let now = Clock::get()?.unix_timestamp;
        let outcome = self.ledger.apply_bond(amount, period_index, now)?;

        // the three split legs; all-or-nothing under the runtime's
        // per-instruction atomicity
        if outcome.runway_cut > 0 {
            transfer_tokens(
                outcome.runway_cut,
                &self.token_program.to_account_info(),
                &self.user_quote_token.to_account_info(),
                &self.quote_runway.to_account_info(),
                &self.user.to_account_info(),
            )?;
        }
        if outcome.reserve_cut > 0 {
            transfer_tokens(
                outcome.reserve_cut,
                &self.token_program.to_account_info(),
                &self.user_quote_token.to_account_info(),
                &self.quote_reserve.to_account_info(),
                &self.user.to_account_info(),
            )?;
        }
        if outcome.surplus_cut > 0 {
            transfer_tokens(
                outcome.surplus_cut,
                &self.token_program.to_account_info(),
                &self.user_quote_token.to_account_info(),
                &self.quote_surplus.to_account_info(),
                &self.user.to_account_info(),
            )?;
        }

        self.coupon.set_inner(Coupon {
            id: coupon_id,
            redeemer_address: self.user.key(),
            token_state_address: self.ledger.key(),
            amount_owed: outcome.reward,
            unlock_time: outcome.unlock_time,
            is_redeemed: false,
            period_index,
            sequence: outcome.sequence,
            bump: bumps.coupon,
        });

        // voting weight is the gross bonded amount, counted only while
        // the voting window is open
        if self.ledger.voting_open(now) {
            if let Some(vote_tally) = self.vote_tally.as_mut() {
                vote_tally.credit(amount)?;
            }
        }

        msg!(
            "bonded {} quote at period {}, {} base redeemable at {}",
            amount,
            period_index,
            outcome.reward,
            outcome.unlock_time
        );

        Ok(())
    }
}
