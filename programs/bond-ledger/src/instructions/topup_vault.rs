use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::*;
use crate::helpers::transfer_tokens;
use crate::state::*;

// Deposits base tokens into the redemption vault. Bonding only issues
// claims; this is the sole path that funds them.
#[derive(Accounts)]
pub struct TopupVault<'info> {
    #[account(
        mut,
        address = ledger.creator_address @ LedgerError::Unauthorized,
    )]
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
        seeds = [ledger.key().as_ref(), BASE_VAULT_SEED],
        bump = ledger.vault_bump,
    )]
    pub base_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = user_base_token.mint == ledger.base_mint @ LedgerError::MintMismatch,
        constraint = user_base_token.owner == user.key() @ LedgerError::Unauthorized,
    )]
    pub user_base_token: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> TopupVault<'info> {
    pub fn topup_vault(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, LedgerError::ZeroAmount);
        require!(
            self.user_base_token.amount >= amount,
            LedgerError::InsufficientFunds
        );

        self.ledger.record_topup(amount)?;

        transfer_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.user_base_token.to_account_info(),
            &self.base_vault.to_account_info(),
            &self.user.to_account_info(),
        )?;

        Ok(())
    }
}
