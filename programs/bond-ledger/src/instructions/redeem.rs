use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::*;
use crate::helpers::transfer_from_vault;
use crate::state::*;

// Single-shot redemption of a matured coupon: releases the owed base
// tokens from the vault and retires the coupon.
#[derive(Accounts)]
#[instruction(coupon_id: String)]
pub struct Redeem<'info> {
    #[account(
        mut,
        address = coupon.redeemer_address @ LedgerError::Unauthorized,
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
        seeds = [ledger.key().as_ref(), user.key().as_ref(), coupon_id.as_bytes()],
        bump = coupon.bump,
    )]
    pub coupon: Box<Account<'info, Coupon>>,

    #[account(
        mut,
        constraint = user_base_token.mint == ledger.base_mint @ LedgerError::MintMismatch,
        constraint = user_base_token.owner == user.key() @ LedgerError::Unauthorized,
    )]
    pub user_base_token: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [ledger.key().as_ref(), BASE_VAULT_SEED],
        bump = ledger.vault_bump,
    )]
    pub base_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Redeem<'info> {
    pub fn redeem(&mut self) -> Result<()> {
        require!(!self.coupon.is_redeemed, LedgerError::AlreadyRedeemed);

        let now = Clock::get()?.unix_timestamp;
        if !self.coupon.is_mature(now) {
            msg!(
                "coupon locked for another {}s",
                self.coupon.unlock_time.saturating_sub(now)
            );
            return err!(LedgerError::StillLocked);
        }

        // bonding only issues claims and topups alone fund them, so
        // the vault can run dry
        require!(
            self.base_vault.amount >= self.coupon.amount_owed,
            LedgerError::InsufficientVault
        );

        let registry_key = self.registry.key();
        let ledger_seeds = &[
            registry_key.as_ref(),
            self.ledger.id.as_bytes(),
            &[self.ledger.ledger_bump],
        ];
        transfer_from_vault(
            self.coupon.amount_owed,
            &self.token_program.to_account_info(),
            &self.base_vault.to_account_info(),
            &self.user_base_token.to_account_info(),
            &self.ledger.to_account_info(),
            ledger_seeds,
        )?;

        self.coupon.is_redeemed = true;
        self.ledger.record_redemption(self.coupon.amount_owed)?;

        msg!("coupon {} redeemed for {} base", self.coupon.id, self.coupon.amount_owed);

        Ok(())
    }
}
