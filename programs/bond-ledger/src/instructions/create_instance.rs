use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::*;
use crate::helpers::transfer_tokens;
use crate::state::*;

// Full parameter set for one tracked token: emission schedule, the
// ten-slot bonding-period table and the policy flags.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default)]
pub struct CreateInstanceParams {
    pub next_halving: u64,
    pub emission_rate: u64,
    pub bonding_cost: u64,
    pub initial_reserve: u64,
    pub period_lengths: [i64; 10],
    pub period_multipliers: [u32; 10],
    pub treasury_split: [u32; 10],
    pub period_enabled: [bool; 10],
    pub updates_allowed: bool,
    pub voting_enabled_date: i64,
    pub launch_date: i64,
    pub runway_fee: u32,
}

#[derive(Accounts)]
#[instruction(id: String)]
pub struct CreateInstance<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [registry.id.as_bytes()],
        bump = registry.bump,
    )]
    pub registry: Box<Account<'info, Registry>>,

    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + TokenLedger::INIT_SPACE,
        seeds = [registry.key().as_ref(), id.as_bytes()],
        bump,
    )]
    pub ledger: Box<Account<'info, TokenLedger>>,

    pub base_mint: Box<Account<'info, Mint>>,
    pub quote_mint: Box<Account<'info, Mint>>,

    // Redemption vault, owned by the ledger PDA; the only source of
    // base tokens released by redeem
    #[account(
        init,
        payer = creator,
        token::mint = base_mint,
        token::authority = ledger,
        seeds = [ledger.key().as_ref(), BASE_VAULT_SEED],
        bump,
    )]
    pub base_vault: Box<Account<'info, TokenAccount>>,

    // The three quote-token sinks bonds pay into
    #[account(
        constraint = quote_reserve.mint == quote_mint.key() @ LedgerError::MintMismatch
    )]
    pub quote_reserve: Box<Account<'info, TokenAccount>>,
    #[account(
        constraint = quote_surplus.mint == quote_mint.key() @ LedgerError::MintMismatch
    )]
    pub quote_surplus: Box<Account<'info, TokenAccount>>,
    #[account(
        constraint = quote_runway.mint == quote_mint.key() @ LedgerError::MintMismatch
    )]
    pub quote_runway: Box<Account<'info, TokenAccount>>,

    // Creation fee legs
    #[account(
        mut,
        constraint = creator_payment.mint == registry.payment_mint @ LedgerError::MintMismatch,
        constraint = creator_payment.owner == creator.key() @ LedgerError::Unauthorized,
    )]
    pub creator_payment: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        address = registry.payment_address @ LedgerError::MintMismatch,
    )]
    pub registry_payment: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

fn validate_params(params: &CreateInstanceParams) -> Result<()> {
    require!(params.next_halving > 0, LedgerError::ZeroAmount);
    require!(params.emission_rate > 0, LedgerError::ZeroAmount);
    require!(params.bonding_cost > 0, LedgerError::ZeroAmount);
    require!(
        params.initial_reserve <= params.next_halving,
        LedgerError::InvalidEmissionSchedule
    );
    require!(
        params.runway_fee as u64 <= FEE_SCALE,
        LedgerError::FeeTooHigh
    );

    for period in 0..BOND_PERIODS {
        require!(
            params.treasury_split[period] as u64 <= FEE_SCALE,
            LedgerError::InvalidPeriodTable
        );
        if params.period_enabled[period] {
            require!(
                params.period_lengths[period] > 0,
                LedgerError::InvalidPeriodTable
            );
            require!(
                params.period_multipliers[period] as u64 >= MULTIPLIER_SCALE,
                LedgerError::InvalidPeriodTable
            );
        }
    }

    Ok(())
}

impl<'info> CreateInstance<'info> {
    pub fn create_instance(
        &mut self,
        id: String,
        params: CreateInstanceParams,
        bumps: &CreateInstanceBumps,
    ) -> Result<()> {
        require!(
            !id.is_empty() && id.len() <= MAX_ID_LEN,
            LedgerError::InvalidIdLength
        );
        require!(
            self.base_mint.key() != self.quote_mint.key(),
            LedgerError::IdenticalMints
        );
        validate_params(&params)?;

        // entry fee up front; the whole instruction unwinds on failure
        require!(
            self.creator_payment.amount >= self.registry.cost,
            LedgerError::InsufficientFunds
        );
        transfer_tokens(
            self.registry.cost,
            &self.token_program.to_account_info(),
            &self.creator_payment.to_account_info(),
            &self.registry_payment.to_account_info(),
            &self.creator.to_account_info(),
        )?;
        let state_index = self.registry.admit_instance()?;

        self.ledger.set_inner(TokenLedger {
            id,
            state_index,
            creator_address: self.creator.key(),

            base_mint: self.base_mint.key(),
            quote_mint: self.quote_mint.key(),
            quote_reserve_address: self.quote_reserve.key(),
            quote_surplus_address: self.quote_surplus.key(),
            quote_runway_address: self.quote_runway.key(),

            initial_reserve: params.initial_reserve,
            emission_rate: params.emission_rate,
            bonding_cost: params.bonding_cost,
            next_halving: params.next_halving,
            // pre-bonding supply is treated uniformly with bonded
            // supply: both tracks start at the initial reserve
            current_epoch_emissions: params.initial_reserve,
            total_emissions: params.initial_reserve,
            epoch_count: 0,

            period_lengths: params.period_lengths,
            period_multipliers: params.period_multipliers,
            treasury_split: params.treasury_split,
            period_enabled: params.period_enabled,

            quote_bonded: 0,
            total_reserve: 0,
            total_surplus_reserve: 0,
            total_runway_reserve: 0,
            total_topup: 0,
            total_redeemed: 0,
            coupon_count: 0,
            mps: params.initial_reserve,
            floor_price: 0,
            avg_price: 0,

            runway_fee: params.runway_fee,
            updates_allowed: params.updates_allowed,
            launch_date: params.launch_date,
            voting_enabled_date: params.voting_enabled_date,

            ledger_bump: bumps.ledger,
            vault_bump: bumps.base_vault,
        });

        msg!(
            "instance {} registered at index {}",
            self.ledger.id,
            state_index
        );

        Ok(())
    }
}
