use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::*;
use crate::helpers::{bond_emission, fee_cut};

// Per-instance bonding ledger. Owns the emission schedule, the three
// quote-token sinks and the bonding-period table for one tracked token.
//
// Two emission tracks are kept deliberately:
// - `total_emissions` accumulates each bond's reward at its chosen
//   period multiplier and is what halving thresholds are compared
//   against;
// - `mps` accumulates the same tranche at the highest enabled
//   multiplier, the supply ceiling had every bond locked for the
//   longest period.
// The tracks diverge whenever a bond picks anything but the top
// period; both are load-bearing and must not be collapsed.
#[account]
#[derive(InitSpace, Default)]
pub struct TokenLedger {
    #[max_len(MAX_ID_LEN)]
    pub id: String,
    pub state_index: u64,
    pub creator_address: Pubkey,

    // mints and quote-token sinks
    pub base_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub quote_reserve_address: Pubkey,
    pub quote_surplus_address: Pubkey,
    pub quote_runway_address: Pubkey,

    // emission schedule
    pub initial_reserve: u64,
    pub emission_rate: u64,
    pub bonding_cost: u64,
    pub next_halving: u64,
    pub current_epoch_emissions: u64,
    pub total_emissions: u64,
    pub epoch_count: u32,

    // bonding-period table
    pub period_lengths: [i64; 10],
    pub period_multipliers: [u32; 10],
    pub treasury_split: [u32; 10],
    pub period_enabled: [bool; 10],

    // accumulators
    pub quote_bonded: u64,
    pub total_reserve: u64,
    pub total_surplus_reserve: u64,
    pub total_runway_reserve: u64,
    pub total_topup: u64,
    pub total_redeemed: u64,
    pub coupon_count: u64,
    pub mps: u64,
    pub floor_price: u64,
    pub avg_price: u64,

    // policy
    pub runway_fee: u32,
    pub updates_allowed: bool,
    pub launch_date: i64,
    pub voting_enabled_date: i64,

    // bumps
    pub ledger_bump: u8,
    pub vault_bump: u8,
}

// Everything a single bond changes outside the ledger account itself:
// the three transfer legs, the coupon reward and its unlock time.
pub struct BondOutcome {
    pub runway_cut: u64,
    pub reserve_cut: u64,
    pub surplus_cut: u64,
    pub reward: u64,
    pub unlock_time: i64,
    pub sequence: u64,
}

impl TokenLedger {
    pub fn assert_period_bondable(&self, period_index: u8) -> Result<()> {
        let enabled = self
            .period_enabled
            .get(period_index as usize)
            .copied()
            .unwrap_or(false);
        require!(enabled, LedgerError::PeriodDisabled);
        Ok(())
    }

    // Votes are only counted while the voting window is open.
    pub fn voting_open(&self, now: i64) -> bool {
        now < self.voting_enabled_date
    }

    // Applies one bond to the ledger: splits the quote amount across
    // the runway/surplus/reserve sinks, advances both emission tracks
    // and settles a halving if this bond crossed the threshold. The
    // caller performs the token transfers described by the outcome.
    pub fn apply_bond(&mut self, amount: u64, period_index: u8, now: i64) -> Result<BondOutcome> {
        self.assert_period_bondable(period_index)?;
        require!(amount >= MIN_BOND_AMOUNT, LedgerError::BondTooSmall);
        let period = period_index as usize;

        // split: runway fee off the top, treasury split off the remainder
        let runway_cut = fee_cut(amount, self.runway_fee as u64)?;
        let remainder = amount
            .checked_sub(runway_cut)
            .ok_or(LedgerError::Overflow)?;
        let surplus_cut = fee_cut(remainder, self.treasury_split[period] as u64)?;
        let reserve_cut = remainder
            .checked_sub(surplus_cut)
            .ok_or(LedgerError::Overflow)?;

        // both emission tracks are priced at the pre-halving rate, so a
        // bond that crosses the threshold still earns the old schedule
        let reward = bond_emission(
            amount,
            self.emission_rate,
            self.bonding_cost,
            self.period_multipliers[period],
        )?;
        let ceiling = bond_emission(
            amount,
            self.emission_rate,
            self.bonding_cost,
            self.max_enabled_multiplier(),
        )?;

        self.quote_bonded = self
            .quote_bonded
            .checked_add(remainder)
            .ok_or(LedgerError::Overflow)?;
        self.total_reserve = self
            .total_reserve
            .checked_add(reserve_cut)
            .ok_or(LedgerError::Overflow)?;
        self.total_surplus_reserve = self
            .total_surplus_reserve
            .checked_add(surplus_cut)
            .ok_or(LedgerError::Overflow)?;
        self.total_runway_reserve = self
            .total_runway_reserve
            .checked_add(runway_cut)
            .ok_or(LedgerError::Overflow)?;

        self.total_emissions = self
            .total_emissions
            .checked_add(reward)
            .ok_or(LedgerError::Overflow)?;
        self.mps = self.mps.checked_add(ceiling).ok_or(LedgerError::Overflow)?;

        // checked once per bond, after the emission update
        if self.total_emissions >= self.next_halving {
            self.settle_halving()?;
        }

        self.coupon_count = self
            .coupon_count
            .checked_add(1)
            .ok_or(LedgerError::Overflow)?;

        let unlock_time = now
            .checked_add(self.period_lengths[period])
            .ok_or(LedgerError::Overflow)?;

        Ok(BondOutcome {
            runway_cut,
            reserve_cut,
            surplus_cut,
            reward,
            unlock_time,
            sequence: self.coupon_count,
        })
    }

    // Steps the emission schedule down one epoch: the per-epoch budget
    // and the per-bond rate both halve, and the next threshold moves
    // out by the new budget.
    fn settle_halving(&mut self) -> Result<()> {
        self.epoch_count = self
            .epoch_count
            .checked_add(1)
            .ok_or(LedgerError::Overflow)?;
        self.current_epoch_emissions /= 2;
        self.emission_rate /= 2;
        self.next_halving = self
            .next_halving
            .checked_add(self.current_epoch_emissions)
            .ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    // The multiplier of the highest enabled period. Creation-time
    // validation means at least one period is enabled whenever a bond
    // is admitted; the baseline only covers the unreachable empty table.
    fn max_enabled_multiplier(&self) -> u32 {
        self.period_enabled
            .iter()
            .enumerate()
            .rev()
            .find(|(_, enabled)| **enabled)
            .map_or(MULTIPLIER_SCALE as u32, |(i, _)| self.period_multipliers[i])
    }

    pub fn record_topup(&mut self, amount: u64) -> Result<()> {
        self.total_topup = self
            .total_topup
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    pub fn record_redemption(&mut self, amount: u64) -> Result<()> {
        self.total_redeemed = self
            .total_redeemed
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        Ok(())
    }
}
