use anchor_lang::prelude::*;

use crate::constants::MAX_ID_LEN;
use crate::errors::*;

// Deployment-wide registry. Counts token instances and collects the
// flat creation fee into its payment token account.
#[account]
#[derive(InitSpace, Default)]
pub struct Registry {
    #[max_len(MAX_ID_LEN)]
    pub id: String,
    pub index: u64,
    pub cost: u64,
    pub payment_mint: Pubkey,
    pub payment_address: Pubkey,
    pub total_collected: u64,
    pub bump: u8,
}

impl Registry {
    // Admits one more instance: bumps the monotonic counter and records
    // the fee that paid for it. Returns the new instance index.
    pub fn admit_instance(&mut self) -> Result<u64> {
        self.index = self
            .index
            .checked_add(1)
            .ok_or(LedgerError::Overflow)?;
        self.total_collected = self
            .total_collected
            .checked_add(self.cost)
            .ok_or(LedgerError::Overflow)?;
        Ok(self.index)
    }
}
