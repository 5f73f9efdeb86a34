use anchor_lang::prelude::*;

use crate::constants::MAX_ID_LEN;
use crate::errors::*;

// Running vote tally for one named option under a token instance.
// Credited by bonds that name the option; never decremented.
#[account]
#[derive(InitSpace, Default)]
pub struct VoteTally {
    #[max_len(MAX_ID_LEN)]
    pub id: String,
    pub token_state_address: Pubkey,
    pub total_votes: u64,
    pub bump: u8,
}

impl VoteTally {
    pub fn credit(&mut self, weight: u64) -> Result<()> {
        self.total_votes = self
            .total_votes
            .checked_add(weight)
            .ok_or(LedgerError::Overflow)?;
        Ok(())
    }
}
