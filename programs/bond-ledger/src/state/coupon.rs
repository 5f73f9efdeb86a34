use anchor_lang::prelude::*;

use crate::constants::MAX_ID_LEN;

// Redemption claim for a single bond. Created once at a PDA derived
// from (instance, redeemer, caller-chosen id), flipped to redeemed
// exactly once, terminal after that.
#[account]
#[derive(InitSpace, Default)]
pub struct Coupon {
    #[max_len(MAX_ID_LEN)]
    pub id: String,
    pub redeemer_address: Pubkey,
    pub token_state_address: Pubkey,
    pub amount_owed: u64,
    pub unlock_time: i64,
    pub is_redeemed: bool,
    pub period_index: u8,
    pub sequence: u64,
    pub bump: u8,
}

impl Coupon {
    pub fn is_mature(&self, now: i64) -> bool {
        now >= self.unlock_time
    }
}
