use anchor_lang::prelude::*;

use crate::state::ArchiveReason;

#[event]
pub struct BonusInitialized {
    pub authority: Pubkey,
    pub round: u64,
    pub reward: u64,
}

#[event]
pub struct RoundOpened {
    pub round: u64,
    pub reward: u64,
    pub opened_at: i64,
    pub closes_at: Option<i64>,
}

#[event]
pub struct EntryWindowClosed {
    pub round: u64,
}

#[event]
pub struct WinnerPicked {
    pub round: u64,
    pub winner: Pubkey,
    pub unique_buyers: u32,
    pub burn_tx_sig: String,
    pub claim_deadline_at: i64,
}

#[event]
pub struct RoundRolledOver {
    pub prev_round: u64,
    pub new_round: u64,
    pub new_reward: u64,
    pub reason: ArchiveReason,
}

#[event]
pub struct PrizeClaimed {
    pub round: u64,
    pub winner: Pubkey,
    pub at: i64,
}

#[event]
pub struct PayoutMarked {
    pub round: u64,
}
