//! Burn Bonus — bonus round state machine for token burn events.
//!
//! One PDA holds the current round. The authority opens a round, closes the
//! entry window, and picks a winner from the round's buyer list using a
//! deterministic polynomial hash of the burn transaction signature. The
//! winner then has a 5-minute window to claim; an unclaimed prize doubles
//! and rolls into the next round, with the old round archived into an
//! append-only history. Token disbursement itself happens out of band and
//! is only recorded here.

use anchor_lang::prelude::*;
use instructions::*;

mod constants;
mod error;
mod events;
mod instructions;
mod selector;
mod state;

declare_id!("DJnrFtfX2ty8i8fYYgvqs76omikfY4C6jHBgkA4pt6Xg");

#[program]
pub mod burn_bonus {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        reward: u64,
        closes_at: Option<i64>,
    ) -> Result<()> {
        process_initialize(ctx, reward, closes_at)
    }

    pub fn open_round(
        ctx: Context<OpenRound>,
        round: Option<u64>,
        reward: Option<u64>,
        closes_at: Option<i64>,
    ) -> Result<()> {
        process_open_round(ctx, round, reward, closes_at)
    }

    pub fn close_window(ctx: Context<CloseWindow>) -> Result<()> {
        process_close_window(ctx)
    }

    pub fn pick_winner(
        ctx: Context<PickWinner>,
        burn_tx_sig: String,
        buyers: Vec<Pubkey>,
    ) -> Result<()> {
        process_pick_winner(ctx, burn_tx_sig, buyers)
    }

    pub fn rollover(ctx: Context<Rollover>, closes_at: Option<i64>) -> Result<()> {
        process_rollover(ctx, closes_at)
    }

    pub fn mark_paid(ctx: Context<MarkPaid>) -> Result<()> {
        process_mark_paid(ctx)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        process_claim(ctx)
    }
}
