use anchor_lang::prelude::*;

use crate::constants::BONUS_ROUND_SEED;
use crate::error::BurnBonusError;
use crate::events::RoundRolledOver;
use crate::state::{ArchiveReason, BonusRound};

/// Accounts required to roll the round over.
#[derive(Accounts)]
pub struct Rollover<'info> {
    pub authority: Signer<'info>,

    /// The bonus round state account.
    #[account(
        mut,
        seeds = [BONUS_ROUND_SEED],
        bump = bonus_round.bump,
    )]
    pub bonus_round: Account<'info, BonusRound>,
}

/// Archives the current round into history and starts the next one with a
/// doubled reward. Valid from any status.
pub fn process_rollover(ctx: Context<Rollover>, closes_at: Option<i64>) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.authority.key(),
        ctx.accounts.bonus_round.authority,
        BurnBonusError::Unauthorized
    );

    let clock = Clock::get()?;
    let bonus_round = &mut ctx.accounts.bonus_round;

    let prev_round = bonus_round.round;
    bonus_round.roll_forward(clock.unix_timestamp, closes_at, ArchiveReason::AdminRollover)?;

    msg!(
        "Round {} archived; round {} opened with reward {}",
        prev_round,
        bonus_round.round,
        bonus_round.reward
    );
    emit!(RoundRolledOver {
        prev_round,
        new_round: bonus_round.round,
        new_reward: bonus_round.reward,
        reason: ArchiveReason::AdminRollover,
    });

    Ok(())
}
