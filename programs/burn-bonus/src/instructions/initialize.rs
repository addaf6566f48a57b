use anchor_lang::prelude::*;

use crate::constants::BONUS_ROUND_SEED;
use crate::events::BonusInitialized;
use crate::state::{BonusRound, RoundStatus};

/// Accounts required to create the bonus round state account.
/// The payer becomes the authority for all lifecycle operations.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for account creation; recorded as authority.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The single bonus round state account, created here.
    #[account(
        init,
        payer = authority,
        space = BonusRound::SPACE,
        seeds = [BONUS_ROUND_SEED],
        bump,
    )]
    pub bonus_round: Box<Account<'info, BonusRound>>,

    /// System program to create the account.
    pub system_program: Program<'info, System>,
}

/// Bootstraps round 1 in `Open` status with the given reward.
pub fn process_initialize(
    ctx: Context<Initialize>,
    reward: u64,
    closes_at: Option<i64>,
) -> Result<()> {
    let clock = Clock::get()?;
    let bonus_round = &mut ctx.accounts.bonus_round;

    bonus_round.bump = ctx.bumps.bonus_round;
    bonus_round.authority = ctx.accounts.authority.key();
    bonus_round.round = 1;
    bonus_round.reward = reward;
    bonus_round.status = RoundStatus::Open;
    bonus_round.opened_at = Some(clock.unix_timestamp);
    bonus_round.closes_at = closes_at;
    bonus_round.winner = None;
    bonus_round.claim_deadline_at = None;
    bonus_round.claimed_by = None;
    bonus_round.history = Vec::new();

    emit!(BonusInitialized {
        authority: bonus_round.authority,
        round: bonus_round.round,
        reward: bonus_round.reward,
    });

    Ok(())
}
