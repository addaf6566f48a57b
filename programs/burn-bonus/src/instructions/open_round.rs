use anchor_lang::prelude::*;

use crate::constants::BONUS_ROUND_SEED;
use crate::error::BurnBonusError;
use crate::events::RoundOpened;
use crate::state::BonusRound;

/// Accounts required to (re)open the current round.
#[derive(Accounts)]
pub struct OpenRound<'info> {
    pub authority: Signer<'info>,

    /// The bonus round state account.
    #[account(
        mut,
        seeds = [BONUS_ROUND_SEED],
        bump = bonus_round.bump,
    )]
    pub bonus_round: Account<'info, BonusRound>,
}

/// Hard reset of the entry fields: status back to `Open`, winner and claim
/// fields cleared. `round`/`reward`/`closes_at` change only when provided.
/// Valid from any status.
pub fn process_open_round(
    ctx: Context<OpenRound>,
    round: Option<u64>,
    reward: Option<u64>,
    closes_at: Option<i64>,
) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.authority.key(),
        ctx.accounts.bonus_round.authority,
        BurnBonusError::Unauthorized
    );

    let clock = Clock::get()?;
    let bonus_round = &mut ctx.accounts.bonus_round;
    bonus_round.open(clock.unix_timestamp, round, reward, closes_at);

    msg!("Round {} opened, reward {}", bonus_round.round, bonus_round.reward);
    emit!(RoundOpened {
        round: bonus_round.round,
        reward: bonus_round.reward,
        opened_at: clock.unix_timestamp,
        closes_at: bonus_round.closes_at,
    });

    Ok(())
}
