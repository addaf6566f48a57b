use anchor_lang::prelude::*;

use crate::constants::BONUS_ROUND_SEED;
use crate::error::BurnBonusError;
use crate::events::PayoutMarked;
use crate::state::BonusRound;

/// Accounts required to mark the round paid.
#[derive(Accounts)]
pub struct MarkPaid<'info> {
    pub authority: Signer<'info>,

    /// The bonus round state account.
    #[account(
        mut,
        seeds = [BONUS_ROUND_SEED],
        bump = bonus_round.bump,
    )]
    pub bonus_round: Account<'info, BonusRound>,
}

/// Records that the payout happened out of band. The actual token transfer
/// is never performed here; this only asserts it was. No status
/// precondition, matching the permissive reference behavior.
pub fn process_mark_paid(ctx: Context<MarkPaid>) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.authority.key(),
        ctx.accounts.bonus_round.authority,
        BurnBonusError::Unauthorized
    );

    let bonus_round = &mut ctx.accounts.bonus_round;
    bonus_round.mark_paid();

    emit!(PayoutMarked {
        round: bonus_round.round,
    });

    Ok(())
}
