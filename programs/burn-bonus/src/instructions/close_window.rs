use anchor_lang::prelude::*;

use crate::constants::BONUS_ROUND_SEED;
use crate::error::BurnBonusError;
use crate::events::EntryWindowClosed;
use crate::state::BonusRound;

/// Accounts required to close the entry window.
#[derive(Accounts)]
pub struct CloseWindow<'info> {
    pub authority: Signer<'info>,

    /// The bonus round state account.
    #[account(
        mut,
        seeds = [BONUS_ROUND_SEED],
        bump = bonus_round.bump,
    )]
    pub bonus_round: Account<'info, BonusRound>,
}

/// Moves the round to `Picking` so entries stop counting. No status
/// precondition, matching the permissive reference behavior.
pub fn process_close_window(ctx: Context<CloseWindow>) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.authority.key(),
        ctx.accounts.bonus_round.authority,
        BurnBonusError::Unauthorized
    );

    let bonus_round = &mut ctx.accounts.bonus_round;
    bonus_round.close_window();

    emit!(EntryWindowClosed {
        round: bonus_round.round,
    });

    Ok(())
}
