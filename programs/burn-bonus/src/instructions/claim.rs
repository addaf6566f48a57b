use anchor_lang::prelude::*;

use crate::constants::BONUS_ROUND_SEED;
use crate::events::{PrizeClaimed, RoundRolledOver};
use crate::state::{ArchiveReason, BonusRound, ClaimDecision};

/// Accounts required to claim the prize. Open to any signer; the state
/// machine itself decides whether the claimant is the winner.
#[derive(Accounts)]
pub struct Claim<'info> {
    pub claimant: Signer<'info>,

    /// The bonus round state account.
    #[account(
        mut,
        seeds = [BONUS_ROUND_SEED],
        bump = bonus_round.bump,
    )]
    pub bonus_round: Account<'info, BonusRound>,
}

/// Validates the claimant against the recorded winner and deadline.
///
/// The deadline is checked before the address: a late claim, even from the
/// rightful winner, archives the round and rolls the doubled prize into the
/// next one instead of paying out. An in-window claim from the winner marks
/// the round paid; disbursement stays an out-of-band responsibility.
pub fn process_claim(ctx: Context<Claim>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let claimant = ctx.accounts.claimant.key();
    let bonus_round = &mut ctx.accounts.bonus_round;

    match bonus_round.claim_decision(&claimant, now)? {
        ClaimDecision::Expired => {
            let prev_round = bonus_round.round;
            bonus_round.roll_forward(now, None, ArchiveReason::ClaimExpired)?;

            msg!(
                "Claim window expired; prize rolled into round {}",
                bonus_round.round
            );
            emit!(RoundRolledOver {
                prev_round,
                new_round: bonus_round.round,
                new_reward: bonus_round.reward,
                reason: ArchiveReason::ClaimExpired,
            });
        }
        ClaimDecision::Accept => {
            bonus_round.record_claim(claimant, now);

            msg!("Round {} claimed by {}", bonus_round.round, claimant);
            emit!(PrizeClaimed {
                round: bonus_round.round,
                winner: claimant,
                at: now,
            });
        }
    }

    Ok(())
}
