use anchor_lang::prelude::*;

use crate::constants::{BONUS_ROUND_SEED, MAX_BURN_SIG_LEN, MAX_BUYERS};
use crate::error::BurnBonusError;
use crate::events::WinnerPicked;
use crate::selector::select_winner;
use crate::state::BonusRound;

/// Accounts required to pick a winner.
///
/// This ensures that:
/// 1. Only the round authority can pick a winner.
/// 2. The round is in `Picking` status (checked in the handler, so the
///    current status can be logged when it is not).
#[derive(Accounts)]
pub struct PickWinner<'info> {
    pub authority: Signer<'info>,

    /// The bonus round state account.
    #[account(
        mut,
        seeds = [BONUS_ROUND_SEED],
        bump = bonus_round.bump,
    )]
    pub bonus_round: Account<'info, BonusRound>,
}

/// Deterministically picks the winner from the buyer list.
///
/// The buyer list is deduplicated preserving first-occurrence order and the
/// winner is `unique[hash_to_int(burn_tx_sig) % unique.len()]`, so the same
/// signature and list always reproduce the same pick. Opens the 5-minute
/// claim window.
pub fn process_pick_winner(
    ctx: Context<PickWinner>,
    burn_tx_sig: String,
    buyers: Vec<Pubkey>,
) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.authority.key(),
        ctx.accounts.bonus_round.authority,
        BurnBonusError::Unauthorized
    );

    require!(!burn_tx_sig.is_empty(), BurnBonusError::EmptyBurnSignature);
    require!(
        burn_tx_sig.len() <= MAX_BURN_SIG_LEN,
        BurnBonusError::BurnSignatureTooLong
    );
    require!(!buyers.is_empty(), BurnBonusError::NoBuyers);
    require!(buyers.len() <= MAX_BUYERS, BurnBonusError::TooManyBuyers);

    let clock = Clock::get()?;
    let bonus_round = &mut ctx.accounts.bonus_round;

    if bonus_round.ensure_pickable().is_err() {
        msg!("Current status: {:?}", bonus_round.status);
        return Err(BurnBonusError::InvalidRoundStatus.into());
    }

    // Validated non-empty above.
    let (winner, unique_count) = select_winner(&burn_tx_sig, &buyers)
        .ok_or(BurnBonusError::NoBuyers)?;

    msg!("Unique buyers: {}", unique_count);
    msg!("Winner: {}", winner);

    let claim_deadline_at =
        bonus_round.set_winner(winner, burn_tx_sig.clone(), clock.unix_timestamp);

    emit!(WinnerPicked {
        round: bonus_round.round,
        winner,
        unique_buyers: unique_count as u32,
        burn_tx_sig,
        claim_deadline_at,
    });

    Ok(())
}
