use anchor_lang::prelude::*;

use crate::constants::{CLAIM_WINDOW_SECS, MAX_BURN_SIG_LEN, MAX_HISTORY_LEN};
use crate::error::BurnBonusError;

/// Lifecycle of a bonus round.
///
/// `Open → Picking → Claim → Paid`, with rollover archiving the current
/// round from any status and starting a fresh `Open` one. `Rolled` marks a
/// round that expired unclaimed; the live record never carries it.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoundStatus {
    Open,
    Picking,
    Claim,
    Rolled,
    Paid,
}

/// Why a round was archived into history.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArchiveReason {
    /// Explicit admin rollover.
    AdminRollover,
    /// The picked winner missed the claim deadline.
    ClaimExpired,
}

/// The winner picked for the current round.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct Winner {
    pub address: Pubkey,
    pub picked_at: i64,
    /// Burn transaction signature the pick was derived from.
    pub burn_tx_sig: String,
}

/// Recorded once the winner successfully claims.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct ClaimedBy {
    pub address: Pubkey,
    pub at: i64,
}

/// Copy of a round at the moment it was archived. Entries are immutable
/// once pushed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Debug)]
pub struct RoundSnapshot {
    pub round: u64,
    pub reward: u64,
    pub status: RoundStatus,
    pub opened_at: Option<i64>,
    pub closes_at: Option<i64>,
    pub winner: Option<Winner>,
    pub claim_deadline_at: Option<i64>,
    pub claimed_by: Option<ClaimedBy>,
    pub archived_at: i64,
    pub reason: ArchiveReason,
}

impl RoundSnapshot {
    // 8 round + 8 reward + 1 status + 9 opened_at + 9 closes_at
    //   + (1 + 32 + 8 + 4 + MAX_BURN_SIG_LEN) winner + 9 claim_deadline_at
    //   + (1 + 32 + 8) claimed_by + 8 archived_at + 1 reason
    pub const SIZE: usize = 8 + 8 + 1 + 9 + 9 + (45 + MAX_BURN_SIG_LEN) + 9 + 41 + 8 + 1;
}

// ── BonusRound PDA ── seeds: ["bonus_round"]
// The single current-round record. Prior rounds live only in `history`.
#[account]
pub struct BonusRound {
    pub bump: u8,
    /// Admin allowed to drive the lifecycle (everything except `claim`).
    pub authority: Pubkey,
    pub round: u64,
    /// Token units awarded to this round's winner.
    pub reward: u64,
    pub status: RoundStatus,
    pub opened_at: Option<i64>,
    /// When entries stop counting. Informational; not enforced here.
    pub closes_at: Option<i64>,
    pub winner: Option<Winner>,
    pub claim_deadline_at: Option<i64>,
    pub claimed_by: Option<ClaimedBy>,
    /// Append-only archive of prior rounds, oldest first.
    pub history: Vec<RoundSnapshot>,
}

/// What `claim` should do, decided before any mutation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClaimDecision {
    /// Claimant is the winner and the window is still open.
    Accept,
    /// Deadline passed; roll the prize into the next round.
    Expired,
}

impl BonusRound {
    // 8 disc + 1 bump + 32 authority + 8 round + 8 reward + 1 status
    //   + 9 opened_at + 9 closes_at + (45 + MAX_BURN_SIG_LEN) winner
    //   + 9 claim_deadline_at + 41 claimed_by + 4 vec len
    pub const BASE_SIZE: usize =
        8 + 1 + 32 + 8 + 8 + 1 + 9 + 9 + (45 + MAX_BURN_SIG_LEN) + 9 + 41 + 4;

    pub const SPACE: usize = Self::BASE_SIZE + MAX_HISTORY_LEN * RoundSnapshot::SIZE;

    /// Hard reset of the entry fields. `round`/`reward`/`closes_at` are
    /// overridden only when a value is provided, otherwise the prior value
    /// is kept. Never fails.
    pub fn open(
        &mut self,
        now: i64,
        round: Option<u64>,
        reward: Option<u64>,
        closes_at: Option<i64>,
    ) {
        if let Some(round) = round {
            self.round = round;
        }
        if let Some(reward) = reward {
            self.reward = reward;
        }
        if let Some(closes_at) = closes_at {
            self.closes_at = Some(closes_at);
        }
        self.status = RoundStatus::Open;
        self.opened_at = Some(now);
        self.winner = None;
        self.claim_deadline_at = None;
        self.claimed_by = None;
    }

    /// Stops entries from counting. Deliberately callable from any status,
    /// matching the permissive reference behavior.
    pub fn close_window(&mut self) {
        self.status = RoundStatus::Picking;
    }

    /// A winner may only be picked while the round sits in `Picking`.
    pub fn ensure_pickable(&self) -> Result<()> {
        require!(
            self.status == RoundStatus::Picking,
            BurnBonusError::InvalidRoundStatus
        );
        Ok(())
    }

    /// Records the picked winner and opens the claim window. Returns the
    /// claim deadline.
    pub fn set_winner(&mut self, address: Pubkey, burn_tx_sig: String, now: i64) -> i64 {
        self.winner = Some(Winner {
            address,
            picked_at: now,
            burn_tx_sig,
        });
        self.status = RoundStatus::Claim;
        let deadline = now + CLAIM_WINDOW_SECS;
        self.claim_deadline_at = Some(deadline);
        deadline
    }

    /// Validates a claim without mutating anything. The deadline check runs
    /// before the address check: a late claim from the rightful winner still
    /// rolls the prize over.
    pub fn claim_decision(&self, claimant: &Pubkey, now: i64) -> Result<ClaimDecision> {
        let winner = match (&self.status, self.winner.as_ref()) {
            (RoundStatus::Claim, Some(winner)) => winner,
            _ => return Err(BurnBonusError::NotClaimable.into()),
        };
        if let Some(deadline) = self.claim_deadline_at {
            if now > deadline {
                return Ok(ClaimDecision::Expired);
            }
        }
        require_keys_eq!(winner.address, *claimant, BurnBonusError::ClaimUnauthorized);
        Ok(ClaimDecision::Accept)
    }

    /// Marks the round claimed and paid.
    pub fn record_claim(&mut self, address: Pubkey, now: i64) {
        self.claimed_by = Some(ClaimedBy { address, at: now });
        self.status = RoundStatus::Paid;
    }

    /// Records that the payout happened out of band. Deliberately callable
    /// from any status, matching the permissive reference behavior.
    pub fn mark_paid(&mut self) {
        self.status = RoundStatus::Paid;
    }

    fn snapshot(&self, archived_at: i64, reason: ArchiveReason) -> RoundSnapshot {
        RoundSnapshot {
            round: self.round,
            reward: self.reward,
            status: self.status,
            opened_at: self.opened_at,
            closes_at: self.closes_at,
            winner: self.winner.clone(),
            claim_deadline_at: self.claim_deadline_at,
            claimed_by: self.claimed_by.clone(),
            archived_at,
            reason,
        }
    }

    /// Archives the current round into history, then starts the next one:
    /// round + 1, reward doubled, fresh `Open` state with all winner and
    /// claim fields cleared.
    pub fn roll_forward(
        &mut self,
        now: i64,
        closes_at: Option<i64>,
        reason: ArchiveReason,
    ) -> Result<()> {
        require!(
            self.history.len() < MAX_HISTORY_LEN,
            BurnBonusError::HistoryFull
        );
        let archived = self.snapshot(now, reason);
        self.history.push(archived);
        self.round = self
            .round
            .checked_add(1)
            .ok_or(BurnBonusError::MathOverflow)?;
        self.reward = self
            .reward
            .checked_mul(2)
            .ok_or(BurnBonusError::MathOverflow)?;
        self.status = RoundStatus::Open;
        self.opened_at = Some(now);
        self.closes_at = closes_at;
        self.winner = None;
        self.claim_deadline_at = None;
        self.claimed_by = None;
        Ok(())
    }
}
