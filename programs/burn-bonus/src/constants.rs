pub const BONUS_ROUND_SEED: &[u8] = b"bonus_round";

/// Seconds a picked winner has to claim before the prize rolls over.
pub const CLAIM_WINDOW_SECS: i64 = 300;

/// Longest burn transaction signature accepted (base58 of a 64-byte
/// signature is 87-88 characters).
pub const MAX_BURN_SIG_LEN: usize = 96;

/// Upper bound on the buyer list passed to `pick_winner`.
pub const MAX_BUYERS: usize = 256;

/// Archived snapshots the state account reserves space for.
pub const MAX_HISTORY_LEN: usize = 32;
