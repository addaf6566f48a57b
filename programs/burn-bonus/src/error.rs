use anchor_lang::prelude::*;

#[error_code]
pub enum BurnBonusError {
    #[msg("Unauthorized: caller is not the round authority")]
    Unauthorized,
    #[msg("Winner can only be picked while the round is in picking status")]
    InvalidRoundStatus,
    #[msg("Burn transaction signature must not be empty")]
    EmptyBurnSignature,
    #[msg("Burn transaction signature too long (max 96 bytes)")]
    BurnSignatureTooLong,
    #[msg("Buyer list must not be empty")]
    NoBuyers,
    #[msg("Buyer list too large (max 256 addresses)")]
    TooManyBuyers,
    #[msg("Round is not accepting claims")]
    NotClaimable,
    #[msg("Claimant is not the recorded winner")]
    ClaimUnauthorized,
    #[msg("History capacity reached; cannot archive another round")]
    HistoryFull,
    #[msg("Math overflow")]
    MathOverflow,
}
