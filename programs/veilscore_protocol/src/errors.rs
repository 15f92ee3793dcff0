use anchor_lang::prelude::*;

#[error_code]
pub enum VeilscoreError {
    #[msg("Caller is not the owner")]
    NotOwner,
    #[msg("Caller is not a registered provider")]
    NotProvider,
    #[msg("Protocol paused")]
    Paused,
    #[msg("Protocol already paused")]
    AlreadyPaused,
    #[msg("Cooldown active for this actor")]
    CooldownActive,
    #[msg("Current batch is not open")]
    BatchNotOpen,
    #[msg("Previous batch is still open")]
    BatchAlreadyOpen,
    #[msg("Invalid batch (no batch opened, or unknown request context)")]
    InvalidBatch,
    #[msg("Batch PDA mismatch")]
    BatchPdaMismatch,
    #[msg("Decryption request already processed")]
    ReplayDetected,
    #[msg("Batch ciphertext state changed since the request was issued")]
    StateMismatch,

    #[msg("Missing or invalid ed25519 verify instruction")]
    MissingOrInvalidEd25519Ix,
    #[msg("Ed25519 pubkey mismatch")]
    Ed25519PubkeyMismatch,
    #[msg("Ed25519 message mismatch")]
    Ed25519MessageMismatch,

    #[msg("Oracle pubkey not set")]
    OracleNotSet,
    #[msg("Malformed settlement cleartexts")]
    InvalidCleartext,

    #[msg("Zero address not allowed")]
    ZeroAddress,
    #[msg("Provider set is full")]
    ProviderSetFull,
    #[msg("Invalid cooldown (must be non-negative)")]
    InvalidCooldown,

    #[msg("Failed to borrow account data")]
    AccountBorrowFailed,
    #[msg("Math overflow")]
    MathOverflow,
}
