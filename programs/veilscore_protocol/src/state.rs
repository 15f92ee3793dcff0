use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Config {
    pub admin: Pubkey,
    pub bump: u8,

    pub paused: bool,

    /// Minimum elapsed seconds between two actions of the same class
    /// (submission, decryption request) by the same actor.
    pub cooldown_seconds: i64,

    /// Decryption oracle signing key, verified on fulfill via ed25519
    /// instruction introspection.
    pub oracle_pubkey: Pubkey,

    /// Id of the most recently opened batch. 0 = no batch ever opened.
    pub current_batch_id: u64,

    /// Mirror of the current batch's open flag for cheap client reads.
    pub batch_open: bool,

    /// Next decryption request id to assign. Starts at 1.
    pub next_request_id: u64,

    pub version: u16,
}

#[account]
#[derive(InitSpace)]
pub struct ProviderSet {
    pub admin: Pubkey,
    pub bump: u8,

    /// Allowlisted provider pubkeys. Seeded with the admin at genesis;
    /// explicit thereafter (removal is never auto-restored).
    /// NOTE: fixed max_len to keep account size deterministic.
    #[max_len(32)]
    pub providers: Vec<Pubkey>,

    pub version: u16,
}

#[account]
#[derive(InitSpace)]
pub struct Batch {
    pub batch_id: u64,
    pub bump: u8,

    pub is_open: bool,

    /// Homomorphic sum of all submitted encrypted scores. The all-zero
    /// word is the encrypted-zero identity, so the account default is
    /// already the lazily-initialized accumulator.
    pub accumulator: [u8; 32],
    pub contribution_count: u64,

    /// Encrypted derivative parameters. All-zero = unset = encrypted
    /// zero / encrypted false.
    pub price: [u8; 32],
    pub exercisable: [u8; 32],
    pub params_set: bool,

    pub opened_at: i64,
    pub closed_at: i64,
}

#[account]
#[derive(InitSpace)]
pub struct ActorActivity {
    pub actor: Pubkey,
    pub bump: u8,

    /// Last accepted contribution time. Independent of the decryption
    /// request cooldown.
    pub last_submission_ts: i64,
    pub last_decryption_request_ts: i64,
}

#[account]
#[derive(InitSpace)]
pub struct DecryptionRequest {
    pub request_id: u64,
    pub bump: u8,

    /// Batch the request targets. 0 is the invalid sentinel and must
    /// never be stored.
    pub batch_id: u64,

    /// Content hash over the batch's ciphertext slots captured at
    /// request time. The fulfill path re-derives and compares it.
    pub binding_hash: [u8; 32],

    /// One-shot flag: false -> true exactly once, never back.
    pub processed: bool,

    pub requested_at: i64,
    pub fulfilled_at: i64,
}
