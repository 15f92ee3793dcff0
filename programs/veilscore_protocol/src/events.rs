use anchor_lang::prelude::*;

// Notification surface for external observers (UI, co-processor, oracle).
// No event carries a plaintext score before settlement.

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

#[event]
pub struct ProviderAdded {
    pub provider: Pubkey,
}

#[event]
pub struct ProviderRemoved {
    pub provider: Pubkey,
}

#[event]
pub struct CooldownUpdated {
    pub cooldown_seconds: i64,
}

#[event]
pub struct ProtocolPaused {
    pub admin: Pubkey,
}

#[event]
pub struct ProtocolUnpaused {
    pub admin: Pubkey,
}

#[event]
pub struct OracleKeyUpdated {
    pub oracle_pubkey: Pubkey,
}

#[event]
pub struct BatchOpened {
    pub batch_id: u64,
}

#[event]
pub struct BatchClosed {
    pub batch_id: u64,
    pub contribution_count: u64,
}

#[event]
pub struct ContributionSubmitted {
    pub batch_id: u64,
    pub provider: Pubkey,
    /// sha256 identifier of the submitted ciphertext, not the plaintext.
    pub content_id: [u8; 32],
}

#[event]
pub struct ParametersSet {
    pub batch_id: u64,
    pub price: [u8; 32],
    pub exercisable: [u8; 32],
}

#[event]
pub struct DecryptionRequested {
    pub request_id: u64,
    pub batch_id: u64,
    pub binding_hash: [u8; 32],
    /// Snapshot the oracle decrypts; riding along saves it a state read.
    pub accumulator: [u8; 32],
    pub price: [u8; 32],
    pub exercisable: [u8; 32],
}

#[event]
pub struct DecryptionFulfilled {
    pub request_id: u64,
    pub batch_id: u64,
    pub aggregate_score: u64,
    pub price: u64,
    pub exercisable: bool,
}
