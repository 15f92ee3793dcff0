use anchor_lang::prelude::*;

pub mod cipher;
pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;
pub use utils::*;

use solana_security_txt::security_txt;

security_txt! {
    // Required fields
    name: "Veilscore Protocol",
    project_url: "https://veilscore.xyz",
    contacts: "email:security@veilscore.xyz,link:https://github.com/veilscore/veilscore-protocol/issues",
    policy: "https://github.com/veilscore/veilscore-protocol/blob/main/SECURITY.md",

    // Optional fields
    preferred_languages: "en",
    source_code: "https://github.com/veilscore/veilscore-protocol"
}

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod veilscore_protocol {
    use super::*;
    use crate::instructions::{admin, lifecycle, oracle, provider_set, submit};

    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        cooldown_seconds: i64,
        oracle_pubkey: Pubkey,
    ) -> Result<()> {
        admin::initialize_config(ctx, cooldown_seconds, oracle_pubkey)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        admin::transfer_ownership(ctx, new_owner)
    }

    pub fn pause(ctx: Context<SetPauseState>) -> Result<()> {
        admin::pause(ctx)
    }

    pub fn unpause(ctx: Context<SetPauseState>) -> Result<()> {
        admin::unpause(ctx)
    }

    pub fn set_cooldown_seconds(
        ctx: Context<SetCooldownSeconds>,
        cooldown_seconds: i64,
    ) -> Result<()> {
        admin::set_cooldown_seconds(ctx, cooldown_seconds)
    }

    // ----------------------------
    // ProviderSet admin controls
    // ----------------------------
    pub fn initialize_provider_set(ctx: Context<InitializeProviderSet>) -> Result<()> {
        provider_set::initialize_provider_set(ctx)
    }

    pub fn add_provider(ctx: Context<AddProvider>, provider: Pubkey) -> Result<()> {
        provider_set::add_provider(ctx, provider)
    }

    pub fn remove_provider(ctx: Context<RemoveProvider>, provider: Pubkey) -> Result<()> {
        provider_set::remove_provider(ctx, provider)
    }

    pub fn set_oracle_pubkey(ctx: Context<SetOraclePubkey>, oracle_pubkey: Pubkey) -> Result<()> {
        oracle::set_oracle_pubkey(ctx, oracle_pubkey)
    }

    // ----------------------------
    // Batch lifecycle
    // ----------------------------
    pub fn open_batch(ctx: Context<OpenBatch>) -> Result<()> {
        lifecycle::open_batch(ctx)
    }

    pub fn close_batch(ctx: Context<CloseBatch>) -> Result<()> {
        lifecycle::close_batch(ctx)
    }

    pub fn set_parameters(
        ctx: Context<SetBatchParameters>,
        price: [u8; 32],
        exercisable: [u8; 32],
    ) -> Result<()> {
        lifecycle::set_parameters(ctx, price, exercisable)
    }

    // core
    pub fn submit_contribution(
        ctx: Context<SubmitContribution>,
        ciphertext: [u8; 32],
    ) -> Result<()> {
        submit::submit_contribution(ctx, ciphertext)
    }

    pub fn request_decryption(ctx: Context<RequestDecryption>) -> Result<()> {
        oracle::request_decryption(ctx)
    }

    pub fn fulfill_decryption(
        ctx: Context<FulfillDecryption>,
        request_id: u64,
        cleartexts: [u8; 17],
    ) -> Result<()> {
        oracle::fulfill_decryption(ctx, request_id, cleartexts)
    }
}
