// programs/veilscore_protocol/src/contexts.rs

use anchor_lang::prelude::*;

use crate::state::{ActorActivity, Batch, Config, DecryptionRequest, ProviderSet};

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Config::INIT_SPACE,
        seeds = [crate::CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct InitializeProviderSet<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = admin,
        space = 8 + ProviderSet::INIT_SPACE,
        seeds = [crate::PROVIDER_SET_SEED, config.key().as_ref()],
        bump
    )]
    pub provider_set: Account<'info, ProviderSet>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetPauseState<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetCooldownSeconds<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetOraclePubkey<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    pub admin: Signer<'info>,
}

// ----------------------------
// ProviderSet (allowlist)
// ----------------------------

#[derive(Accounts)]
pub struct AddProvider<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::PROVIDER_SET_SEED, config.key().as_ref()],
        bump = provider_set.bump
    )]
    pub provider_set: Account<'info, ProviderSet>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct RemoveProvider<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::PROVIDER_SET_SEED, config.key().as_ref()],
        bump = provider_set.bump
    )]
    pub provider_set: Account<'info, ProviderSet>,

    pub admin: Signer<'info>,
}

// ----------------------------
// Batch lifecycle
// ----------------------------

#[derive(Accounts)]
pub struct OpenBatch<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = admin,
        space = 8 + Batch::INIT_SPACE,
        seeds = [crate::BATCH_SEED, (config.current_batch_id + 1).to_le_bytes().as_ref()],
        bump
    )]
    pub batch: Account<'info, Batch>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct CloseBatch<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::BATCH_SEED, config.current_batch_id.to_le_bytes().as_ref()],
        bump = batch.bump
    )]
    pub batch: Account<'info, Batch>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetBatchParameters<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::BATCH_SEED, config.current_batch_id.to_le_bytes().as_ref()],
        bump = batch.bump
    )]
    pub batch: Account<'info, Batch>,

    pub admin: Signer<'info>,
}

// ----------------------------
// Contribution submission
// ----------------------------

#[derive(Accounts)]
pub struct SubmitContribution<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [crate::PROVIDER_SET_SEED, config.key().as_ref()],
        bump = provider_set.bump
    )]
    pub provider_set: Account<'info, ProviderSet>,

    #[account(
        mut,
        seeds = [crate::BATCH_SEED, config.current_batch_id.to_le_bytes().as_ref()],
        bump = batch.bump
    )]
    pub batch: Account<'info, Batch>,

    #[account(
        init_if_needed,
        payer = provider,
        space = 8 + ActorActivity::INIT_SPACE,
        seeds = [crate::ACTOR_ACTIVITY_SEED, provider.key().as_ref()],
        bump
    )]
    pub activity: Account<'info, ActorActivity>,

    #[account(mut)]
    pub provider: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

// ----------------------------
// Decryption coordinator
// ----------------------------

#[derive(Accounts)]
pub struct RequestDecryption<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// CHECK: current batch account. PDA address and contents are
    /// validated in the handler so a never-opened ledger surfaces
    /// InvalidBatch instead of a constraint error.
    pub batch: UncheckedAccount<'info>,

    #[account(
        init,
        payer = requester,
        space = 8 + DecryptionRequest::INIT_SPACE,
        seeds = [crate::DECRYPTION_SEED, config.next_request_id.to_le_bytes().as_ref()],
        bump
    )]
    pub request: Account<'info, DecryptionRequest>,

    #[account(
        init_if_needed,
        payer = requester,
        space = 8 + ActorActivity::INIT_SPACE,
        seeds = [crate::ACTOR_ACTIVITY_SEED, requester.key().as_ref()],
        bump
    )]
    pub activity: Account<'info, ActorActivity>,

    #[account(mut)]
    pub requester: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct FulfillDecryption<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::DECRYPTION_SEED, request_id.to_le_bytes().as_ref()],
        bump = request.bump
    )]
    pub request: Account<'info, DecryptionRequest>,

    /// CHECK: batch referenced by the stored request. PDA address is
    /// re-derived and the account deserialized in the handler.
    pub batch: UncheckedAccount<'info>,

    /// CHECK: instruction sysvar (for ed25519 introspection). Address enforced.
    #[account(address = anchor_lang::solana_program::sysvar::instructions::ID)]
    pub instructions: UncheckedAccount<'info>,
}
