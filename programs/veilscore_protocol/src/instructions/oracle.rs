use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked, load_instruction_at_checked,
};

use crate::errors::VeilscoreError;
use crate::events::{DecryptionFulfilled, DecryptionRequested, OracleKeyUpdated};
use crate::state::Batch;
use crate::utils::{
    assert_ed25519_ix_matches, binding_hash, cooldown_elapsed, decode_settlement,
    expected_fulfill_msg, BATCH_SEED,
};
use crate::{FulfillDecryption, RequestDecryption, SetOraclePubkey};

pub fn set_oracle_pubkey(ctx: Context<SetOraclePubkey>, oracle_pubkey: Pubkey) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), VeilscoreError::NotOwner);

    cfg.oracle_pubkey = oracle_pubkey;

    emit!(OracleKeyUpdated { oracle_pubkey });

    Ok(())
}

/// Reads the batch PDA for `batch_id`, verifying the address first.
/// Manual so a never-opened ledger can surface InvalidBatch from the
/// handler instead of an account-resolution error.
fn load_batch(batch_ai: &AccountInfo, batch_id: u64, program_id: &Pubkey) -> Result<Batch> {
    let (expected, _bump) =
        Pubkey::find_program_address(&[BATCH_SEED, &batch_id.to_le_bytes()], program_id);
    require_keys_eq!(expected, *batch_ai.key, VeilscoreError::BatchPdaMismatch);

    let data = batch_ai
        .try_borrow_data()
        .map_err(|_| error!(VeilscoreError::AccountBorrowFailed))?;
    let mut slice: &[u8] = &data;
    Batch::try_deserialize(&mut slice)
}

pub fn request_decryption(ctx: Context<RequestDecryption>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require!(!cfg.paused, VeilscoreError::Paused);

    let now = Clock::get()?.unix_timestamp;
    let requester_pk = ctx.accounts.requester.key();

    let activity = &mut ctx.accounts.activity;
    if activity.actor == Pubkey::default() {
        activity.actor = requester_pk;
        activity.bump = ctx.bumps.activity;
    }
    require!(
        cooldown_elapsed(activity.last_decryption_request_ts, now, cfg.cooldown_seconds),
        VeilscoreError::CooldownActive
    );
    activity.last_decryption_request_ts = now;

    require!(cfg.current_batch_id != 0, VeilscoreError::InvalidBatch);

    // Snapshot the exact ciphertext state the oracle will decrypt.
    let batch = load_batch(
        &ctx.accounts.batch.to_account_info(),
        cfg.current_batch_id,
        ctx.program_id,
    )?;

    let request_id = cfg.next_request_id;
    let hash = binding_hash(
        ctx.program_id,
        batch.batch_id,
        &batch.accumulator,
        &batch.price,
        &batch.exercisable,
    );

    let request = &mut ctx.accounts.request;
    request.request_id = request_id;
    request.bump = ctx.bumps.request;
    request.batch_id = batch.batch_id;
    request.binding_hash = hash;
    request.processed = false;
    request.requested_at = now;
    request.fulfilled_at = 0;

    cfg.next_request_id = cfg
        .next_request_id
        .checked_add(1)
        .ok_or(VeilscoreError::MathOverflow)?;

    emit!(DecryptionRequested {
        request_id,
        batch_id: batch.batch_id,
        binding_hash: hash,
        accumulator: batch.accumulator,
        price: batch.price,
        exercisable: batch.exercisable,
    });

    Ok(())
}

// Tx layout must be: [ ed25519_verify, fulfill_decryption ]
pub fn fulfill_decryption(
    ctx: Context<FulfillDecryption>,
    request_id: u64,
    cleartexts: [u8; 17],
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, VeilscoreError::Paused);
    require!(cfg.oracle_pubkey != Pubkey::default(), VeilscoreError::OracleNotSet);

    let request = &mut ctx.accounts.request;

    // one-shot: a processed request never settles twice
    require!(!request.processed, VeilscoreError::ReplayDetected);
    require!(request.batch_id != 0, VeilscoreError::InvalidBatch);

    // Anti-TOCTOU: the settlement is only trusted for the exact
    // ciphertext snapshot captured at request time.
    let batch = load_batch(
        &ctx.accounts.batch.to_account_info(),
        request.batch_id,
        ctx.program_id,
    )?;
    let rederived = binding_hash(
        ctx.program_id,
        batch.batch_id,
        &batch.accumulator,
        &batch.price,
        &batch.exercisable,
    );
    require!(rederived == request.binding_hash, VeilscoreError::StateMismatch);

    // --- ed25519 introspection ---
    let ix_sys = ctx.accounts.instructions.to_account_info();
    let current_ix = load_current_index_checked(&ix_sys)? as usize;
    require!(current_ix >= 1, VeilscoreError::MissingOrInvalidEd25519Ix);

    let ed_ix = load_instruction_at_checked(current_ix - 1, &ix_sys)
        .map_err(|_| error!(VeilscoreError::MissingOrInvalidEd25519Ix))?;

    let expected = expected_fulfill_msg(
        ctx.program_id,
        request_id,
        &request.binding_hash,
        &cleartexts,
    );
    assert_ed25519_ix_matches(&ed_ix, &cfg.oracle_pubkey, expected.as_slice())?;

    let (aggregate_score, price, exercisable) = decode_settlement(&cleartexts)?;

    // commit state: permanent transition
    request.processed = true;
    request.fulfilled_at = Clock::get()?.unix_timestamp;

    emit!(DecryptionFulfilled {
        request_id,
        batch_id: request.batch_id,
        aggregate_score,
        price,
        exercisable,
    });

    Ok(())
}
