use anchor_lang::prelude::*;

use crate::cipher;
use crate::errors::VeilscoreError;
use crate::events::{BatchClosed, BatchOpened, ParametersSet};
use crate::{CloseBatch, OpenBatch, SetBatchParameters};

pub fn open_batch(ctx: Context<OpenBatch>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require!(!cfg.paused, VeilscoreError::Paused);
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), VeilscoreError::NotOwner);

    // one accumulation window at a time
    require!(!cfg.batch_open, VeilscoreError::BatchAlreadyOpen);

    let batch_id = cfg
        .current_batch_id
        .checked_add(1)
        .ok_or(VeilscoreError::MathOverflow)?;

    let now = Clock::get()?.unix_timestamp;

    let batch = &mut ctx.accounts.batch;
    batch.batch_id = batch_id;
    batch.bump = ctx.bumps.batch;
    batch.is_open = true;

    batch.accumulator = cipher::ZERO_WORD;
    batch.contribution_count = 0;

    batch.price = cipher::ZERO_WORD;
    batch.exercisable = cipher::ZERO_WORD;
    batch.params_set = false;

    batch.opened_at = now;
    batch.closed_at = 0;

    cfg.current_batch_id = batch_id;
    cfg.batch_open = true;

    emit!(BatchOpened { batch_id });

    Ok(())
}

pub fn close_batch(ctx: Context<CloseBatch>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require!(!cfg.paused, VeilscoreError::Paused);
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), VeilscoreError::NotOwner);

    let batch = &mut ctx.accounts.batch;
    require!(batch.is_open, VeilscoreError::BatchNotOpen);

    // closing an empty batch is valid; its accumulator stays the
    // encrypted zero
    batch.is_open = false;
    batch.closed_at = Clock::get()?.unix_timestamp;

    cfg.batch_open = false;

    emit!(BatchClosed {
        batch_id: batch.batch_id,
        contribution_count: batch.contribution_count,
    });

    Ok(())
}

pub fn set_parameters(
    ctx: Context<SetBatchParameters>,
    price: [u8; 32],
    exercisable: [u8; 32],
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, VeilscoreError::Paused);
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), VeilscoreError::NotOwner);

    let batch = &mut ctx.accounts.batch;
    require!(batch.is_open, VeilscoreError::BatchNotOpen);

    // overwrite is allowed while the batch is open; only the owner
    // reaches this point
    batch.price = price;
    batch.exercisable = exercisable;
    batch.params_set = true;

    emit!(ParametersSet {
        batch_id: batch.batch_id,
        price,
        exercisable,
    });

    Ok(())
}
