use anchor_lang::prelude::*;

use crate::cipher;
use crate::errors::VeilscoreError;
use crate::events::ContributionSubmitted;
use crate::utils::{content_id, cooldown_elapsed};
use crate::SubmitContribution;

pub fn submit_contribution(ctx: Context<SubmitContribution>, ciphertext: [u8; 32]) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, VeilscoreError::Paused);

    let provider_pk = ctx.accounts.provider.key();
    require!(
        ctx.accounts.provider_set.providers.contains(&provider_pk),
        VeilscoreError::NotProvider
    );

    let batch = &mut ctx.accounts.batch;
    require!(batch.is_open, VeilscoreError::BatchNotOpen);

    let now = Clock::get()?.unix_timestamp;

    let activity = &mut ctx.accounts.activity;
    if activity.actor == Pubkey::default() {
        activity.actor = provider_pk;
        activity.bump = ctx.bumps.activity;
    }
    require!(
        cooldown_elapsed(activity.last_submission_ts, now, cfg.cooldown_seconds),
        VeilscoreError::CooldownActive
    );
    activity.last_submission_ts = now;

    // additive only: the accumulator never shrinks or resets
    batch.accumulator = cipher::add(&batch.accumulator, &ciphertext);
    batch.contribution_count = batch
        .contribution_count
        .checked_add(1)
        .ok_or(VeilscoreError::MathOverflow)?;

    emit!(ContributionSubmitted {
        batch_id: batch.batch_id,
        provider: provider_pk,
        content_id: content_id(&ciphertext),
    });

    Ok(())
}
