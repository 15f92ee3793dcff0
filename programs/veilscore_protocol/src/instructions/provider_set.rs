use anchor_lang::prelude::*;

use crate::constants::MAX_PROVIDERS;
use crate::errors::VeilscoreError;
use crate::events::{ProviderAdded, ProviderRemoved};
use crate::state::{Config, ProviderSet};
use crate::{AddProvider, InitializeProviderSet, RemoveProvider};

pub fn initialize_provider_set(ctx: Context<InitializeProviderSet>) -> Result<()> {
    let cfg: &Account<Config> = &ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), VeilscoreError::NotOwner);

    let ps: &mut Account<ProviderSet> = &mut ctx.accounts.provider_set;
    ps.admin = cfg.admin;
    ps.bump = ctx.bumps.provider_set;

    // The owner counts as a provider at genesis only; the set is
    // explicit from here on and removal is never auto-restored.
    ps.providers = vec![cfg.admin];
    ps.version = 1;

    Ok(())
}

pub fn add_provider(ctx: Context<AddProvider>, provider: Pubkey) -> Result<()> {
    let cfg: &Account<Config> = &ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), VeilscoreError::NotOwner);

    require!(provider != Pubkey::default(), VeilscoreError::ZeroAddress);

    let ps: &mut Account<ProviderSet> = &mut ctx.accounts.provider_set;

    // idempotent: already registered is a silent no-op, no event
    if ps.providers.contains(&provider) {
        return Ok(());
    }

    require!(ps.providers.len() < MAX_PROVIDERS, VeilscoreError::ProviderSetFull);
    ps.providers.push(provider);

    emit!(ProviderAdded { provider });

    Ok(())
}

pub fn remove_provider(ctx: Context<RemoveProvider>, provider: Pubkey) -> Result<()> {
    let cfg: &Account<Config> = &ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), VeilscoreError::NotOwner);

    let ps: &mut Account<ProviderSet> = &mut ctx.accounts.provider_set;

    // idempotent: removing a non-provider is a silent no-op, no event
    let Some(pos) = ps.providers.iter().position(|x| *x == provider) else {
        return Ok(());
    };

    // Stable removal (keeps relative order).
    ps.providers.remove(pos);

    emit!(ProviderRemoved { provider });

    Ok(())
}
