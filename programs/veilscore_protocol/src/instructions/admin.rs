use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::VeilscoreError;
use crate::events::{CooldownUpdated, OwnershipTransferred, ProtocolPaused, ProtocolUnpaused};
use crate::state::Config;
use crate::{InitializeConfig, SetCooldownSeconds, SetPauseState, TransferOwnership};

pub fn initialize_config(
    ctx: Context<InitializeConfig>,
    cooldown_seconds: i64,
    oracle_pubkey: Pubkey,
) -> Result<()> {
    require!(cooldown_seconds >= 0, VeilscoreError::InvalidCooldown);

    let cfg: &mut Account<Config> = &mut ctx.accounts.config;

    cfg.admin = ctx.accounts.admin.key();
    cfg.bump = ctx.bumps.config;

    cfg.paused = false;
    cfg.cooldown_seconds = cooldown_seconds;

    // may be Pubkey::default() at genesis; set_oracle_pubkey rotates it
    cfg.oracle_pubkey = oracle_pubkey;

    cfg.current_batch_id = 0;
    cfg.batch_open = false;
    cfg.next_request_id = FIRST_REQUEST_ID;

    cfg.version = INITIAL_VERSION;

    Ok(())
}

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), VeilscoreError::NotOwner);
    require!(new_owner != Pubkey::default(), VeilscoreError::ZeroAddress);

    let previous_owner = cfg.admin;
    cfg.admin = new_owner;

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });

    Ok(())
}

pub fn pause(ctx: Context<SetPauseState>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), VeilscoreError::NotOwner);
    require!(!cfg.paused, VeilscoreError::AlreadyPaused);

    cfg.paused = true;

    emit!(ProtocolPaused {
        admin: cfg.admin,
    });

    Ok(())
}

// Deliberately not gated on the current state: unpausing must stay
// reachable even if pause bookkeeping is ever inconsistent.
pub fn unpause(ctx: Context<SetPauseState>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), VeilscoreError::NotOwner);

    cfg.paused = false;

    emit!(ProtocolUnpaused {
        admin: cfg.admin,
    });

    Ok(())
}

pub fn set_cooldown_seconds(ctx: Context<SetCooldownSeconds>, cooldown_seconds: i64) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require!(!cfg.paused, VeilscoreError::Paused);
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), VeilscoreError::NotOwner);
    require!(cooldown_seconds >= 0, VeilscoreError::InvalidCooldown);

    // takes effect for all subsequent checks; recorded timestamps are
    // left untouched
    cfg.cooldown_seconds = cooldown_seconds;

    emit!(CooldownUpdated { cooldown_seconds });

    Ok(())
}
