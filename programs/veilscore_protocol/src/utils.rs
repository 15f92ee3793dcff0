use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use solana_sha256_hasher::hashv;

use crate::constants::CLEARTEXT_LEN;
use crate::errors::VeilscoreError;

// Ed25519SigVerify111111111111111111111111111
pub fn ed25519_program_id() -> Pubkey {
    Pubkey::new_from_array([
        3, 125, 70, 214, 124, 147, 251, 190, 18, 249, 66, 143, 131, 141, 64, 255,
        5, 112, 116, 73, 39, 244, 138, 100, 252, 202, 112, 68, 128, 0, 0, 0,
    ])
}

// -----------------
// Seeds / constants
// -----------------
pub const CONFIG_SEED: &[u8] = b"config_v1";
pub const PROVIDER_SET_SEED: &[u8] = b"provider_set_v1";
pub const BATCH_SEED: &[u8] = b"batch_v1";
pub const ACTOR_ACTIVITY_SEED: &[u8] = b"actor_activity_v1";
pub const DECRYPTION_SEED: &[u8] = b"decryption_v1";

// -------------------------
// Binding hash + content id
// -------------------------

/// Content hash over a batch's three ciphertext slots, captured at
/// request time and re-derived at fulfill time. The program id is the
/// deployment identity and keeps hashes from one instance meaningless
/// to another.
pub fn binding_hash(
    program_id: &Pubkey,
    batch_id: u64,
    accumulator: &[u8; 32],
    price: &[u8; 32],
    exercisable: &[u8; 32],
) -> [u8; 32] {
    let h = hashv(&[
        b"veilscore:settlement_v1".as_ref(),
        program_id.as_ref(),
        batch_id.to_le_bytes().as_ref(),
        accumulator.as_ref(),
        price.as_ref(),
        exercisable.as_ref(),
    ]);
    h.to_bytes()
}

/// Public identifier of a submitted ciphertext. Events carry this, never
/// a plaintext.
pub fn content_id(ciphertext: &[u8; 32]) -> [u8; 32] {
    hashv(&[b"veilscore:ct_v1".as_ref(), ciphertext.as_ref()]).to_bytes()
}

// -------------------------
// Cooldown arithmetic
// -------------------------

/// True when `now` is at or past `last + cooldown`. Saturates instead of
/// overflowing on degenerate configs.
pub fn cooldown_elapsed(last_ts: i64, now: i64, cooldown_seconds: i64) -> bool {
    now >= last_ts.saturating_add(cooldown_seconds)
}

// -------------------------
// Settlement cleartexts
// -------------------------

/// Fixed-width positional decode of the oracle's settlement payload.
pub fn decode_settlement(cleartexts: &[u8; CLEARTEXT_LEN]) -> Result<(u64, u64, bool)> {
    let aggregate_score = u64::from_le_bytes(cleartexts[0..8].try_into().unwrap());
    let price = u64::from_le_bytes(cleartexts[8..16].try_into().unwrap());
    let exercisable = match cleartexts[16] {
        0 => false,
        1 => true,
        _ => return Err(error!(VeilscoreError::InvalidCleartext)),
    };
    Ok((aggregate_score, price, exercisable))
}

// -------------------------
// Expected oracle fulfill msg
// -------------------------
pub fn expected_fulfill_msg(
    program_id: &Pubkey,
    request_id: u64,
    binding_hash: &[u8; 32],
    cleartexts: &[u8; CLEARTEXT_LEN],
) -> Vec<u8> {
    let mut out =
        Vec::with_capacity(b"veilscore:fulfill_v1".len() + 32 + 8 + 32 + CLEARTEXT_LEN);
    out.extend_from_slice(b"veilscore:fulfill_v1");
    out.extend_from_slice(program_id.as_ref());
    out.extend_from_slice(&request_id.to_le_bytes());
    out.extend_from_slice(binding_hash);
    out.extend_from_slice(cleartexts);
    out
}

// -------------------------
// Ed25519 instruction introspection
// -------------------------
pub fn parse_ed25519_ix_pubkey_and_msg(ix: &Instruction) -> Result<(Pubkey, Vec<u8>)> {
    require!(
        ix.program_id == ed25519_program_id(),
        VeilscoreError::MissingOrInvalidEd25519Ix
    );

    let data = &ix.data;
    require!(data.len() >= 16, VeilscoreError::MissingOrInvalidEd25519Ix);

    let num_sigs = data[0];
    require!(num_sigs == 1, VeilscoreError::MissingOrInvalidEd25519Ix);

    // Require "self-contained" offsets (instruction_index == u16::MAX)
    let sig_ix = u16::from_le_bytes([data[4], data[5]]);
    let pk_ix = u16::from_le_bytes([data[8], data[9]]);
    let msg_ix = u16::from_le_bytes([data[14], data[15]]);
    require!(sig_ix == u16::MAX, VeilscoreError::MissingOrInvalidEd25519Ix);
    require!(pk_ix == u16::MAX, VeilscoreError::MissingOrInvalidEd25519Ix);
    require!(msg_ix == u16::MAX, VeilscoreError::MissingOrInvalidEd25519Ix);

    let pk_off = u16::from_le_bytes([data[6], data[7]]) as usize;
    let msg_off = u16::from_le_bytes([data[10], data[11]]) as usize;
    let msg_sz = u16::from_le_bytes([data[12], data[13]]) as usize;

    require!(pk_off + 32 <= data.len(), VeilscoreError::MissingOrInvalidEd25519Ix);
    require!(msg_off + msg_sz <= data.len(), VeilscoreError::MissingOrInvalidEd25519Ix);

    let pk_bytes: [u8; 32] = data[pk_off..pk_off + 32]
        .try_into()
        .map_err(|_| error!(VeilscoreError::MissingOrInvalidEd25519Ix))?;
    let msg = data[msg_off..msg_off + msg_sz].to_vec();

    Ok((Pubkey::new_from_array(pk_bytes), msg))
}

pub fn assert_ed25519_ix_matches(
    ix: &Instruction,
    expected_pubkey: &Pubkey,
    expected_msg: &[u8],
) -> Result<()> {
    // The parser already insists on self-contained offsets
    // (signature/pubkey/message instruction_index == u16::MAX).
    let (pk, msg) = parse_ed25519_ix_pubkey_and_msg(ix)?;

    require_keys_eq!(pk, *expected_pubkey, VeilscoreError::Ed25519PubkeyMismatch);
    require!(
        msg.as_slice() == expected_msg,
        VeilscoreError::Ed25519MessageMismatch
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher;

    fn u16le(v: u16) -> [u8; 2] {
        v.to_le_bytes()
    }

    /// Builds ed25519-like instruction data with the standard layout:
    /// [num_sigs: u8, padding: u8, offsets(14 bytes), signature(64), pubkey(32), msg(N)]
    ///
    /// No valid signature is produced; these tests only exercise the
    /// offset/self-containment validation.
    fn make_ed25519_ix(
        pubkey: [u8; 32],
        msg: &[u8],
        sig_ix: u16,
        pk_ix: u16,
        msg_ix: u16,
    ) -> Instruction {
        let header_len: usize = 2 + 14; // 16
        let sig_off: u16 = header_len as u16;
        let pk_off: u16 = sig_off + 64;
        let msg_off: u16 = pk_off + 32;
        let msg_sz: u16 = msg
            .len()
            .try_into()
            .expect("message too long for u16 size in this test");

        let total_len = header_len + 64 + 32 + msg.len();
        let mut data = vec![0u8; total_len];

        // num signatures + padding
        data[0] = 1;
        data[1] = 0;

        // offsets struct starts at byte 2
        let o = 2usize;

        data[o..o + 2].copy_from_slice(&u16le(sig_off));
        data[o + 2..o + 4].copy_from_slice(&u16le(sig_ix));
        data[o + 4..o + 6].copy_from_slice(&u16le(pk_off));
        data[o + 6..o + 8].copy_from_slice(&u16le(pk_ix));
        data[o + 8..o + 10].copy_from_slice(&u16le(msg_off));
        data[o + 10..o + 12].copy_from_slice(&u16le(msg_sz));
        data[o + 12..o + 14].copy_from_slice(&u16le(msg_ix));

        let pk_start = pk_off as usize;
        let msg_start = msg_off as usize;

        data[pk_start..pk_start + 32].copy_from_slice(&pubkey);
        data[msg_start..msg_start + msg.len()].copy_from_slice(msg);

        Instruction {
            program_id: ed25519_program_id(),
            accounts: vec![],
            data,
        }
    }

    #[test]
    fn parse_ed25519_accepts_self_contained_indices() {
        let oracle = Pubkey::new_unique();
        let msg = b"settlement-payload".to_vec();

        let ix = make_ed25519_ix(oracle.to_bytes(), &msg, u16::MAX, u16::MAX, u16::MAX);

        let (pk, parsed_msg) = parse_ed25519_ix_pubkey_and_msg(&ix).expect("should parse");
        assert_eq!(pk, oracle);
        assert_eq!(parsed_msg, msg);
    }

    #[test]
    fn parse_ed25519_rejects_external_message_instruction_index() {
        let oracle = Pubkey::new_unique();
        let msg = b"evil-msg".to_vec();

        // msg_ix != u16::MAX must fail
        let ix = make_ed25519_ix(oracle.to_bytes(), &msg, u16::MAX, u16::MAX, 0);

        let res = parse_ed25519_ix_pubkey_and_msg(&ix);
        assert!(res.is_err(), "parser must reject non-self-contained msg_ix");
    }

    #[test]
    fn assert_ed25519_ix_matches_rejects_wrong_pubkey_or_msg() {
        let oracle = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let msg = b"good".to_vec();

        let ix = make_ed25519_ix(oracle.to_bytes(), &msg, u16::MAX, u16::MAX, u16::MAX);

        // pubkey mismatch
        let res_pk = assert_ed25519_ix_matches(&ix, &other, &msg);
        assert!(res_pk.is_err());

        // msg mismatch
        let res_msg = assert_ed25519_ix_matches(&ix, &oracle, b"bad");
        assert!(res_msg.is_err());
    }

    #[test]
    fn binding_hash_detects_any_slot_drift() {
        let program_id = Pubkey::new_unique();
        let acc = cipher::add(&cipher::ZERO_WORD, &[7u8; 32]);
        let price = [1u8; 32];
        let exer = [2u8; 32];

        let captured = binding_hash(&program_id, 1, &acc, &price, &exer);

        // unchanged state re-derives identically
        assert_eq!(binding_hash(&program_id, 1, &acc, &price, &exer), captured);

        // a contribution landing after the request diverges the hash
        let drifted = cipher::add(&acc, &[3u8; 32]);
        assert_ne!(binding_hash(&program_id, 1, &drifted, &price, &exer), captured);

        // so does overwriting a parameter slot
        assert_ne!(binding_hash(&program_id, 1, &acc, &[9u8; 32], &exer), captured);

        // and so does the same state under another batch id
        assert_ne!(binding_hash(&program_id, 2, &acc, &price, &exer), captured);
    }

    #[test]
    fn binding_hash_is_deployment_scoped() {
        let acc = [5u8; 32];
        let a = binding_hash(&Pubkey::new_unique(), 1, &acc, &[0u8; 32], &[0u8; 32]);
        let b = binding_hash(&Pubkey::new_unique(), 1, &acc, &[0u8; 32], &[0u8; 32]);
        assert_ne!(a, b);
    }

    #[test]
    fn decode_settlement_reads_fixed_widths() {
        let mut payload = [0u8; CLEARTEXT_LEN];
        payload[0..8].copy_from_slice(&750u64.to_le_bytes());
        payload[8..16].copy_from_slice(&1_250_000u64.to_le_bytes());
        payload[16] = 1;

        let (score, price, exercisable) = decode_settlement(&payload).unwrap();
        assert_eq!(score, 750);
        assert_eq!(price, 1_250_000);
        assert!(exercisable);
    }

    #[test]
    fn decode_settlement_rejects_malformed_flag() {
        let mut payload = [0u8; CLEARTEXT_LEN];
        payload[16] = 2;
        assert!(decode_settlement(&payload).is_err());
    }

    #[test]
    fn cooldown_boundary() {
        // strictly inside the window fails, the exact boundary passes
        assert!(!cooldown_elapsed(100, 159, 60));
        assert!(cooldown_elapsed(100, 160, 60));
        // zero cooldown never throttles
        assert!(cooldown_elapsed(100, 100, 0));
    }

    #[test]
    fn content_id_differs_from_ciphertext() {
        let ct = [42u8; 32];
        assert_ne!(content_id(&ct), ct);
        assert_eq!(content_id(&ct), content_id(&ct));
    }
}
