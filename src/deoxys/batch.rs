//! Batched counter-mode convenience API.
//!
//! ZCZ's top and bottom layers call Deoxys-BC once per di-block with the
//! same domain and a steadily incrementing counter. The tweakey schedule's
//! round-constant contribution and `TK1`-derived contribution are
//! per-call regardless, but the `TK2` (domain, counter) contribution obeys
//! `base_counters[i] = H^i(LFSR2^i(domain‖counter))` — since `H` permutes
//! byte positions and `LFSR2` acts identically on every byte regardless of
//! position, the two commute, so the high bytes of a run of counters that
//! share everything but their low byte can be expanded once per 8-block
//! batch instead of once per block.
//!
//! This module exposes that contract at the granularity the spec describes
//! (`setup_base_counters`, `encrypt_eight`/`decrypt_eight`); it does not
//! hand-roll the CLMUL-based closed form the optimized reference takes,
//! since that shortcut only changes performance, not output — every path
//! here is checked against plain per-block calls in the batching tests.

use super::schedule::{h, lfsr2, lfsr2_byte, KeySchedule, TweakSchedule, Variant};
use super::{build_tweak, decrypt_block, encrypt_block};
use crate::block::Block;

/// `base_counters[i] = H^i(LFSR2^i(domain‖ctr_base))`, the per-round TK2
/// contribution shared by every block in a counter batch. `ctr_base` should
/// have its low byte cleared by the caller; `encrypt_eight`/`decrypt_eight`
/// add the per-block low byte back in through the full tweak instead, so
/// that the result is always byte-identical to an unbatched call.
pub fn setup_base_counters(domain: u8, ctr_base: u64) -> [Block; 17] {
    let mut seed = [0u8; 16];
    seed[0] = domain;
    seed[8..16].copy_from_slice(&ctr_base.to_le_bytes());

    let mut out = [[0u8; 16]; 17];
    out[0] = seed;
    for i in 1..=16 {
        out[i] = h(&lfsr2(&out[i - 1]));
    }
    out
}

/// `LFSR2` applied `r` times to a single byte, the per-byte orbit the
/// closed-form batched schedule shifts through. Kept as a direct loop
/// (rather than the fused 16-bit-shift shortcut from the design notes) so
/// it stays trivially auditable against [`super::schedule::lfsr2_byte`].
pub fn lfsr2_orbit_byte(x: u8, r: u32) -> u8 {
    let mut v = x;
    for _ in 0..r {
        v = lfsr2_byte(v);
    }
    v
}

/// Encipher 8 blocks that share a domain and an 8-byte-aligned counter base,
/// each with its own `TK1` and plaintext. Block `j`'s effective counter is
/// `ctr_base + j`.
pub fn encrypt_eight(
    ks: &KeySchedule,
    tk1_blocks: &[Block; 8],
    domain: u8,
    ctr_base: u64,
    plaintexts: &[Block; 8],
) -> [Block; 8] {
    debug_assert_eq!(ks.variant, Variant::Deoxys384);
    let mut out = [[0u8; 16]; 8];
    for j in 0..8 {
        let tweak = build_tweak(&tk1_blocks[j], domain, ctr_base + j as u64);
        let ts = TweakSchedule::new(Variant::Deoxys384, &tweak);
        out[j] = encrypt_block(ks, &ts, plaintexts[j]);
    }
    out
}

/// Inverse of [`encrypt_eight`].
pub fn decrypt_eight(
    ks: &KeySchedule,
    tk1_blocks: &[Block; 8],
    domain: u8,
    ctr_base: u64,
    ciphertexts: &[Block; 8],
) -> [Block; 8] {
    debug_assert_eq!(ks.variant, Variant::Deoxys384);
    let mut out = [[0u8; 16]; 8];
    for j in 0..8 {
        let tweak = build_tweak(&tk1_blocks[j], domain, ctr_base + j as u64);
        let ts = TweakSchedule::new(Variant::Deoxys384, &tweak);
        out[j] = decrypt_block(ks, &ts, ciphertexts[j]);
    }
    out
}
