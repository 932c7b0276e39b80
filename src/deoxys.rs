//! Deoxys-BC, the tweakable AES-based block cipher ZCZ is built on.
//!
//! A round is the standard AES round (SubBytes, ShiftRows, MixColumns,
//! AddRoundKey) with the AES key schedule replaced by the permutation/LFSR
//! tweakey schedule in [`schedule`]. Unlike AES, Deoxys-BC's last round is a
//! full round — it never omits MixColumns — so decryption undoes it with an
//! explicit boundary step rather than a distinguished last-round primitive;
//! [`crate::aes::aes_enc_last_round`] and [`crate::aes::aes_dec_last_round`]
//! exist in the AES layer for API completeness but are never called here.

pub mod batch;
pub mod schedule;

use crate::aes::{aes_dec_round, aes_enc_round, inv_mix_columns, mix_columns};
use crate::block::{xored, Block};
pub use schedule::{KeySchedule, TweakSchedule, Variant};

/// Lay out a 32-byte Deoxys-BC-384 tweak from ZCZ's domain-separation
/// convention: `TK1` (bytes 0..16), a one-byte domain tag (byte 16), seven
/// reserved zero bytes, then an 8-byte little-endian counter (bytes 24..32).
pub fn build_tweak(tk1: &Block, domain: u8, counter: u64) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[..16].copy_from_slice(tk1);
    out[16] = domain;
    out[24..32].copy_from_slice(&counter.to_le_bytes());
    out
}

/// Encrypt a single block under an already-expanded key/tweak schedule.
pub fn encrypt_block(ks: &KeySchedule, ts: &TweakSchedule, pt: Block) -> Block {
    let num_rounds = ks.variant.num_rounds();
    let mut s = xored(pt, xored(ks.round_keys[0], ts.round_tweaks[0]));
    for i in 1..=num_rounds {
        let subkey = xored(ks.round_keys[i], ts.round_tweaks[i]);
        s = aes_enc_round(s, &subkey);
    }
    s
}

/// Decrypt a single block under an already-expanded key/tweak schedule.
///
/// Mirrors [`encrypt_block`]: the boundary step undoes round `num_rounds`
/// (whose MixColumns isn't folded into any per-round key), the loop runs
/// `aes_dec_round` uniformly down through round 0, and the trailing
/// `mix_columns` cancels the InvMixColumns that round 0 — pure whitening,
/// with no MixColumns of its own — picked up along the way from being
/// treated uniformly with every other round.
pub fn decrypt_block(ks: &KeySchedule, ts: &TweakSchedule, ct: Block) -> Block {
    let num_rounds = ks.variant.num_rounds();
    let mut s = xored(
        ct,
        xored(
            ks.decryption_keys[num_rounds],
            ts.decryption_round_tweaks[num_rounds],
        ),
    );
    inv_mix_columns(&mut s);
    for i in (0..num_rounds).rev() {
        let subkey = xored(ks.decryption_keys[i], ts.decryption_round_tweaks[i]);
        s = aes_dec_round(s, &subkey);
    }
    mix_columns(&mut s);
    s
}

/// A Deoxys-BC-128-384 instance: key expansion done once, reused for any
/// number of (tweak, block) calls. This is the variant ZCZ drives; the
/// 128- and 256-bit variants in [`schedule::Variant`] exist only to
/// reproduce their own known-answer vectors.
#[derive(Debug, Clone)]
pub struct DeoxysBc384 {
    key_schedule: KeySchedule,
}

impl DeoxysBc384 {
    pub fn new(key: &Block) -> Self {
        DeoxysBc384 {
            key_schedule: KeySchedule::new(Variant::Deoxys384, key),
        }
    }

    pub fn key_schedule(&self) -> &KeySchedule {
        &self.key_schedule
    }

    pub fn encrypt(&self, tweak: &[u8; 32], pt: Block) -> Block {
        let ts = TweakSchedule::new(Variant::Deoxys384, tweak);
        encrypt_block(&self.key_schedule, &ts, pt)
    }

    pub fn decrypt(&self, tweak: &[u8; 32], ct: Block) -> Block {
        let ts = TweakSchedule::new(Variant::Deoxys384, tweak);
        decrypt_block(&self.key_schedule, &ts, ct)
    }

    /// Encrypt using ZCZ's tweak convention directly: `(TK1, domain, counter)`.
    pub fn encrypt_tagged(&self, tk1: &Block, domain: u8, counter: u64, pt: Block) -> Block {
        self.encrypt(&build_tweak(tk1, domain, counter), pt)
    }

    /// Decrypt using ZCZ's tweak convention directly: `(TK1, domain, counter)`.
    pub fn decrypt_tagged(&self, tk1: &Block, domain: u8, counter: u64, ct: Block) -> Block {
        self.decrypt(&build_tweak(tk1, domain, counter), ct)
    }
}

/// One-shot Deoxys-BC-128-128 (no tweak), for [`crate`]'s known-answer tests.
pub fn encrypt_128(key: &Block, pt: Block) -> Block {
    let ks = KeySchedule::new(Variant::Deoxys128, key);
    let ts = TweakSchedule::new(Variant::Deoxys128, &[]);
    encrypt_block(&ks, &ts, pt)
}

/// One-shot Deoxys-BC-128-256, for [`crate`]'s known-answer tests.
pub fn encrypt_256(key: &Block, tweak: &Block, pt: Block) -> Block {
    let ks = KeySchedule::new(Variant::Deoxys256, key);
    let ts = TweakSchedule::new(Variant::Deoxys256, tweak);
    encrypt_block(&ks, &ts, pt)
}

/// Inverse of [`encrypt_128`].
pub fn decrypt_128(key: &Block, ct: Block) -> Block {
    let ks = KeySchedule::new(Variant::Deoxys128, key);
    let ts = TweakSchedule::new(Variant::Deoxys128, &[]);
    decrypt_block(&ks, &ts, ct)
}

/// Inverse of [`encrypt_256`].
pub fn decrypt_256(key: &Block, tweak: &Block, ct: Block) -> Block {
    let ks = KeySchedule::new(Variant::Deoxys256, key);
    let ts = TweakSchedule::new(Variant::Deoxys256, tweak);
    decrypt_block(&ks, &ts, ct)
}

#[cfg(test)]
mod test;
