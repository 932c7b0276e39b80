//! The byte permutation, LFSRs, and round constants Deoxys-BC's tweakey
//! schedule is built from, plus the [`KeySchedule`]/[`TweakSchedule`] split
//! that lets a key's expansion be reused across many tweaks.

use crate::aes::inv_mix_columns;
use crate::block::{xor, Block};

/// Fixed byte permutation applied once per round to the running tweakey
/// state. `H[i]` names the source position that feeds destination `i`.
pub const H: [usize; 16] = [7, 0, 13, 10, 11, 4, 1, 14, 15, 8, 5, 2, 3, 12, 9, 6];

/// Deoxys-BC's own round-constant table (distinct from AES's).
pub const RCON: [u8; 17] = [
    0x2f, 0x5e, 0xbc, 0x63, 0xc6, 0x97, 0x35, 0x6a, 0xd4, 0xb3, 0x7d, 0xfa, 0xef, 0xc5, 0x91, 0x39,
    0x72,
];

/// Apply [`H`] to every byte position of `x`.
pub fn h(x: &Block) -> Block {
    let mut out = [0u8; 16];
    for i in 0..16 {
        out[i] = x[H[i]];
    }
    out
}

pub fn lfsr2_byte(b: u8) -> u8 {
    (b << 1) | (((b >> 7) ^ (b >> 5)) & 1)
}

pub fn lfsr3_byte(b: u8) -> u8 {
    (b >> 1) | (((b << 7) ^ (b << 1)) & 0x80)
}

pub fn lfsr2(x: &Block) -> Block {
    let mut out = [0u8; 16];
    for i in 0..16 {
        out[i] = lfsr2_byte(x[i]);
    }
    out
}

pub fn lfsr3(x: &Block) -> Block {
    let mut out = [0u8; 16];
    for i in 0..16 {
        out[i] = lfsr3_byte(x[i]);
    }
    out
}

fn round_constant_block(i: usize) -> Block {
    let r = RCON[i];
    [1, 2, 4, 8, r, r, r, r, 0, 0, 0, 0, 0, 0, 0, 0]
}

/// Which of the three Deoxys-BC tweakey sizes to expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// 128-bit key, no tweak.
    Deoxys128,
    /// 128-bit key, 128-bit tweak.
    Deoxys256,
    /// 128-bit key, 256-bit tweak — the variant ZCZ drives.
    Deoxys384,
}

impl Variant {
    pub const fn num_rounds(self) -> usize {
        match self {
            Variant::Deoxys128 => 12,
            Variant::Deoxys256 => 14,
            Variant::Deoxys384 => 16,
        }
    }

    pub const fn tweak_len(self) -> usize {
        match self {
            Variant::Deoxys128 => 0,
            Variant::Deoxys256 => 16,
            Variant::Deoxys384 => 32,
        }
    }
}

/// The tweak-independent half of a Deoxys-BC schedule. Derived from the
/// 16-byte master key alone, so a single `KeySchedule` can be reused across
/// every tweak the key is ever called with — this is what lets a ZCZ
/// context's Deoxys-BC subcontext be set up once (`keysetup`) and reused for
/// every subsequent `encrypt`/`decrypt` call.
#[derive(Debug, Clone)]
pub struct KeySchedule {
    pub variant: Variant,
    /// Round keys 0..=num_rounds, round-constant already folded in.
    pub round_keys: [Block; 17],
    /// `InvMixColumns(round_keys[i])` for `i < num_rounds`; raw (same as
    /// `round_keys[num_rounds]`) at the top index, since Deoxys-BC's last
    /// round is a full AES round whose MixColumns decryption boundary is
    /// undone explicitly rather than folded into a per-round key.
    pub decryption_keys: [Block; 17],
}

impl KeySchedule {
    pub fn new(variant: Variant, key: &Block) -> Self {
        let num_rounds = variant.num_rounds();
        let mut rk = [[0u8; 16]; 17];
        rk[0] = *key;
        for i in 0..num_rounds {
            rk[i + 1] = match variant {
                Variant::Deoxys128 => h(&rk[i]),
                Variant::Deoxys256 => h(&lfsr2(&rk[i])),
                Variant::Deoxys384 => h(&lfsr3(&rk[i])),
            };
        }
        for (i, rk_i) in rk.iter_mut().enumerate().take(num_rounds + 1) {
            xor(rk_i, &round_constant_block(i));
        }
        let mut dk = rk;
        for dk_i in dk.iter_mut().take(num_rounds) {
            inv_mix_columns(dk_i);
        }
        KeySchedule {
            variant,
            round_keys: rk,
            decryption_keys: dk,
        }
    }
}

/// The tweak-dependent half of a Deoxys-BC schedule, recomputed for every
/// call (or amortized by [`crate::deoxys::batch`] when only a counter's low
/// byte changes across a run of calls).
#[derive(Debug, Clone)]
pub struct TweakSchedule {
    pub round_tweaks: [Block; 17],
    pub decryption_round_tweaks: [Block; 17],
}

impl TweakSchedule {
    pub fn new(variant: Variant, tweak: &[u8]) -> Self {
        assert_eq!(tweak.len(), variant.tweak_len());
        let num_rounds = variant.num_rounds();
        let mut t = [[0u8; 16]; 17];
        match variant {
            Variant::Deoxys128 => {}
            Variant::Deoxys256 => {
                let mut sub = [0u8; 16];
                sub.copy_from_slice(tweak);
                for t_i in t.iter_mut().take(num_rounds + 1) {
                    xor(t_i, &sub);
                    sub = h(&sub);
                }
            }
            Variant::Deoxys384 => {
                let mut t1 = [0u8; 16];
                let mut t2 = [0u8; 16];
                t1.copy_from_slice(&tweak[..16]);
                t2.copy_from_slice(&tweak[16..]);
                xor(&mut t[0], &t1);
                xor(&mut t[0], &t2);
                for t_i in t.iter_mut().take(num_rounds + 1).skip(1) {
                    t1 = h(&t1);
                    t2 = lfsr2(&h(&t2));
                    xor(t_i, &t1);
                    xor(t_i, &t2);
                }
            }
        }
        let mut dt = t;
        for dt_i in dt.iter_mut().take(num_rounds) {
            inv_mix_columns(dt_i);
        }
        TweakSchedule {
            round_tweaks: t,
            decryption_round_tweaks: dt,
        }
    }
}
