//! The top/middle/bottom layer engine: per-di-block masking plus the running
//! `X_L/X_R`/`Y_L/Y_R` checksums that couple every di-block of a message
//! together, so that changing any one of them changes the whole ciphertext.
//!
//! Every function here operates on a message already split into di-blocks
//! (32-byte chunks); the very last di-block is always handled separately by
//! the paired `*_last_di_block_*` function, since its contribution folds in
//! the finalized checksum rather than a per-block mask.

use super::domain as d;
use crate::block::{xor, xored, Block, DiBlock};
use crate::deoxys::DeoxysBc384;
use crate::gf::{gf_double, gf_times_four};

fn prim_enc(deoxys: &DeoxysBc384, domain: u8, counter: u64, tk1: &Block, pt: &Block) -> Block {
    deoxys.encrypt_tagged(tk1, domain, counter, *pt)
}

fn prim_dec(deoxys: &DeoxysBc384, domain: u8, counter: u64, tk1: &Block, ct: &Block) -> Block {
    deoxys.decrypt_tagged(tk1, domain, counter, *ct)
}

/// Number of middle-layer chunks needed to cover `num_di_blocks_without_final`
/// di-blocks, each chunk holding up to [`d::NUM_DI_BLOCKS_IN_CHUNK`].
pub(crate) fn num_chunks(num_di_blocks_without_final: usize) -> usize {
    (num_di_blocks_without_final + d::NUM_DI_BLOCKS_IN_CHUNK - 1) / d::NUM_DI_BLOCKS_IN_CHUNK
}

/// Scratch values threaded between layers within a single `encrypt`/`decrypt`
/// call: the top/bottom carry (`s`, `t`) and the four running checksums.
#[derive(Debug, Clone, Default)]
pub(crate) struct Scratch {
    pub s: Block,
    pub t: Block,
    pub x_l: Block,
    pub x_r: Block,
    pub y_l: Block,
    pub y_r: Block,
}

pub(crate) fn encrypt_top_layer(
    deoxys: &DeoxysBc384,
    scratch: &mut Scratch,
    plaintext: &[u8],
    state: &mut [u8],
    num_di_blocks: usize,
) {
    let mut x_l = [0u8; 16];
    let mut x_r = [0u8; 16];
    for i in 0..num_di_blocks.saturating_sub(1) {
        let off = i * d::NUM_BYTES_IN_DI_BLOCK;
        let input = DiBlock::read(&plaintext[off..off + 32]);
        let left_out = prim_enc(deoxys, d::TOP, (i + 1) as u64, &input.r, &input.l);
        DiBlock { l: left_out, r: input.r }.write(&mut state[off..off + 32]);

        x_l = xored(gf_double(&x_l), left_out);
        x_r = xored(xored(gf_times_four(&x_r), left_out), input.r);
    }
    scratch.x_l = prim_enc(deoxys, d::XL, num_di_blocks as u64, &x_r, &x_l);
    scratch.x_r = prim_enc(deoxys, d::XR, num_di_blocks as u64, &x_l, &x_r);
}

pub(crate) fn encrypt_last_di_block_top(
    deoxys: &DeoxysBc384,
    scratch: &mut Scratch,
    final_full_di_block: &[u8; 32],
    num_di_blocks: usize,
) {
    let input = DiBlock::from_bytes(final_full_di_block);
    let left_out = xored(input.l, scratch.x_l);
    let right_out = xored(input.r, scratch.x_r);

    scratch.s = prim_enc(deoxys, d::TOP_LAST, num_di_blocks as u64, &right_out, &left_out);
    scratch.t = prim_enc(deoxys, d::S_LAST, num_di_blocks as u64, &scratch.s, &right_out);
}

pub(crate) fn encrypt_middle_layer(
    deoxys: &DeoxysBc384,
    scratch: &mut Scratch,
    state: &mut [u8],
    num_di_blocks: usize,
) {
    let without_final = num_di_blocks.saturating_sub(1);
    let chunks = num_chunks(without_final);
    let mut y_l = [0u8; 16];
    let mut y_r = [0u8; 16];
    let mut idx = 0usize;

    for i in 0..chunks {
        let mut tweak = [0u8; 16];
        tweak[8..16].copy_from_slice(&((i + 1) as u64).to_le_bytes());
        let s_i = prim_enc(deoxys, d::S, 0, &tweak, &scratch.s);

        let mut in_chunk = d::NUM_DI_BLOCKS_IN_CHUNK;
        if i + 1 == chunks {
            let rem = without_final % d::NUM_DI_BLOCKS_IN_CHUNK;
            in_chunk = if rem == 0 { d::NUM_DI_BLOCKS_IN_CHUNK } else { rem };
        }

        for j in 0..in_chunk {
            let k = (i * d::NUM_DI_BLOCKS_IN_CHUNK + j + 1) as u64;
            let z = prim_enc(deoxys, d::CENTER, k, &scratch.t, &s_i);

            let off = idx * d::NUM_BYTES_IN_DI_BLOCK;
            let mut di = DiBlock::read(&state[off..off + 32]); // (L' = X_i ^ Z, R_i)

            xor(&mut di.l, &z);
            xor(&mut di.r, &z);
            xor(&mut di.r, &s_i); // Y_i = R_i ^ Z ^ S_i
            di.write(&mut state[off..off + 32]);

            y_r = xored(gf_double(&y_r), di.r);
            y_l = xored(xored(gf_times_four(&y_l), di.r), di.l);
            idx += 1;
        }
    }

    scratch.y_l = prim_enc(deoxys, d::YL, num_di_blocks as u64, &y_r, &y_l);
    scratch.y_r = prim_enc(deoxys, d::YR, num_di_blocks as u64, &y_l, &y_r);
}

pub(crate) fn encrypt_bottom_layer(
    deoxys: &DeoxysBc384,
    state: &[u8],
    ciphertext: &mut [u8],
    num_di_blocks: usize,
) {
    for i in 0..num_di_blocks.saturating_sub(1) {
        let off = i * d::NUM_BYTES_IN_DI_BLOCK;
        let input = DiBlock::read(&state[off..off + 32]);
        let right_out = prim_enc(deoxys, d::BOT, (i + 1) as u64, &input.l, &input.r);
        DiBlock { l: input.l, r: right_out }.write(&mut ciphertext[off..off + 32]);
    }
}

pub(crate) fn encrypt_last_di_block_bottom(
    deoxys: &DeoxysBc384,
    scratch: &Scratch,
    ciphertext: &mut [u8],
    num_di_blocks: usize,
) {
    let left_out = prim_enc(deoxys, d::CENTER_LAST, num_di_blocks as u64, &scratch.t, &scratch.s);
    let right_out = prim_enc(deoxys, d::BOT_LAST, num_di_blocks as u64, &left_out, &scratch.t);

    let off = (num_di_blocks - 1) * d::NUM_BYTES_IN_DI_BLOCK;
    DiBlock {
        l: xored(left_out, scratch.y_l),
        r: xored(right_out, scratch.y_r),
    }
    .write(&mut ciphertext[off..off + 32]);
}

pub(crate) fn decrypt_top_layer(
    deoxys: &DeoxysBc384,
    state: &[u8],
    plaintext: &mut [u8],
    num_di_blocks: usize,
) {
    for i in 0..num_di_blocks.saturating_sub(1) {
        let off = i * d::NUM_BYTES_IN_DI_BLOCK;
        let input = DiBlock::read(&state[off..off + 32]);
        let left_out = prim_dec(deoxys, d::TOP, (i + 1) as u64, &input.r, &input.l);
        DiBlock { l: left_out, r: input.r }.write(&mut plaintext[off..off + 32]);
    }
}

/// Undoes the middle layer's masking while recomputing the top layer's
/// `X_L`/`X_R` checksums from the recovered `(X_i, R_i)` pairs — the XOR
/// masks are self-inverse, so this drives the same [`d::S`]/[`d::CENTER`]
/// *encryptions* the forward direction used rather than a decrypt call.
pub(crate) fn decrypt_middle_layer(
    deoxys: &DeoxysBc384,
    scratch: &mut Scratch,
    state: &mut [u8],
    num_di_blocks: usize,
) {
    let without_final = num_di_blocks.saturating_sub(1);
    let chunks = num_chunks(without_final);
    let mut x_l = [0u8; 16];
    let mut x_r = [0u8; 16];
    let mut idx = 0usize;

    for i in 0..chunks {
        let mut tweak = [0u8; 16];
        tweak[8..16].copy_from_slice(&((i + 1) as u64).to_le_bytes());
        let s_i = prim_enc(deoxys, d::S, 0, &tweak, &scratch.s);

        let mut in_chunk = d::NUM_DI_BLOCKS_IN_CHUNK;
        if i + 1 == chunks {
            let rem = without_final % d::NUM_DI_BLOCKS_IN_CHUNK;
            in_chunk = if rem == 0 { d::NUM_DI_BLOCKS_IN_CHUNK } else { rem };
        }

        for j in 0..in_chunk {
            let k = (i * d::NUM_DI_BLOCKS_IN_CHUNK + j + 1) as u64;
            let z = prim_enc(deoxys, d::CENTER, k, &scratch.t, &s_i);

            let off = idx * d::NUM_BYTES_IN_DI_BLOCK;
            let mut di = DiBlock::read(&state[off..off + 32]); // (L' = X_i ^ Z, Y_i = R_i ^ Z ^ S_i)

            xor(&mut di.l, &z); // -> X_i
            xor(&mut di.r, &z);
            xor(&mut di.r, &s_i); // -> R_i
            di.write(&mut state[off..off + 32]);

            x_l = xored(gf_double(&x_l), di.l);
            x_r = xored(xored(gf_times_four(&x_r), di.l), di.r);
            idx += 1;
        }
    }

    scratch.x_l = prim_enc(deoxys, d::XL, num_di_blocks as u64, &x_r, &x_l);
    scratch.x_r = prim_enc(deoxys, d::XR, num_di_blocks as u64, &x_l, &x_r);
}

pub(crate) fn decrypt_bottom_layer(
    deoxys: &DeoxysBc384,
    scratch: &mut Scratch,
    state: &mut [u8],
    ciphertext: &[u8],
    num_di_blocks: usize,
) {
    let mut y_l = [0u8; 16];
    let mut y_r = [0u8; 16];
    for i in 0..num_di_blocks.saturating_sub(1) {
        let off = i * d::NUM_BYTES_IN_DI_BLOCK;
        let input = DiBlock::read(&ciphertext[off..off + 32]);
        let right_out = prim_dec(deoxys, d::BOT, (i + 1) as u64, &input.l, &input.r);
        DiBlock { l: input.l, r: right_out }.write(&mut state[off..off + 32]);

        y_r = xored(gf_double(&y_r), right_out);
        y_l = xored(xored(gf_times_four(&y_l), right_out), input.l);
    }
    scratch.y_l = prim_enc(deoxys, d::YL, num_di_blocks as u64, &y_r, &y_l);
    scratch.y_r = prim_enc(deoxys, d::YR, num_di_blocks as u64, &y_l, &y_r);
}

pub(crate) fn decrypt_last_di_block_bottom(
    deoxys: &DeoxysBc384,
    scratch: &mut Scratch,
    final_full_di_block: &[u8; 32],
    num_di_blocks: usize,
) {
    let input = DiBlock::from_bytes(final_full_di_block);
    let left_out = xored(input.l, scratch.y_l);
    let right_out = xored(input.r, scratch.y_r);

    scratch.t = prim_dec(deoxys, d::BOT_LAST, num_di_blocks as u64, &left_out, &right_out);
    scratch.s = prim_dec(deoxys, d::CENTER_LAST, num_di_blocks as u64, &scratch.t, &left_out);
}

pub(crate) fn decrypt_last_di_block_top(
    deoxys: &DeoxysBc384,
    scratch: &Scratch,
    plaintext: &mut [u8],
    num_di_blocks: usize,
) {
    let right_out = prim_dec(deoxys, d::S_LAST, num_di_blocks as u64, &scratch.s, &scratch.t);
    let left_out = prim_dec(deoxys, d::TOP_LAST, num_di_blocks as u64, &right_out, &scratch.s);

    let off = (num_di_blocks - 1) * d::NUM_BYTES_IN_DI_BLOCK;
    DiBlock {
        l: xored(left_out, scratch.x_l),
        r: xored(right_out, scratch.x_r),
    }
    .write(&mut plaintext[off..off + 32]);
}

/// Runs all three layers over a message that is an exact, in-range multiple
/// of 32 bytes, with the final di-block supplied explicitly so the
/// partial-length path ([`super::partial`]) can substitute an already-masked
/// one instead of `plaintext`'s own tail.
pub(crate) fn basic_encrypt_with_final(
    deoxys: &DeoxysBc384,
    plaintext: &[u8],
    final_full_di_block: &[u8; 32],
    ciphertext: &mut [u8],
) {
    let num_di_blocks = plaintext.len() / d::NUM_BYTES_IN_DI_BLOCK;
    let mut scratch = Scratch::default();
    let mut state = vec![0u8; plaintext.len()];

    encrypt_top_layer(deoxys, &mut scratch, plaintext, &mut state, num_di_blocks);
    encrypt_last_di_block_top(deoxys, &mut scratch, final_full_di_block, num_di_blocks);
    encrypt_middle_layer(deoxys, &mut scratch, &mut state, num_di_blocks);
    encrypt_bottom_layer(deoxys, &state, ciphertext, num_di_blocks);
    encrypt_last_di_block_bottom(deoxys, &scratch, ciphertext, num_di_blocks);
}

pub(crate) fn basic_decrypt_with_final(
    deoxys: &DeoxysBc384,
    ciphertext: &[u8],
    final_full_di_block: &[u8; 32],
    plaintext: &mut [u8],
) {
    let num_di_blocks = ciphertext.len() / d::NUM_BYTES_IN_DI_BLOCK;
    let mut scratch = Scratch::default();
    let mut state = vec![0u8; ciphertext.len()];

    decrypt_bottom_layer(deoxys, &mut scratch, &mut state, ciphertext, num_di_blocks);
    decrypt_last_di_block_bottom(deoxys, &mut scratch, final_full_di_block, num_di_blocks);
    decrypt_middle_layer(deoxys, &mut scratch, &mut state, num_di_blocks);
    decrypt_top_layer(deoxys, &state, plaintext, num_di_blocks);
    decrypt_last_di_block_top(deoxys, &scratch, plaintext, num_di_blocks);
}

/// [`basic_encrypt_with_final`] with the final di-block taken straight from
/// `plaintext`'s own tail — the ordinary case when the message needs no
/// partial-block handling.
pub(crate) fn basic_encrypt_into(deoxys: &DeoxysBc384, plaintext: &[u8], ciphertext: &mut [u8]) {
    let off = plaintext.len() - d::NUM_BYTES_IN_DI_BLOCK;
    let mut last = [0u8; 32];
    last.copy_from_slice(&plaintext[off..]);
    basic_encrypt_with_final(deoxys, plaintext, &last, ciphertext);
}

pub(crate) fn basic_decrypt_into(deoxys: &DeoxysBc384, ciphertext: &[u8], plaintext: &mut [u8]) {
    let off = ciphertext.len() - d::NUM_BYTES_IN_DI_BLOCK;
    let mut last = [0u8; 32];
    last.copy_from_slice(&ciphertext[off..]);
    basic_decrypt_with_final(deoxys, ciphertext, &last, plaintext);
}

pub(crate) use prim_dec as primitive_decrypt;
pub(crate) use prim_enc as primitive_encrypt;

#[cfg(test)]
mod test;
