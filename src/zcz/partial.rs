//! Handling for messages whose length isn't an in-range multiple of 32 bytes:
//! the last (possibly short) di-block is peeled off, padded, and carried
//! through a two-call hash primitive alongside the basic scheme running over
//! everything else.

use super::domain as d;
use super::layers::{basic_decrypt_with_final, basic_encrypt_with_final, primitive_encrypt};
use crate::block::DiBlock;
use crate::deoxys::DeoxysBc384;

type Block32 = [u8; 32];

fn xor_di_block(a: &mut [u8; 32], b: &[u8; 32]) {
    for i in 0..32 {
        a[i] ^= b[i];
    }
}

fn pad(target: &mut [u8; 32], num_source_bytes: usize) {
    target[num_source_bytes] = 0x80;
    for b in target.iter_mut().skip(num_source_bytes + 1) {
        *b = 0;
    }
}

/// Enciphers `u' = E(v, TOP|domain, u)`, `v' = E(v, TOP|domain+1, u)` — both
/// calls share `TK1 = v` and plaintext `u`, differing only in the counter.
fn hash(deoxys: &DeoxysBc384, input: &[u8; 32], counter: u64) -> [u8; 32] {
    let di = DiBlock::from_bytes(input);
    let u_prime = primitive_encrypt(deoxys, d::PARTIAL, counter, &di.r, &di.l);
    let v_prime = primitive_encrypt(deoxys, d::PARTIAL, counter + 1, &di.r, &di.l);
    DiBlock { l: u_prime, r: v_prime }.to_bytes()
}

fn partial_top(deoxys: &DeoxysBc384, final_full_di_block: &mut [u8; 32], hash_input: &[u8; 32]) {
    let h = hash(deoxys, hash_input, d::COUNTER_PARTIAL_TOP);
    xor_di_block(final_full_di_block, &h);
}

fn partial_middle(deoxys: &DeoxysBc384, hash_input: &[u8; 32]) -> [u8; 32] {
    hash(deoxys, hash_input, d::COUNTER_PARTIAL_CENTER)
}

fn partial_bottom(deoxys: &DeoxysBc384, final_full_di_block: &mut [u8; 32], hash_input: &[u8; 32]) {
    let h = hash(deoxys, hash_input, d::COUNTER_PARTIAL_BOTTOM);
    xor_di_block(final_full_di_block, &h);
}

struct Split {
    num_bytes_in_full: usize,
    num_remaining: usize,
    start_of_last_full: usize,
}

fn split(num_bytes: usize) -> Split {
    let num_full_di_blocks = num_bytes / d::NUM_BYTES_IN_DI_BLOCK;
    let num_bytes_in_full = num_full_di_blocks * d::NUM_BYTES_IN_DI_BLOCK;
    Split {
        num_bytes_in_full,
        num_remaining: num_bytes % d::NUM_BYTES_IN_DI_BLOCK,
        start_of_last_full: num_bytes_in_full - d::NUM_BYTES_IN_DI_BLOCK,
    }
}

/// Handles any message at least one di-block long that the basic scheme
/// can't: a non-multiple-of-32 length, or a multiple of 32 past the basic
/// size cap.
pub(crate) fn internal_zcz_encrypt(deoxys: &DeoxysBc384, plaintext: &[u8], ciphertext: &mut [u8]) {
    let s = split(plaintext.len());

    let mut padded_final: [u8; 32] = [0u8; 32];
    padded_final[..s.num_remaining]
        .copy_from_slice(&plaintext[s.num_bytes_in_full..s.num_bytes_in_full + s.num_remaining]);
    pad(&mut padded_final, s.num_remaining);

    let mut final_full: Block32 = [0u8; 32];
    final_full.copy_from_slice(&plaintext[s.start_of_last_full..s.start_of_last_full + 32]);

    partial_top(deoxys, &mut final_full, &padded_final);
    // `M_l xor H[E,0]`, needed again once the basic pass below is done.
    let mut top_hash_output = final_full;

    basic_encrypt_with_final(
        deoxys,
        &plaintext[..s.num_bytes_in_full],
        &final_full,
        &mut ciphertext[..s.num_bytes_in_full],
    );

    final_full.copy_from_slice(&ciphertext[s.start_of_last_full..s.start_of_last_full + 32]);
    xor_di_block(&mut top_hash_output, &final_full);
    let middle_hash_output = partial_middle(deoxys, &top_hash_output);
    xor_di_block(&mut padded_final, &middle_hash_output);

    pad(&mut padded_final, s.num_remaining);
    partial_bottom(deoxys, &mut final_full, &padded_final);

    ciphertext[s.start_of_last_full..s.start_of_last_full + 32].copy_from_slice(&final_full);
    ciphertext[s.num_bytes_in_full..s.num_bytes_in_full + s.num_remaining]
        .copy_from_slice(&padded_final[..s.num_remaining]);
}

pub(crate) fn internal_zcz_decrypt(deoxys: &DeoxysBc384, ciphertext: &[u8], plaintext: &mut [u8]) {
    let s = split(ciphertext.len());

    let mut padded_final: [u8; 32] = [0u8; 32];
    padded_final[..s.num_remaining]
        .copy_from_slice(&ciphertext[s.num_bytes_in_full..s.num_bytes_in_full + s.num_remaining]);
    pad(&mut padded_final, s.num_remaining);

    let mut final_full: Block32 = [0u8; 32];
    final_full.copy_from_slice(&ciphertext[s.start_of_last_full..s.start_of_last_full + 32]);

    partial_bottom(deoxys, &mut final_full, &padded_final);
    let mut bottom_hash_output = final_full;

    basic_decrypt_with_final(
        deoxys,
        &ciphertext[..s.num_bytes_in_full],
        &final_full,
        &mut plaintext[..s.num_bytes_in_full],
    );

    final_full.copy_from_slice(&plaintext[s.start_of_last_full..s.start_of_last_full + 32]);
    xor_di_block(&mut bottom_hash_output, &final_full);
    let middle_hash_output = partial_middle(deoxys, &bottom_hash_output);
    xor_di_block(&mut padded_final, &middle_hash_output);

    pad(&mut padded_final, s.num_remaining);
    partial_top(deoxys, &mut final_full, &padded_final);

    plaintext[s.start_of_last_full..s.start_of_last_full + 32].copy_from_slice(&final_full);
    plaintext[s.num_bytes_in_full..s.num_bytes_in_full + s.num_remaining]
        .copy_from_slice(&padded_final[..s.num_remaining]);
}

#[cfg(test)]
mod test;
