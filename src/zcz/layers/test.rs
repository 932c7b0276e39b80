use {
    super::{basic_decrypt_into, basic_encrypt_into, num_chunks},
    crate::deoxys::DeoxysBc384,
    rand::Rng,
};

fn random_deoxys() -> DeoxysBc384 {
    let key: [u8; 16] = rand::thread_rng().gen();
    DeoxysBc384::new(&key)
}

fn random_message(len: usize) -> Vec<u8> {
    (0..len).map(|_| rand::thread_rng().gen()).collect()
}

#[test]
fn basic_round_trip_one_di_block() {
    let deoxys = random_deoxys();
    let pt = random_message(32);
    let mut ct = vec![0u8; 32];
    basic_encrypt_into(&deoxys, &pt, &mut ct);
    assert_ne!(ct, pt);

    let mut recovered = vec![0u8; 32];
    basic_decrypt_into(&deoxys, &ct, &mut recovered);
    assert_eq!(recovered, pt);
}

#[test]
fn basic_round_trip_several_di_blocks() {
    let deoxys = random_deoxys();
    for num_di_blocks in [2usize, 3, 5, 128, 129, 130] {
        let pt = random_message(num_di_blocks * 32);
        let mut ct = vec![0u8; pt.len()];
        basic_encrypt_into(&deoxys, &pt, &mut ct);

        let mut recovered = vec![0u8; pt.len()];
        basic_decrypt_into(&deoxys, &ct, &mut recovered);
        assert_eq!(recovered, pt, "round trip failed for {num_di_blocks} di-blocks");
    }
}

#[test]
fn changing_any_di_block_changes_the_whole_ciphertext() {
    let deoxys = random_deoxys();
    let pt = random_message(5 * 32);
    let mut ct1 = vec![0u8; pt.len()];
    basic_encrypt_into(&deoxys, &pt, &mut ct1);

    let mut perturbed = pt.clone();
    perturbed[2 * 32] ^= 1; // flip a bit in the third di-block, not the last
    let mut ct2 = vec![0u8; pt.len()];
    basic_encrypt_into(&deoxys, &perturbed, &mut ct2);

    let differing_di_blocks =
        ct1.chunks(32).zip(ct2.chunks(32)).filter(|(a, b)| a != b).count();
    assert_eq!(
        differing_di_blocks,
        pt.len() / 32,
        "every di-block of the ciphertext should change when any one di-block of the \
         plaintext changes"
    );
}

#[test]
fn num_chunks_covers_exact_and_partial_multiples() {
    assert_eq!(num_chunks(0), 0);
    assert_eq!(num_chunks(1), 1);
    assert_eq!(num_chunks(128), 1);
    assert_eq!(num_chunks(129), 2);
    assert_eq!(num_chunks(256), 2);
    assert_eq!(num_chunks(257), 3);
}
