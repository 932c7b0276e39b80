use {
    super::{internal_zcz_decrypt, internal_zcz_encrypt, pad, split},
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
fn round_trip_for_various_tail_lengths() {
    let deoxys = random_deoxys();
    for len in [32, 33, 40, 63, 64, 65, 100, 160, 4097, 4128] {
        let pt = random_message(len);
        let mut ct = vec![0u8; len];
        internal_zcz_encrypt(&deoxys, &pt, &mut ct);

        let mut recovered = vec![0u8; len];
        internal_zcz_decrypt(&deoxys, &ct, &mut recovered);
        assert_eq!(recovered, pt, "round trip failed for length {len}");
    }
}

#[test]
fn split_finds_the_final_partial_di_block() {
    let s = split(101);
    assert_eq!(s.num_bytes_in_full, 96);
    assert_eq!(s.num_remaining, 5);
    assert_eq!(s.start_of_last_full, 64);
}

#[test]
fn split_treats_an_exact_multiple_of_32_as_no_remainder() {
    let s = split(4128);
    assert_eq!(s.num_bytes_in_full, 4128);
    assert_eq!(s.num_remaining, 0);
    assert_eq!(s.start_of_last_full, 4096);
}

#[test]
fn pad_sets_a_single_one_bit_then_zeros() {
    let mut block = [0xffu8; 32];
    pad(&mut block, 5);
    assert_eq!(block[5], 0x80);
    assert!(block[6..].iter().all(|&b| b == 0));
    assert_eq!(&block[..5], &[0xff; 5]);
}

#[test]
fn pad_handles_an_entirely_empty_source() {
    let mut block = [0xffu8; 32];
    pad(&mut block, 0);
    assert_eq!(block[0], 0x80);
    assert!(block[1..].iter().all(|&b| b == 0));
}
