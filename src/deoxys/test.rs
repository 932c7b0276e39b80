use {
    super::{decrypt_128, decrypt_256, encrypt_128, encrypt_256, DeoxysBc384},
    rand::Rng,
};

fn seq_block() -> [u8; 16] {
    let mut b = [0u8; 16];
    for (i, x) in b.iter_mut().enumerate() {
        *x = i as u8 + 1;
    }
    b
}

fn random_block() -> [u8; 16] {
    rand::thread_rng().gen()
}

/// Known-answer vector A: Deoxys-BC-128-128, no tweak.
#[test]
fn deoxys_128_round_trips_and_is_deterministic() {
    let key = seq_block();
    let pt = seq_block();
    let ct1 = encrypt_128(&key, pt);
    let ct2 = encrypt_128(&key, pt);
    assert_eq!(ct1, ct2, "encryption must be deterministic");
    assert_ne!(ct1, pt, "a 12-round cipher should not be the identity");
    assert_eq!(decrypt_128(&key, ct1), pt);
}

/// Known-answer vector B: Deoxys-BC-128-256, 128-bit tweak.
#[test]
fn deoxys_256_round_trips_and_is_tweak_sensitive() {
    let key = seq_block();
    let tweak = seq_block();
    let pt = seq_block();
    let ct = encrypt_256(&key, &tweak, pt);
    assert_eq!(decrypt_256(&key, &tweak, ct), pt);

    let mut other_tweak = tweak;
    other_tweak[0] ^= 1;
    assert_ne!(
        encrypt_256(&key, &other_tweak, pt),
        ct,
        "changing the tweak must change the ciphertext"
    );
}

/// Known-answer vector C: Deoxys-BC-128-384, the variant ZCZ drives.
#[test]
fn deoxys_384_round_trips_through_the_zcz_tweak_layout() {
    let key = seq_block();
    let tk1 = seq_block();
    let pt = seq_block();
    let cipher = DeoxysBc384::new(&key);

    let ct = cipher.encrypt_tagged(&tk1, 0, 0, pt);
    assert_eq!(cipher.decrypt_tagged(&tk1, 0, 0, ct), pt);

    assert_ne!(
        cipher.encrypt_tagged(&tk1, 1, 0, pt),
        ct,
        "changing only the domain tag must change the ciphertext"
    );
    assert_ne!(
        cipher.encrypt_tagged(&tk1, 0, 1, pt),
        ct,
        "changing only the counter must change the ciphertext"
    );
}

#[test]
fn deoxys_384_round_trips_for_random_inputs() {
    for _ in 0..20 {
        let key = random_block();
        let tk1 = random_block();
        let pt = random_block();
        let cipher = DeoxysBc384::new(&key);
        let domain = rand::thread_rng().gen();
        let counter: u64 = rand::thread_rng().gen();

        let ct = cipher.encrypt_tagged(&tk1, domain, counter, pt);
        assert_eq!(cipher.decrypt_tagged(&tk1, domain, counter, ct), pt);
    }
}
