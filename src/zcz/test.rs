use {
    super::ZczCipher,
    crate::{Error, Key},
    rand::Rng,
};

fn random_key() -> Key<[u8; 16]> {
    Key(rand::thread_rng().gen())
}

fn random_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|_| rand::thread_rng().gen()).collect()
}

/// Scenario D: a 2-di-block message through the basic path.
#[test]
fn basic_round_trip_two_di_blocks() {
    let cipher = ZczCipher::new(random_key());
    let message = random_bytes(64);

    let ct = cipher.basic_encrypt(crate::Plaintext(&message)).unwrap();
    let pt = cipher.basic_decrypt(crate::Ciphertext(&ct.0)).unwrap();
    assert_eq!(pt.0, message);
}

/// Scenario E: a message with a 5-byte tail past 3 full di-blocks.
#[test]
fn general_round_trip_with_a_short_final_di_block() {
    let cipher = ZczCipher::new(random_key());
    let message = random_bytes(101);

    let ct = cipher.encrypt(crate::Plaintext(&message)).unwrap();
    assert_eq!(ct.0.len(), message.len(), "ZCZ must preserve length");

    let pt = cipher.decrypt(crate::Ciphertext(&ct.0)).unwrap();
    assert_eq!(pt.0, message);
}

/// Scenario F: the basic/general boundary at exactly 4096 bytes, and one
/// byte past it.
#[test]
fn round_trip_at_and_past_the_basic_size_boundary() {
    let cipher = ZczCipher::new(random_key());

    let at_boundary = random_bytes(4096);
    let ct = cipher.basic_encrypt(crate::Plaintext(&at_boundary)).unwrap();
    assert_eq!(cipher.basic_decrypt(crate::Ciphertext(&ct.0)).unwrap().0, at_boundary);

    let past_boundary = random_bytes(4097);
    let ct = cipher.encrypt(crate::Plaintext(&past_boundary)).unwrap();
    assert_eq!(cipher.decrypt(crate::Ciphertext(&ct.0)).unwrap().0, past_boundary);
    assert!(
        cipher.basic_encrypt(crate::Plaintext(&past_boundary)).is_err(),
        "basic_encrypt must reject lengths over 4096 bytes"
    );
}

#[test]
fn round_trip_over_many_random_lengths() {
    let cipher = ZczCipher::new(random_key());
    for len in [32, 33, 47, 63, 64, 65, 96, 100, 160, 257, 4128, 4159] {
        let message = random_bytes(len);
        let ct = cipher.encrypt(crate::Plaintext(&message)).unwrap();
        assert_eq!(ct.0.len(), len);
        let pt = cipher.decrypt(crate::Ciphertext(&ct.0)).unwrap();
        assert_eq!(pt.0, message, "round trip failed for length {len}");
    }
}

#[test]
fn determinism() {
    let cipher = ZczCipher::new(random_key());
    let message = random_bytes(128);
    let ct1 = cipher.encrypt(crate::Plaintext(&message)).unwrap();
    let ct2 = cipher.encrypt(crate::Plaintext(&message)).unwrap();
    assert_eq!(ct1.0, ct2.0);
}

#[test]
fn avalanche_smoke() {
    let cipher = ZczCipher::new(random_key());
    let message = random_bytes(96);
    let ct1 = cipher.encrypt(crate::Plaintext(&message)).unwrap();

    let mut flipped = message.clone();
    flipped[0] ^= 1;
    let ct2 = cipher.encrypt(crate::Plaintext(&flipped)).unwrap();

    let differing_bytes = ct1.0.iter().zip(ct2.0.iter()).filter(|(a, b)| a != b).count();
    assert!(
        differing_bytes > ct1.0.len() / 2,
        "flipping one input bit should change most of the ciphertext, changed {differing_bytes} \
         of {} bytes",
        ct1.0.len()
    );
}

#[test]
fn rejects_messages_shorter_than_one_di_block() {
    let cipher = ZczCipher::new(random_key());
    let short = random_bytes(31);
    assert_eq!(cipher.encrypt(crate::Plaintext(&short)), Err(Error::InputTooShort));
    assert_eq!(cipher.basic_encrypt(crate::Plaintext(&short)), Err(Error::InputTooShort));
}

#[test]
fn basic_rejects_lengths_not_a_multiple_of_32() {
    let cipher = ZczCipher::new(random_key());
    let odd = random_bytes(50);
    assert_eq!(
        cipher.basic_encrypt(crate::Plaintext(&odd)),
        Err(Error::InputTooLongForBasic)
    );
}
