//! ZCZ: a length-preserving wide-block cipher built from three layers of
//! [`crate::deoxys`] calls over 32-byte di-blocks, with four running GF(2^128)
//! checksums coupling every di-block of a message to every other one.
//!
//! `basic_encrypt`/`basic_decrypt` only accept messages that are an exact
//! multiple of 32 bytes, up to 4096 bytes — the construction's native shape.
//! `encrypt`/`decrypt` accept any message of at least 32 bytes by peeling off
//! a (possibly short) final di-block and folding it in through
//! [`partial`]'s padding/hash construction.

mod domain;
mod layers;
mod partial;

use crate::block::Block;
use crate::deoxys::DeoxysBc384;
use crate::error::{Error, Result};
use crate::key::Key;
use crate::text::{Ciphertext, Plaintext};

fn is_too_short(num_bytes: usize) -> bool {
    num_bytes < domain::MIN_NUM_MESSAGE_BYTES
}

fn is_length_ok_for_zcz_basic(num_bytes: usize) -> bool {
    !is_too_short(num_bytes)
        && num_bytes <= domain::BASIC_MAX_NUM_MESSAGE_BYTES
        && num_bytes % domain::NUM_BYTES_IN_DI_BLOCK == 0
}

/// A keyed ZCZ instance. Key setup expands Deoxys-BC-128-384's tweak-
/// independent schedule once, so it can be reused across every subsequent
/// `encrypt`/`decrypt` call.
#[derive(Debug, Clone)]
pub struct ZczCipher {
    deoxys: DeoxysBc384,
}

impl ZczCipher {
    /// Expands `key` into a reusable cipher instance.
    pub fn new(key: Key<Block>) -> Self {
        ZczCipher {
            deoxys: DeoxysBc384::new(&key.0),
        }
    }

    /// Enciphers a message whose length is an exact multiple of 32 bytes, no
    /// more than 4096 bytes. See [`Self::encrypt`] for other lengths.
    pub fn basic_encrypt(&self, plaintext: Plaintext<&[u8]>) -> Result<Ciphertext<Vec<u8>>> {
        let pt = plaintext.0;
        if !is_length_ok_for_zcz_basic(pt.len()) {
            return Err(Self::length_error(pt.len()));
        }
        let mut ct = vec![0u8; pt.len()];
        layers::basic_encrypt_into(&self.deoxys, pt, &mut ct);
        Ok(Ciphertext(ct))
    }

    /// Inverse of [`Self::basic_encrypt`].
    pub fn basic_decrypt(&self, ciphertext: Ciphertext<&[u8]>) -> Result<Plaintext<Vec<u8>>> {
        let ct = ciphertext.0;
        if !is_length_ok_for_zcz_basic(ct.len()) {
            return Err(Self::length_error(ct.len()));
        }
        let mut pt = vec![0u8; ct.len()];
        layers::basic_decrypt_into(&self.deoxys, ct, &mut pt);
        Ok(Plaintext(pt))
    }

    /// Enciphers any message of at least 32 bytes, of any length — exact
    /// multiples of 32 up to 4096 bytes take the [`Self::basic_encrypt`]
    /// path directly; everything else (a short final di-block, or a longer
    /// exact multiple) goes through [`partial::internal_zcz_encrypt`].
    pub fn encrypt(&self, plaintext: Plaintext<&[u8]>) -> Result<Ciphertext<Vec<u8>>> {
        let pt = plaintext.0;
        if is_too_short(pt.len()) {
            return Err(Error::InputTooShort);
        }
        let mut ct = vec![0u8; pt.len()];
        if is_length_ok_for_zcz_basic(pt.len()) {
            layers::basic_encrypt_into(&self.deoxys, pt, &mut ct);
        } else {
            partial::internal_zcz_encrypt(&self.deoxys, pt, &mut ct);
        }
        Ok(Ciphertext(ct))
    }

    /// Inverse of [`Self::encrypt`].
    pub fn decrypt(&self, ciphertext: Ciphertext<&[u8]>) -> Result<Plaintext<Vec<u8>>> {
        let ct = ciphertext.0;
        if is_too_short(ct.len()) {
            return Err(Error::InputTooShort);
        }
        let mut pt = vec![0u8; ct.len()];
        if is_length_ok_for_zcz_basic(ct.len()) {
            layers::basic_decrypt_into(&self.deoxys, ct, &mut pt);
        } else {
            partial::internal_zcz_decrypt(&self.deoxys, ct, &mut pt);
        }
        Ok(Plaintext(pt))
    }

    fn length_error(num_bytes: usize) -> Error {
        if is_too_short(num_bytes) {
            Error::InputTooShort
        } else {
            Error::InputTooLongForBasic
        }
    }
}

#[cfg(test)]
mod test;
