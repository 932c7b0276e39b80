//! ZCZ, a length-preserving wide-block cipher over [`deoxys`]'s
//! Deoxys-BC-128-384 tweakable block cipher.
//!
//! A [`ZczCipher`] enciphers any message of at least 32 bytes to a
//! ciphertext of the same length, with no expansion and no nonce — every
//! byte of the output depends on every byte of the input. `basic_encrypt`/
//! `basic_decrypt` cover the construction's native shape (an exact multiple
//! of 32 bytes, up to 4096); `encrypt`/`decrypt` accept any length from 32
//! bytes up by folding a short final di-block in through a padding/hash
//! construction.

pub mod aes;
pub mod block;
pub mod deoxys;
mod error;
mod gf;
mod key;
mod text;
mod zcz;

pub use error::{Error, Result};
pub use key::Key;
pub use text::{Ciphertext, Plaintext};
pub use zcz::ZczCipher;
