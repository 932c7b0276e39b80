//! Domain-separation tags mixed into every Deoxys-BC call ZCZ makes, plus the
//! size constants that bound what `basic_encrypt`/`encrypt` will accept.
//!
//! Every layer function below drives the underlying cipher with a distinct
//! `(domain, counter)` pair so that no two calls across the whole scheme ever
//! share a tweak, even when their `TK1` input happens to collide.

/// One di-block, per-block top-layer call.
pub const TOP: u8 = 0;
/// One di-block, per-block bottom-layer call.
pub const BOT: u8 = 1;
/// Middle-layer masking call, one per di-block in a chunk.
pub const CENTER: u8 = 2;
/// Middle-layer per-chunk subkey derivation.
pub const S: u8 = 3;
/// Finalizes the last di-block's top-layer contribution.
pub const TOP_LAST: u8 = 4;
/// Finalizes the last di-block's middle-layer contribution.
pub const CENTER_LAST: u8 = 5;
/// Finalizes the last di-block's bottom-layer contribution.
pub const BOT_LAST: u8 = 6;
/// Derives the carry between the top and middle layers for the last di-block.
pub const S_LAST: u8 = 7;
/// Finalizes the top layer's `X_L` running checksum.
pub const XL: u8 = 8;
/// Finalizes the top layer's `X_R` running checksum.
pub const XR: u8 = 9;
/// Finalizes the bottom layer's `Y_L` running checksum.
pub const YL: u8 = 10;
/// Finalizes the bottom layer's `Y_R` running checksum.
pub const YR: u8 = 11;
/// Used by the two-call hash primitive that masks a partial final di-block.
pub const PARTIAL: u8 = 12;

/// Counter passed to [`super::partial::hash`] when masking the partial di-block
/// on the top side; the paired call uses `COUNTER_PARTIAL_TOP + 1`.
pub const COUNTER_PARTIAL_TOP: u64 = 0;
/// Counter for the middle-layer partial mask; paired call uses `+ 1`.
pub const COUNTER_PARTIAL_CENTER: u64 = 2;
/// Counter for the bottom-layer partial mask; paired call uses `+ 1`.
pub const COUNTER_PARTIAL_BOTTOM: u64 = 4;

/// Di-blocks processed under one middle-layer subkey before a fresh `S_i` is
/// derived.
pub const NUM_DI_BLOCKS_IN_CHUNK: usize = 128;

/// Smallest message ZCZ can encode: one di-block.
pub const MIN_NUM_MESSAGE_BYTES: usize = 32;

/// Largest message `basic_encrypt`/`basic_decrypt` will accept.
pub const BASIC_MAX_NUM_MESSAGE_BYTES: usize = 4096;

pub const NUM_BYTES_IN_BLOCK: usize = 16;
pub const NUM_BYTES_IN_DI_BLOCK: usize = 32;
