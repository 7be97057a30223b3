// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::consts::BLOCK_INDEX_LEN;

/// Encodes a block index as four big-endian octets (PKCS #1 `I2OSP(i, 4)`).
#[inline(always)]
pub const fn block_index_bytes(index: u32) -> [u8; BLOCK_INDEX_LEN] {
    index.to_be_bytes()
}

/// XORs `input` into `acc` in place.
///
/// Only the overlapping prefix is folded; the engine always passes equal-length
/// slices (one MAC output each).
#[inline(always)]
pub fn xor_into(acc: &mut [u8], input: &[u8]) {
    for (a, b) in acc.iter_mut().zip(input) {
        *a ^= b;
    }
}

/// Number of `block_len`-sized blocks needed to cover `length` bytes.
///
/// `block_len` must be non-zero.
#[inline(always)]
pub const fn blocks_for(length: usize, block_len: usize) -> u64 {
    (length as u64).div_ceil(block_len as u64)
}
