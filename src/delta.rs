//! Zigzag packing of signed deltas on top of the varint codec.

use crate::error::Result;
use crate::varint;

/// Maps a signed delta onto an unsigned value; small magnitudes stay small.
pub fn zigzag_encode(delta: i64) -> u64 {
    let shifted = delta.wrapping_shl(1);
    if delta >= 0 {
        shifted as u64
    } else {
        !shifted as u64
    }
}

/// Inverse of [`zigzag_encode`].
pub fn zigzag_decode(raw: u64) -> i64 {
    let magnitude = (raw >> 1) as i64;
    if raw & 1 == 1 { !magnitude } else { magnitude }
}

/// Appends the encoded form of a signed delta to `out`.
pub fn encode_signed(delta: i64, out: &mut String) {
    varint::encode_unsigned(zigzag_encode(delta), out);
}

/// Reads one signed delta starting at `*cursor`.
pub fn decode_signed(bytes: &[u8], cursor: &mut usize) -> Result<i64> {
    varint::decode_unsigned(bytes, cursor).map(zigzag_decode)
}
