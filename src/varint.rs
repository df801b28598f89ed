//! Unsigned base-32 varints over the printable range used by encoded polylines.
//!
//! Each character carries five payload bits plus a continuation flag (0x20),
//! offset by 63 so that every emitted byte lands in `63..=126`.

use crate::error::{PolylineError, Result};

/// Offset added to every 6-bit group.
pub const CHAR_OFFSET: u8 = 63;

/// Continuation flag of a 6-bit group.
const CONTINUATION: u64 = 0x20;

/// Payload mask of a 6-bit group.
const PAYLOAD: u64 = 0x1f;

/// Highest bit offset a group may start at and still fit a `u64`.
const MAX_SHIFT: u32 = 60;

/// Appends the varint form of `value` to `out`.
pub fn encode_unsigned(mut value: u64, out: &mut String) {
    while value >= CONTINUATION {
        out.push(group_char((value & PAYLOAD) | CONTINUATION));
        value >>= 5;
    }
    out.push(group_char(value));
}

/// Reads one varint starting at `*cursor` and advances the cursor past it.
pub fn decode_unsigned(bytes: &[u8], cursor: &mut usize) -> Result<u64> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let position = *cursor;
        let byte = *bytes
            .get(position)
            .ok_or_else(|| PolylineError::malformed(position, "truncated varint"))?;
        if !(CHAR_OFFSET..=126).contains(&byte) {
            return Err(PolylineError::malformed(
                position,
                "character outside the polyline alphabet",
            ));
        }
        if shift > MAX_SHIFT {
            return Err(PolylineError::malformed(position, "varint wider than 64 bits"));
        }

        let group = u64::from(byte - CHAR_OFFSET);
        result |= (group & PAYLOAD) << shift;
        shift += 5;
        *cursor += 1;

        if group < CONTINUATION {
            return Ok(result);
        }
    }
}

fn group_char(group: u64) -> char {
    // group <= 0x3f, so the sum stays within 63..=126
    char::from(group as u8 + CHAR_OFFSET)
}
