//! Unsigned LEB128 encoding for the collection-id key prefix
//!
//! Collection-aware connections prepend the collection id to every protocol
//! key, encoded as unsigned LEB128: seven payload bits per byte, continuation
//! bit set on all but the last byte, least-significant group first.

/// Encode `value` as unsigned LEB128, appending to `out`
pub fn encode_leb128(out: &mut Vec<u8>, mut value: u32) {
    loop {
        let mut byte = (value & 0x7f) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if value == 0 {
            return;
        }
    }
}

/// Decode an unsigned LEB128 value from the start of `bytes`
///
/// Returns the value and the number of bytes consumed, or `None` when the
/// buffer ends mid-sequence or the value overflows 32 bits.
pub fn decode_leb128(bytes: &[u8]) -> Option<(u32, usize)> {
    let mut value: u32 = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if i * 7 >= 32 {
            return None;
        }
        value |= u32::from(byte & 0x7f) << (i * 7);
        if byte & 0x80 == 0 {
            return Some((value, i + 1));
        }
    }
    None
}
