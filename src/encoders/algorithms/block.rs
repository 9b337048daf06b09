//! Bit packing between 5-byte blocks and groups of eight 5-bit values.

/// Raw bytes per block.
pub const BLOCK_SIZE: usize = 5;

/// Symbols per encoded group, padding included.
pub const GROUP_WIDTH: usize = 8;

/// Splits a 40-bit block into eight 5-bit values, most significant first.
pub const fn split_block(b: [u8; BLOCK_SIZE]) -> [u8; GROUP_WIDTH] {
    [
        b[0] >> 3,
        ((b[0] & 0x07) << 2) | (b[1] >> 6),
        (b[1] & 0x3E) >> 1,
        ((b[1] & 0x01) << 4) | (b[2] >> 4),
        ((b[2] & 0x0F) << 1) | ((b[3] & 0x80) >> 7),
        (b[3] & 0x7C) >> 2,
        ((b[3] & 0x03) << 3) | ((b[4] & 0xE0) >> 5),
        b[4] & 0x1F,
    ]
}

/// Joins eight 5-bit values back into a 40-bit block.
///
/// Bits above the low five of each value are ignored.
pub const fn join_block(v: [u8; GROUP_WIDTH]) -> [u8; BLOCK_SIZE] {
    let v = [
        v[0] & 0x1F,
        v[1] & 0x1F,
        v[2] & 0x1F,
        v[3] & 0x1F,
        v[4] & 0x1F,
        v[5] & 0x1F,
        v[6] & 0x1F,
        v[7] & 0x1F,
    ];
    [
        (v[0] << 3) | (v[1] >> 2),
        (v[1] << 6) | (v[2] << 1) | (v[3] >> 4),
        (v[3] << 4) | (v[4] >> 1),
        (v[4] << 7) | (v[5] << 2) | (v[6] >> 3),
        (v[6] << 5) | v[7],
    ]
}

/// Number of meaningful values emitted for a tail of `tail_len` bytes.
///
/// A tail of `n` bytes carries `8n` bits, which need `ceil(8n / 5)` values.
pub const fn meaningful_values(tail_len: usize) -> usize {
    (tail_len * 8).div_ceil(5)
}

/// Inverse of [`meaningful_values`]: bytes recoverable from a group that
/// ends in `padding` padding symbols, or `None` if no tail length produces
/// that much padding.
pub const fn bytes_for_padding(padding: usize) -> Option<usize> {
    match padding {
        0 => Some(5),
        1 => Some(4),
        3 => Some(3),
        4 => Some(2),
        6 => Some(1),
        _ => None,
    }
}
