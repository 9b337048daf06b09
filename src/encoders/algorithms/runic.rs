use crate::core::alphabet::{Alphabet, PADDING};

use super::block::{
    BLOCK_SIZE, GROUP_WIDTH, bytes_for_padding, join_block, meaningful_values, split_block,
};
pub use super::errors::DecodeError;

/// Number of symbols `encode` produces for `len` input bytes.
pub const fn encoded_len(len: usize) -> usize {
    len.div_ceil(BLOCK_SIZE) * GROUP_WIDTH
}

/// Upper bound on the bytes `decode` produces for `symbols` input symbols.
pub const fn decoded_len_upper_bound(symbols: usize) -> usize {
    symbols / GROUP_WIDTH * BLOCK_SIZE
}

/// Encodes bytes as runes.
///
/// Every complete 5-byte block becomes eight runes. A final partial block is
/// zero-extended, and only the runes carrying its bits are kept; the group is
/// then filled out to eight symbols with the padding rune. Never fails.
pub fn encode(data: &[u8]) -> String {
    let alphabet = Alphabet::new();
    // Runes are three bytes of UTF-8 each
    let mut result = String::with_capacity(encoded_len(data.len()) * 3);

    let blocks = data.chunks_exact(BLOCK_SIZE);
    let tail = blocks.remainder();

    for block in blocks {
        let mut bytes = [0u8; BLOCK_SIZE];
        bytes.copy_from_slice(block);
        push_values(&mut result, &alphabet, &split_block(bytes));
    }

    if !tail.is_empty() {
        let mut bytes = [0u8; BLOCK_SIZE];
        bytes[..tail.len()].copy_from_slice(tail);

        let meaningful = meaningful_values(tail.len());
        push_values(&mut result, &alphabet, &split_block(bytes)[..meaningful]);
        for _ in meaningful..GROUP_WIDTH {
            result.push(PADDING);
        }
    }

    result
}

fn push_values(out: &mut String, alphabet: &Alphabet, values: &[u8]) {
    let symbols = alphabet.symbols();
    for &value in values {
        // split_block only yields 5-bit values
        debug_assert!((value as usize) < symbols.len());
        out.push(symbols[value as usize]);
    }
}

/// Decodes runes back into bytes.
///
/// The input must be a whole number of eight-symbol groups made of runes and
/// trailing padding only; line breaks and other whitespace are rejected.
/// Decoding is all-or-nothing: the first malformed group aborts the call.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let symbols: Vec<char> = encoded.chars().collect();
    if symbols.len() % GROUP_WIDTH != 0 {
        return Err(DecodeError::MalformedLength {
            actual: symbols.len(),
        });
    }

    let alphabet = Alphabet::new();
    let mut result = Vec::with_capacity(decoded_len_upper_bound(symbols.len()));

    for (group, chunk) in symbols.chunks_exact(GROUP_WIDTH).enumerate() {
        let start = group * GROUP_WIDTH;
        let decoded = decode_group(chunk, group, start, &alphabet, encoded)?;
        result.extend_from_slice(decoded.as_slice());
    }

    Ok(result)
}

/// Up to five bytes recovered from one group.
struct GroupBytes {
    bytes: [u8; BLOCK_SIZE],
    len: usize,
}

impl GroupBytes {
    fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

fn decode_group(
    chunk: &[char],
    group: usize,
    start: usize,
    alphabet: &Alphabet,
    encoded: &str,
) -> Result<GroupBytes, DecodeError> {
    // Nothing but padding: report the count rather than the first pad
    if chunk.iter().all(|&c| alphabet.is_padding(c)) {
        return Err(DecodeError::InvalidPaddingCount {
            group,
            count: chunk.len(),
        });
    }

    let mut values = [0u8; GROUP_WIDTH];
    let mut resolved = 0;
    let mut padding = 0;

    for (offset, &c) in chunk.iter().enumerate() {
        let position = start + offset;

        if alphabet.is_padding(c) {
            // Padding may not open a group
            if resolved == 0 {
                return Err(DecodeError::MisplacedPadding { group, position });
            }
            padding += 1;
            continue;
        }

        let value = alphabet
            .decode_char(c)
            .ok_or_else(|| DecodeError::invalid_symbol(c, position, encoded))?;

        if padding > 0 {
            return Err(DecodeError::MisplacedPadding { group, position });
        }

        values[resolved] = value;
        resolved += 1;
    }

    let len = bytes_for_padding(padding).ok_or(DecodeError::InvalidPaddingCount {
        group,
        count: padding,
    })?;

    // Padding is contiguous and trailing here, so this always holds for
    // groups of exactly eight symbols.
    if resolved < GROUP_WIDTH - padding {
        return Err(DecodeError::InvalidPaddingCount {
            group,
            count: padding,
        });
    }

    Ok(GroupBytes {
        bytes: join_block(values),
        len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::RUNES;

    fn runes(values: &[usize]) -> String {
        values.iter().map(|&v| RUNES[v]).collect()
    }

    fn padded(values: &[usize]) -> String {
        let mut s = runes(values);
        for _ in values.len()..GROUP_WIDTH {
            s.push(PADDING);
        }
        s
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_encode_single_ff() {
        assert_eq!(encode(&[0xFF]), padded(&[31, 28]));
        assert_eq!(encode(&[0xFF]), "ᛢᛣᛥᛥᛥᛥᛥᛥ");
    }

    #[test]
    fn test_encode_zero_block() {
        assert_eq!(encode(&[0; 5]), "ᚠᚠᚠᚠᚠᚠᚠᚠ");
    }

    #[test]
    fn test_encode_block_plus_tail() {
        let expected = runes(&[0, 4, 1, 0, 6, 1, 0, 5]) + &padded(&[0, 24]);
        assert_eq!(encode(&[1, 2, 3, 4, 5, 6]), expected);
    }

    #[test]
    fn test_tail_padding_widths() {
        let cases = [(1, 6), (2, 4), (3, 3), (4, 1), (5, 0)];
        for (len, padding) in cases {
            let encoded = encode(&vec![0xA5; len]);
            assert_eq!(encoded.chars().count(), GROUP_WIDTH);
            assert_eq!(
                encoded.chars().filter(|&c| c == PADDING).count(),
                padding,
                "tail of {} bytes",
                len
            );
        }
    }

    #[test]
    fn test_every_value_emits_one_symbol() {
        // Each group is exactly eight symbols, whatever values the block holds
        for value in 0..=255u8 {
            let encoded = encode(&[value; 7]);
            assert_eq!(encoded.chars().count(), 2 * GROUP_WIDTH, "byte {:#04x}", value);
            assert_eq!(encoded.chars().filter(|&c| c == PADDING).count(), 3);
        }
    }

    #[test]
    fn test_round_trip_lengths() {
        for len in 0..=37 {
            let data: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
            let encoded = encode(&data);
            assert_eq!(encoded.chars().count() % GROUP_WIDTH, 0);
            assert_eq!(encoded.chars().count(), encoded_len(len));
            assert_eq!(decode(&encoded).unwrap(), data, "length {}", len);
        }
    }

    #[test]
    fn test_decode_malformed_length() {
        assert_eq!(
            decode("ᚠᚠᚠ"),
            Err(DecodeError::MalformedLength { actual: 3 })
        );
        // Nine bytes of UTF-8 but three symbols; a byte count would not catch it
        let nine_symbols = "ᚠ".repeat(9);
        assert_eq!(
            decode(&nine_symbols),
            Err(DecodeError::MalformedLength { actual: 9 })
        );
    }

    #[test]
    fn test_decode_ascii_is_invalid_symbol() {
        // Eight ASCII characters have the right length but no runes
        match decode("ABCDEFGH") {
            Err(DecodeError::InvalidSymbol {
                symbol, position, ..
            }) => {
                assert_eq!(symbol, 'A');
                assert_eq!(position, 0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_reports_first_invalid_position() {
        let input = runes(&[1, 2, 3, 4, 5, 6, 7, 8]) + "ᚠᚠᚠxᚠᚠᚠy";
        match decode(&input) {
            Err(DecodeError::InvalidSymbol {
                symbol, position, ..
            }) => {
                assert_eq!(symbol, 'x');
                assert_eq!(position, 11);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_line_breaks() {
        let input = "ᚠᚠᚠᚠᚠᚠᚠ\n";
        assert!(matches!(
            decode(input),
            Err(DecodeError::InvalidSymbol { symbol: '\n', .. })
        ));
    }

    #[test]
    fn test_decode_illegal_padding_counts() {
        for padding in [2, 5, 7] {
            let input = padded(&vec![3; GROUP_WIDTH - padding]);
            assert_eq!(
                decode(&input),
                Err(DecodeError::InvalidPaddingCount {
                    group: 0,
                    count: padding
                })
            );
        }
    }

    #[test]
    fn test_decode_all_padding_group() {
        let input = runes(&[0; 8]) + &PADDING.to_string().repeat(8);
        assert_eq!(
            decode(&input),
            Err(DecodeError::InvalidPaddingCount { group: 1, count: 8 })
        );
    }

    #[test]
    fn test_decode_rune_after_padding() {
        let input = format!("ᚠᚠ{}ᚠᛥᛥᛥᛥ", PADDING);
        assert_eq!(
            decode(&input),
            Err(DecodeError::MisplacedPadding {
                group: 0,
                position: 3
            })
        );
    }

    #[test]
    fn test_decode_leading_padding() {
        for input in ["ᛥᚠᚠᚠᚠᚠᚠᚠ", "ᛥxᚠᚠᚠᚠᚠᚠ", "ᛥᛥᛥᛥᛥᛥᛥx", "ᛥᛥᛥᛥᛥᛥᛥᚠ"] {
            assert_eq!(
                decode(input),
                Err(DecodeError::MisplacedPadding {
                    group: 0,
                    position: 0
                }),
                "{}",
                input
            );
        }

        // Reported at the pad's position in the whole input
        let input = runes(&[1; 8]) + "ᛥᚠᚠᚠᚠᚠᚠᚠ";
        assert_eq!(
            decode(&input),
            Err(DecodeError::MisplacedPadding {
                group: 1,
                position: 8
            })
        );
    }

    #[test]
    fn test_decode_padding_mid_stream() {
        // A padded group is only legal as the last thing the encoder wrote,
        // but decode treats groups independently.
        let input = padded(&[31, 28]) + &padded(&[31, 28]);
        assert_eq!(decode(&input).unwrap(), vec![0xFF, 0xFF]);
    }

    #[test]
    fn test_decode_is_all_or_nothing() {
        let mut input = encode(b"hello world");
        input.push_str("ᚠᚠᛥᛥᚠᛥᛥᛥ");
        assert!(decode(&input).is_err());
    }

    #[test]
    fn test_decode_ignores_unused_tail_bits() {
        // v1 of a one-byte tail only contributes its top three bits
        assert_eq!(decode(&padded(&[31, 31])).unwrap(), vec![0xFF]);
    }

    #[test]
    fn test_decoded_len_upper_bound() {
        assert_eq!(decoded_len_upper_bound(0), 0);
        assert_eq!(decoded_len_upper_bound(8), 5);
        assert_eq!(decoded_len_upper_bound(16), 10);
    }
}
