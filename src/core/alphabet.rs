/// The 32 runes, in index order. Index `i` encodes the 5-bit value `i`.
pub const RUNES: [char; 32] = [
    'ᚠ', 'ᚢ', 'ᚦ', 'ᚩ', 'ᚱ', 'ᚳ', 'ᚷ', 'ᚹ', 'ᚻ', 'ᚾ', 'ᛁ', 'ᛡ', 'ᛇ', 'ᛈ', 'ᛉ', 'ᛋ', //
    'ᛏ', 'ᛒ', 'ᛖ', 'ᛗ', 'ᛚ', 'ᛝ', 'ᛟ', 'ᛞ', 'ᚪ', 'ᚫ', 'ᛠ', 'ᚣ', 'ᛣ', 'ᛤ', 'ᚸ', 'ᛢ',
];

/// Filler used to bring a short final group up to eight symbols.
pub const PADDING: char = 'ᛥ';

// Every rune and the padding symbol live in the Unicode Runic block.
const RUNIC_BLOCK_START: u32 = 0x16A0;
const RUNIC_BLOCK_LEN: usize = 0x60;
const NOT_A_RUNE: u8 = 0xFF;

/// Maps `codepoint - RUNIC_BLOCK_START` to a 5-bit value, `NOT_A_RUNE` otherwise.
const fn build_decode_table() -> [u8; RUNIC_BLOCK_LEN] {
    let mut table = [NOT_A_RUNE; RUNIC_BLOCK_LEN];
    let mut i = 0;
    while i < RUNES.len() {
        table[(RUNES[i] as u32 - RUNIC_BLOCK_START) as usize] = i as u8;
        i += 1;
    }
    table
}

const DECODE_TABLE: [u8; RUNIC_BLOCK_LEN] = build_decode_table();

/// The runic32 alphabet.
///
/// A zero-sized handle over the constant rune and padding tables. Every
/// instance is identical, so it can be copied freely and shared across
/// threads without synchronization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Alphabet;

impl Alphabet {
    /// Returns the alphabet.
    pub const fn new() -> Self {
        Alphabet
    }

    /// Returns the radix of the alphabet (always 32).
    pub const fn base(&self) -> usize {
        RUNES.len()
    }

    /// Returns the padding symbol.
    pub const fn padding(&self) -> char {
        PADDING
    }

    /// Returns all 32 runes in index order.
    pub const fn symbols(&self) -> &'static [char; 32] {
        &RUNES
    }

    /// Encodes a 5-bit value as a rune.
    ///
    /// Returns `None` for values of 32 and above.
    pub fn encode_digit(&self, digit: u8) -> Option<char> {
        RUNES.get(digit as usize).copied()
    }

    /// Decodes a rune back to its 5-bit value.
    ///
    /// Returns `None` for the padding symbol and for anything outside the
    /// alphabet. No normalization is applied.
    pub fn decode_char(&self, c: char) -> Option<u8> {
        let offset = (c as u32).checked_sub(RUNIC_BLOCK_START)? as usize;
        match DECODE_TABLE.get(offset) {
            Some(&value) if value != NOT_A_RUNE => Some(value),
            _ => None,
        }
    }

    /// Returns true if `c` is the padding symbol.
    pub fn is_padding(&self, c: char) -> bool {
        c == PADDING
    }

    /// Returns a printable list of the valid symbols, used in error hints.
    pub fn valid_chars(&self) -> String {
        let mut chars: String = RUNES.iter().collect();
        chars.push(PADDING);
        chars
    }
}
