use std::fmt;

/// Errors that can occur during decoding.
///
/// Positions are counted in symbols (Unicode scalar values), not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input is not a whole number of eight-symbol groups
    MalformedLength { actual: usize },
    /// The input contains a character that is neither a rune nor the padding symbol
    InvalidSymbol {
        symbol: char,
        position: usize,
        input: String,
    },
    /// A group opens with padding, or a rune follows padding within a group
    MisplacedPadding { group: usize, position: usize },
    /// A group ends in a number of padding symbols no encoder produces
    InvalidPaddingCount { group: usize, count: usize },
}

impl DecodeError {
    /// Create an InvalidSymbol error with context
    pub fn invalid_symbol(symbol: char, position: usize, input: &str) -> Self {
        // Truncate long inputs on a symbol boundary
        let display_input = if input.chars().count() > 40 {
            let head: String = input.chars().take(40).collect();
            format!("{}...", head)
        } else {
            input.to_string()
        };

        DecodeError::InvalidSymbol {
            symbol,
            position,
            input: display_input,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();
        let (error, hint) = if use_color {
            ("\x1b[1;31merror:\x1b[0m", "\x1b[1;36mhint:\x1b[0m")
        } else {
            ("error:", "hint:")
        };

        match self {
            DecodeError::MalformedLength { actual } => {
                writeln!(f, "{} invalid length for decode", error)?;
                writeln!(f)?;
                writeln!(
                    f,
                    "  input is {} symbols, expected a multiple of 8",
                    actual
                )?;
                writeln!(f)?;
                write!(
                    f,
                    "{} encoded runes come in groups of 8; check for truncated input",
                    hint
                )
            }
            DecodeError::InvalidSymbol {
                symbol,
                position,
                input,
            } => {
                writeln!(
                    f,
                    "{} invalid symbol {:?} (U+{:04X}) at position {}",
                    error, symbol, *symbol as u32, position
                )?;
                writeln!(f)?;

                // Caret only lines up while the position is inside the shown input
                if *position < input.chars().count() {
                    writeln!(f, "  {}", input)?;
                    write!(f, "  {}", " ".repeat(*position))?;
                    if use_color {
                        writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                    } else {
                        writeln!(f, "^")?;
                    }
                    writeln!(f)?;
                }

                write!(
                    f,
                    "{} valid symbols: {}",
                    hint,
                    crate::Alphabet::new().valid_chars()
                )
            }
            DecodeError::MisplacedPadding { group, position } => {
                writeln!(
                    f,
                    "{} misplaced padding at position {} (group {})",
                    error, position, group
                )?;
                write!(
                    f,
                    "\n{} padding '{}' may only appear at the end of a group",
                    hint,
                    crate::PADDING
                )
            }
            DecodeError::InvalidPaddingCount { group, count } => {
                writeln!(
                    f,
                    "{} invalid padding: {} padding symbols in group {}",
                    error, count, group
                )?;
                write!(
                    f,
                    "\n{} a group ends in 0, 1, 3, 4 or 6 padding symbols",
                    hint
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
