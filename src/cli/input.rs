use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Size limit applied to input before it is encoded or decoded.
pub struct InputLimits {
    /// Maximum input size in bytes (0 = unlimited)
    pub max_size: usize,
    pub force: bool,
    pub quiet: bool,
}

impl InputLimits {
    fn check(&self, size: usize, what: &str) -> Result<(), Box<dyn std::error::Error>> {
        if self.max_size == 0 || size <= self.max_size {
            return Ok(());
        }

        if self.force {
            if !self.quiet {
                eprintln!(
                    "Warning: Processing large {} ({} bytes, limit: {} bytes)",
                    what, size, self.max_size
                );
            }
            Ok(())
        } else {
            Err(format!(
                "Input size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                size, self.max_size
            )
            .into())
        }
    }
}

/// File length as `usize`, saturating where `usize` is narrower than 64 bits.
fn file_size(len: u64) -> usize {
    usize::try_from(len).unwrap_or(usize::MAX)
}

/// Reads the whole input from `file`, or from stdin when no file is given.
pub fn read_input(
    file: Option<&Path>,
    limits: &InputLimits,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        // Check the size before pulling the file into memory
        let metadata = fs::metadata(file_path)
            .map_err(|e| format!("Cannot read '{}': {}", file_path.display(), e))?;
        limits.check(file_size(metadata.len()), "file")?;

        let data = fs::read(file_path)
            .map_err(|e| format!("Cannot read '{}': {}", file_path.display(), e))?;
        Ok(data)
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        limits.check(buffer.len(), "input")?;
        Ok(buffer)
    }
}

/// Writes `data` to `output`, or to stdout when no file is given.
pub fn write_output(
    output: Option<&Path>,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(output_path) = output {
        fs::write(output_path, data)
            .map_err(|e| format!("Cannot write '{}': {}", output_path.display(), e))?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data)?;
        stdout.flush()?;
    }
    Ok(())
}

/// Removes line feeds and carriage returns, so wrapped or CRLF text decodes.
pub fn strip_line_endings(text: &str) -> String {
    text.chars().filter(|&c| c != '\n' && c != '\r').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_endings() {
        assert_eq!(strip_line_endings("ᚠᚢ\nᚦᚩ\r\n"), "ᚠᚢᚦᚩ");
        assert_eq!(strip_line_endings("\r\n\n"), "");
        // Other whitespace is left for the decoder to reject
        assert_eq!(strip_line_endings("ᚠ ᚢ\t"), "ᚠ ᚢ\t");
    }

    #[test]
    fn test_limits_unlimited() {
        let limits = InputLimits {
            max_size: 0,
            force: false,
            quiet: true,
        };
        assert!(limits.check(usize::MAX, "input").is_ok());
    }

    #[test]
    fn test_limits_enforced() {
        let limits = InputLimits {
            max_size: 4,
            force: false,
            quiet: true,
        };
        assert!(limits.check(4, "input").is_ok());
        let err = limits.check(5, "input").unwrap_err();
        assert!(err.to_string().contains("exceeds limit"));
    }

    #[test]
    fn test_huge_file_size_is_not_truncated() {
        let limits = InputLimits {
            max_size: 1024,
            force: false,
            quiet: true,
        };
        assert_eq!(file_size(4096), 4096);
        // A wrapped length would look small and slip under the limit
        assert!(limits.check(file_size(u64::MAX), "file").is_err());
        assert!(limits.check(file_size((1u64 << 32) + 1), "file").is_err());
    }

    #[test]
    fn test_limits_forced() {
        let limits = InputLimits {
            max_size: 4,
            force: true,
            quiet: true,
        };
        assert!(limits.check(5, "file").is_ok());
    }
}
