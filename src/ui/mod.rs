//! User interface module - input handling and formatting.
//!
//! Separates concerns:
//! - `formatter` - Styled status output on stderr
//! - This module - Reading the current tag from stdin

use std::io::{self, IsTerminal, Read};

use crate::error::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_manual_push_instruction, display_plan,
    display_status, display_success, format_plan,
};

/// Checks whether something is piped into stdin.
pub fn stdin_is_piped() -> bool {
    !io::stdin().is_terminal()
}

/// Reads the current tag from a reader, dropping the trailing line break.
///
/// Only one trailing `\n` (or `\r\n`) is removed, so `echo v1.2.3 | next-tag`
/// sees `v1.2.3`. Any other whitespace is kept and will fail to parse.
pub fn read_tag<R: Read>(mut reader: R) -> Result<String> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    let trimmed = input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .unwrap_or(input.as_str());

    Ok(trimmed.to_string())
}

/// Reads the current tag from stdin.
pub fn read_tag_from_stdin() -> Result<String> {
    read_tag(io::stdin().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_tag_trims_single_newline() {
        assert_eq!(read_tag("v1.2.3\n".as_bytes()).unwrap(), "v1.2.3");
        assert_eq!(read_tag("v1.2.3\r\n".as_bytes()).unwrap(), "v1.2.3");
        assert_eq!(read_tag("v1.2.3".as_bytes()).unwrap(), "v1.2.3");
    }

    #[test]
    fn test_read_tag_empty_input() {
        assert_eq!(read_tag("".as_bytes()).unwrap(), "");
        assert_eq!(read_tag("\n".as_bytes()).unwrap(), "");
    }

    #[test]
    fn test_read_tag_keeps_other_whitespace() {
        assert_eq!(read_tag("1.2.3 \n\n".as_bytes()).unwrap(), "1.2.3 \n");
    }
}
