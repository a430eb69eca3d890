//! Line-oriented terminal helpers shared by the interactive tools.

use std::io::{self, BufRead, Write};

/// Write `text` without a trailing newline and flush so it shows before input.
pub fn prompt<W: Write>(output: &mut W, text: &str) -> io::Result<()> {
    write!(output, "{}", text)?;
    output.flush()
}

/// Read one line with its line terminator stripped.
/// Returns `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Prompt, then read a line. End of input is an `UnexpectedEof` error.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<String> {
    prompt(output, text)?;
    read_line(input)?.ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while waiting for an answer",
        )
    })
}
