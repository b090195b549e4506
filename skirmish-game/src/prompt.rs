//! Shared validated-integer input reader.

use std::io::{self, BufRead, Write};

/// Read one validated integer choice from a line-buffered stream.
///
/// Writes `prompt` once, then reads a line at a time until `accept` approves
/// the parsed value, writing `reprompt` after every rejected line. What
/// counts as valid is entirely the caller's: pass a predicate over the
/// current game state. No state outside the streams is touched by a rejected
/// line, and the writer is flushed before every read because neither prompt
/// ends in a newline.
///
/// # Errors
///
/// Propagates stream failures; a closed input yields
/// `io::ErrorKind::UnexpectedEof` rather than spinning on the reprompt.
pub fn read_choice<R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    reprompt: &str,
    mut accept: impl FnMut(u32) -> bool,
) -> io::Result<u32>
where
    R: BufRead,
    W: Write,
{
    output.write_all(prompt.as_bytes())?;
    output.flush()?;
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while awaiting a choice",
            ));
        }
        if let Ok(value) = line.trim().parse::<u32>() {
            if accept(value) {
                return Ok(value);
            }
        }
        output.write_all(reprompt.as_bytes())?;
        output.flush()?;
    }
}
