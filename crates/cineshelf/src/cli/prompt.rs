//! Line-oriented input helpers for the interactive menu.

use std::io::{BufRead, Write};
use std::str::FromStr;

/// Print `prompt`, flush, and read one line.
///
/// The returned string is trimmed of surrounding whitespace. Exhausted
/// input surfaces as `UnexpectedEof` so the menu loop can wind down
/// instead of spinning on an empty reader.
pub fn line<R: BufRead>(input: &mut R, prompt: &str) -> std::io::Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut buffer = String::new();
    let read = input.read_line(&mut buffer)?;
    if read == 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input closed",
        ));
    }
    Ok(buffer.trim().to_string())
}

/// Prompt repeatedly until the line parses as `T`.
///
/// `retry` is printed after every line that fails to parse.
pub fn parsed<T, R>(input: &mut R, prompt: &str, retry: &str) -> std::io::Result<T>
where
    T: FromStr,
    R: BufRead,
{
    loop {
        let text = line(input, prompt)?;
        match text.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("{}", retry),
        }
    }
}
