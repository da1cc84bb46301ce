use std::io::BufRead;

use crate::error::InputError;

/// Reads one line of text from `reader`.
///
/// Bytes are accumulated in a growable buffer until a newline or the end of
/// the stream. The newline and a trailing `\r` are not part of the returned
/// text. Invalid UTF-8 is replaced rather than rejected. Empty input
/// yields an empty string.
///
/// # Errors
/// Returns [`InputError::ReadFailure`] if the underlying reader fails.
///
/// # Example
/// ```
/// use columna::interpreter::reader::read_line;
///
/// let mut input = "12+7\r\nignored\n".as_bytes();
/// assert_eq!(read_line(&mut input).unwrap(), "12+7");
///
/// let mut unterminated = "1+2\r".as_bytes();
/// assert_eq!(read_line(&mut unterminated).unwrap(), "1+2");
///
/// let mut empty = "".as_bytes();
/// assert_eq!(read_line(&mut empty).unwrap(), "");
/// ```
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
    let mut buffer = Vec::new();
    reader.read_until(b'\n', &mut buffer)?;

    if buffer.last() == Some(&b'\n') {
        buffer.pop();
    }
    if buffer.last() == Some(&b'\r') {
        buffer.pop();
    }

    log::debug!("read {} bytes from input", buffer.len());

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
