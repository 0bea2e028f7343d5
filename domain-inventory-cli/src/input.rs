//! 交互输入读取
//!
//! 按字节读取一行，非 UTF-8 输入交给校验器报告 `InvalidRune`。

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt};

/// Inputs this long or longer are rejected before validation.
pub const MAX_INPUT_LENGTH: usize = 100;

/// What to do with one line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Input<'a> {
    /// Blank line
    Skip,
    TooLong,
    Query(&'a [u8]),
}

/// Read one line as raw bytes into `buf`. `false` at EOF.
pub async fn read_line<R>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    Ok(reader.read_until(b'\n', buf).await? > 0)
}

/// Strip the line terminator and surrounding whitespace, then classify.
pub fn classify(line: &[u8]) -> Input<'_> {
    let trimmed = line.trim_ascii();
    if trimmed.is_empty() {
        Input::Skip
    } else if trimmed.len() >= MAX_INPUT_LENGTH {
        Input::TooLong
    } else {
        Input::Query(trimmed)
    }
}
