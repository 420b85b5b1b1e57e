use crate::domain::errors::ProcessError;
use crate::domain::models::FilterStats;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const COMMENT_PREFIXES: [&[u8]; 2] = [b"#", b"//"];

/// A line is a comment iff, after leading whitespace, it starts with `#` or `//`.
///
/// Valid UTF-8 is trimmed of Unicode whitespace; anything else falls back to
/// ASCII whitespace so raw bytes never cause a failure.
pub fn is_comment(line: &[u8]) -> bool {
    let trimmed = match std::str::from_utf8(line) {
        Ok(s) => s.trim_start().as_bytes(),
        Err(_) => line.trim_ascii_start(),
    };
    COMMENT_PREFIXES.iter().any(|p| trimmed.starts_with(p))
}

/// Streams `input` to `temp`, dropping comment lines.
///
/// On failure `temp` is left on disk as written so far.
pub fn filter_to_temp(input: &Path, temp: &Path) -> Result<FilterStats, ProcessError> {
    let source = File::open(input).map_err(ProcessError::OpenInput)?;
    let output = File::create(temp).map_err(ProcessError::CreateTemp)?;

    let mut writer = BufWriter::new(output);
    let stats = filter_lines(BufReader::new(source), &mut writer)?;
    writer.flush().map_err(ProcessError::WriteTemp)?;
    writer
        .get_ref()
        .sync_all()
        .map_err(ProcessError::WriteTemp)?;
    Ok(stats)
}

/// Copies every non-comment line from `reader` to `writer`, each followed by `\n`.
///
/// Line content is everything before the `\n`, so a `\r` from CRLF input is
/// written back unchanged. A final unterminated line gains a `\n`.
pub fn filter_lines<R: BufRead, W: Write>(
    mut reader: R,
    writer: &mut W,
) -> Result<FilterStats, ProcessError> {
    let mut stats = FilterStats::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(ProcessError::ReadInput)?;
        if n == 0 {
            break;
        }
        stats.lines_read += 1;
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        if is_comment(line) {
            stats.lines_removed += 1;
            log::trace!(
                "dropping comment line {}: {}",
                stats.lines_read,
                String::from_utf8_lossy(line)
            );
            continue;
        }
        writer.write_all(line).map_err(ProcessError::WriteTemp)?;
        writer.write_all(b"\n").map_err(ProcessError::WriteTemp)?;
        stats.lines_kept += 1;
        stats.bytes_written += line.len() as u64 + 1;
    }
    Ok(stats)
}
