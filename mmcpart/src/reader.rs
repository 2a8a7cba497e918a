use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Error;
use crate::partition::Partition;

/// Split text into lines ending in `\n`, `\r\n` or a lone `\r`.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(pos) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..pos];
        let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + skip..];
        Some(line)
    })
}

/// Parse every line of `reader` as a partition table row.
///
/// Parsing is all-or-nothing: the first blank, non-ASCII, or malformed line
/// aborts with its 1-based line number and nothing parsed so far is returned.
pub fn parse_partitions<R: Read>(mut reader: R) -> Result<Vec<Partition>, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut parts = Vec::new();
    for (i, line) in split_lines(&text).enumerate() {
        let line_number = i + 1;
        if !line.is_ascii() {
            return Err(Error::NonAscii { line_number });
        }

        let part = Partition::parse(line).map_err(|err| err.at_line(line_number))?;
        log::debug!("line {}: {}", line_number, part);
        parts.push(part);
    }

    Ok(parts)
}

pub fn read_partitions<P: AsRef<Path>>(path: P) -> Result<Vec<Partition>, Error> {
    let path = path.as_ref();
    log::debug!("reading partition table from {}", path.display());

    let file = File::open(path)?;
    let parts = parse_partitions(file)?;

    log::info!("read {} partitions from {}", parts.len(), path.display());
    Ok(parts)
}
