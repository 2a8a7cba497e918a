use std::fmt;
use std::io::Write;

use crate::config::DumpConfig;
use crate::error::Error;
use crate::partition::Partition;

/// One line of generated mboot script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpLine {
    /// Partition too large for the staging buffer; rendered as a comment.
    Skip { name: String, size: u128, limit: u64 },
    /// `mmc read.p` into the buffer followed by `fatwrite` out of it.
    Command { read: String, write: String },
}

impl fmt::Display for DumpLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpLine::Skip { name, size, limit } => {
                write!(f, "# skipping {} (size {:#x} > {:#x})", name, size, limit)
            }
            DumpLine::Command { read, write } => write!(f, "{}; {}", read, write),
        }
    }
}

impl Partition {
    /// Name of the file the partition is dumped to, e.g. `part3.bin`.
    pub fn dump_filename(&self) -> String {
        format!("part{}.bin", self.index())
    }

    fn dump_line(&self, config: &DumpConfig) -> DumpLine {
        let addr = config.get_buffer_address();
        let size = self.size();
        DumpLine::Command {
            read: format!("mmc read.p {:#x} {} {:#x}", addr, self.name(), size),
            write: format!(
                "fatwrite {} {:#x} {} {:#x}",
                config.get_dump_target(),
                addr,
                self.dump_filename(),
                size
            ),
        }
    }

    /// The read/write command pair for this partition, ignoring the size limit.
    pub fn dump_command(&self, config: &DumpConfig) -> String {
        self.dump_line(config).to_string()
    }
}

/// Decide what to emit for each partition, in table order.
pub fn plan_dump(parts: &[Partition], config: &DumpConfig) -> Vec<DumpLine> {
    parts
        .iter()
        .map(|part| {
            let size = part.size();
            if size > u128::from(config.get_size_limit()) {
                log::info!(
                    "skipping {} ({} bytes exceeds the {} byte limit)",
                    part.name(),
                    size,
                    config.get_size_limit()
                );
                DumpLine::Skip {
                    name: part.name().to_string(),
                    size,
                    limit: config.get_size_limit(),
                }
            } else {
                part.dump_line(config)
            }
        })
        .collect()
}

pub fn write_dump_commands<W: Write>(
    out: &mut W,
    parts: &[Partition],
    config: &DumpConfig,
) -> Result<(), Error> {
    let lines = plan_dump(parts, config);
    for line in &lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    let skipped = lines
        .iter()
        .filter(|line| matches!(line, DumpLine::Skip { .. }))
        .count();
    log::info!(
        "emitted {} dump commands, skipped {}",
        lines.len() - skipped,
        skipped
    );
    Ok(())
}
