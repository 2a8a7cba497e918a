use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::BLOCK_SIZE;
use crate::error::Error;

// One row of mboot's `mmc part` listing, e.g. "  3: boot 8192 @ 2048".
// Classes are ASCII-only; the row may carry trailing text after whitespace.
static PARTITION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?-u)^\s*(?P<index>\d+):\s+(?P<name>\w+)\s+(?P<size>\d+)\s@\s(?P<offset>\d+)(?:\s|$)",
    )
    .expect("partition line regex")
});

/// A single entry of the eMMC partition table, in 512-byte blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    index: u64,
    name: String,
    start_block: u64,
    blocks: u64,
}

fn non_negative(field: &'static str, value: i64) -> Result<u64, Error> {
    u64::try_from(value).map_err(|_| Error::Validation { field, value })
}

fn parse_number(field: &'static str, digits: &str) -> Result<u64, Error> {
    digits.parse::<u64>().map_err(|_| Error::NumberOutOfRange {
        field,
        value: digits.to_string(),
    })
}

impl Partition {
    pub fn new(index: i64, name: &str, start_block: i64, blocks: i64) -> Result<Self, Error> {
        // XXX: mboot numbers from 0 here, but should index 0 be rejected?
        let index = non_negative("index", index)?;
        let start_block = non_negative("offset", start_block)?;
        let blocks = non_negative("blocks", blocks)?;

        Self::from_blocks(index, name, start_block, blocks)
    }

    fn from_blocks(index: u64, name: &str, start_block: u64, blocks: u64) -> Result<Self, Error> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        Ok(Self {
            index,
            name: name.to_string(),
            start_block,
            blocks,
        })
    }

    /// Parse one line of `mmc part` output.
    ///
    /// The listing's "size" column becomes [`Partition::blocks`] and its
    /// "offset" column becomes [`Partition::start_block`].
    pub fn parse(line: &str) -> Result<Self, Error> {
        let Some(caps) = PARTITION_LINE.captures(line) else {
            return Err(Error::Parse {
                line_number: 0,
                line: line.to_string(),
            });
        };

        let index = parse_number("index", &caps["index"])?;
        let blocks = parse_number("size", &caps["size"])?;
        let start_block = parse_number("offset", &caps["offset"])?;

        Self::from_blocks(index, &caps["name"], start_block, blocks)
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_block(&self) -> u64 {
        self.start_block
    }

    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    // Byte values are u128 so any u64 block count or offset is representable.

    /// Length in bytes.
    pub fn size(&self) -> u128 {
        u128::from(self.blocks) * u128::from(BLOCK_SIZE)
    }

    /// Byte offset of the first block.
    pub fn start(&self) -> u128 {
        u128::from(self.start_block) * u128::from(BLOCK_SIZE)
    }

    /// Byte offset just past the last block.
    pub fn end(&self) -> u128 {
        self.start() + self.size()
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Partition({}, '{}', {:#x}, {:#x})",
            self.index,
            self.name,
            self.start_block,
            self.size()
        )
    }
}
