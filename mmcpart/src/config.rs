/// Default name of the file holding the captured `mmc part` output.
pub const INPUT_FILENAME: &str = "input.txt";

/// Staging buffer for partition reads.
// where the kernel gets loaded, so it's unused at this point
pub const BUF_ADDR: u64 = 0x25000000;

/// Largest partition that fits below the bootloader's own load address.
// U-Boot is loaded around 0x27000000, so this can't be much bigger
pub const SIZE_LIMIT: u64 = 0x2000000; // 32MiB (0x10000 blocks)

pub const BLOCK_SIZE: u64 = 512;

/// `fatwrite` interface and device:partition pair receiving the dumps.
pub const DUMP_TARGET: &str = "usb 0:1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    pub(crate) buffer_address: u64,
    pub(crate) size_limit: u64,
    pub(crate) dump_target: String,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            buffer_address: BUF_ADDR,
            size_limit: SIZE_LIMIT,
            dump_target: String::from(DUMP_TARGET),
        }
    }
}

impl DumpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer_address(mut self, address: u64) -> Self {
        self.buffer_address = address;
        self
    }

    pub fn size_limit(mut self, limit: u64) -> Self {
        self.size_limit = limit;
        self
    }

    pub fn dump_target(mut self, target: &str) -> Self {
        self.dump_target = target.to_string();
        self
    }

    pub fn get_buffer_address(&self) -> u64 {
        self.buffer_address
    }

    pub fn get_size_limit(&self) -> u64 {
        self.size_limit
    }

    pub fn get_dump_target(&self) -> &str {
        &self.dump_target
    }
}
