pub mod config;
pub mod dump;
pub mod error;
pub mod partition;
pub mod reader;

pub use config::{BLOCK_SIZE, BUF_ADDR, DUMP_TARGET, DumpConfig, INPUT_FILENAME, SIZE_LIMIT};
pub use dump::{DumpLine, plan_dump, write_dump_commands};
pub use error::Error;
pub use partition::Partition;
pub use reader::{parse_partitions, read_partitions};
