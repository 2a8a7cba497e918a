use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Style, Styles};
use mmcpart::{BUF_ADDR, DumpConfig, Error, INPUT_FILENAME, SIZE_LIMIT};

const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

/// Cargo's color style
/// [source](https://github.com/crate-ci/clap-cargo/blob/master/src/style.rs)
const CARGO_STYLING: Styles = Styles::styled()
    .header(HEADER)
    .usage(USAGE)
    .literal(LITERAL)
    .placeholder(PLACEHOLDER)
    .error(ERROR)
    .valid(VALID)
    .invalid(INVALID);

fn parse_u64(value: &str) -> Result<u64, String> {
    let s = value.trim();
    let (radix, digits) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, s),
    };
    u64::from_str_radix(digits, radix).map_err(|err| format!("invalid number {:?}: {}", value, err))
}

/// Print mboot commands that dump each eMMC partition to a USB drive.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[clap(styles = CARGO_STYLING)]
struct Cli {
    /// Captured output of mboot's `mmc part`
    #[arg(default_value = INPUT_FILENAME)]
    input: PathBuf,

    /// Staging buffer address for partition reads
    #[arg(short, long, value_parser = parse_u64, default_value_t = BUF_ADDR)]
    buffer_address: u64,

    /// Skip partitions larger than this many bytes
    #[arg(short, long, value_parser = parse_u64, default_value_t = SIZE_LIMIT)]
    size_limit: u64,
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = DumpConfig::new()
        .buffer_address(cli.buffer_address)
        .size_limit(cli.size_limit);

    let parts = mmcpart::read_partitions(&cli.input)?;

    mmcpart::write_dump_commands(&mut io::stdout().lock(), &parts, &config)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}: {}", cli.input.display(), err);
            ExitCode::FAILURE
        }
    }
}
