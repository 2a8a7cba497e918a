use std::fs;

use mmcpart::{DumpConfig, Error, read_partitions, write_dump_commands};

fn run(input: &str) -> Result<String, Error> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(mmcpart::INPUT_FILENAME);
    fs::write(&path, input)?;

    let parts = read_partitions(&path)?;
    let mut out = Vec::new();
    write_dump_commands(&mut out, &parts, &DumpConfig::default())?;
    Ok(String::from_utf8(out).expect("commands are ascii"))
}

#[test]
fn single_partition() {
    let out = run("0: boot 8192 @ 2048   \n").unwrap();
    assert_eq!(
        out,
        "mmc read.p 0x25000000 boot 0x400000; fatwrite usb 0:1 0x25000000 part0.bin 0x400000\n"
    );
}

#[test]
fn oversized_partition_does_not_stop_later_ones() {
    let input = "\
  1: misc 2048 @ 10240
  2: system 65537 @ 12288
  3: tee 16 @ 77825
";
    let out = run(input).unwrap();
    assert_eq!(
        out,
        "\
mmc read.p 0x25000000 misc 0x100000; fatwrite usb 0:1 0x25000000 part1.bin 0x100000
# skipping system (size 0x2000200 > 0x2000000)
mmc read.p 0x25000000 tee 0x2000; fatwrite usb 0:1 0x25000000 part3.bin 0x2000
"
    );
}

#[test]
fn empty_file_prints_nothing() {
    assert_eq!(run("").unwrap(), "");
}

#[test]
fn bad_line_prints_nothing() {
    let input = "0: boot 8192 @ 2048\n1: misc 2048 @ 10240\nPartition Map for MMC device 0\n";
    match run(input) {
        Err(Error::Parse { line_number, .. }) => assert_eq!(line_number, 3),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn cr_only_file_dumps_every_row() {
    let out = run("0: boot 8192 @ 2048\r1: huge 36028797018963968 @ 10240\r2: misc 2048 @ 10240").unwrap();
    assert_eq!(
        out,
        "\
mmc read.p 0x25000000 boot 0x400000; fatwrite usb 0:1 0x25000000 part0.bin 0x400000
# skipping huge (size 0x10000000000000000 > 0x2000000)
mmc read.p 0x25000000 misc 0x100000; fatwrite usb 0:1 0x25000000 part2.bin 0x100000
"
    );
}
