// crates/quantum-cli/tests/cli_convert.rs

use std::process::{Command, Output};

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_quantum-cli"))
}

fn run_ok(cmd: &mut Command) -> String {
    let out: Output = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).expect("utf8 stdout")
}

fn lines(s: &str) -> Vec<&str> {
    s.lines().map(str::trim).collect()
}

#[test]
fn info_reports_depth_and_max() {
    let stdout = run_ok(cli().arg("info"));
    let depth_line = stdout
        .lines()
        .find(|l| l.starts_with("depth"))
        .expect("depth line");
    let depth: u32 = depth_line.split('=').nth(1).unwrap().trim().parse().unwrap();
    assert!(matches!(depth, 8 | 16 | 32));
    assert!(stdout.contains("max"));
}

#[test]
fn info_reports_any_supported_depth() {
    let stdout = run_ok(cli().args(["info", "--depth", "8"]));
    assert!(stdout.contains("depth       = 8"), "stdout:\n{stdout}");
    assert!(stdout.contains("max         = 255"), "stdout:\n{stdout}");
    assert!(stdout.contains("short_scale = 0.0078125"), "stdout:\n{stdout}");

    let stdout = run_ok(cli().args(["info", "--depth", "32"]));
    assert!(stdout.contains("max         = 4294967295"), "stdout:\n{stdout}");
    assert!(stdout.contains("byte_scale  = 16843009"), "stdout:\n{stdout}");
}

#[test]
fn info_rejects_unsupported_depth() {
    let out = cli()
        .args(["info", "--depth", "12"])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("8, 16 or 32"), "stderr:\n{stderr}");
}

#[test]
fn convert_rejects_unparseable_value() {
    let out = cli()
        .args(["convert", "--kind", "byte", "300"])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("bad input"), "stderr:\n{stderr}");
}

#[test]
fn convert_rejects_unknown_kind() {
    let out = cli()
        .args(["convert", "--kind", "float", "1"])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
}

#[test]
fn negative_values_saturate_to_zero() {
    let stdout = run_ok(cli().args(["convert", "--kind", "int", "-5", "-1"]));
    assert_eq!(lines(&stdout), vec!["0", "0"]);
}

#[test]
fn convert_file_rejects_odd_short_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("odd.raw");
    let output = dir.path().join("odd.q");
    std::fs::write(&input, [1u8, 2, 3]).unwrap();

    let out = cli()
        .args([
            "convert-file",
            "--in",
            input.to_str().unwrap(),
            "--out",
            output.to_str().unwrap(),
            "--kind",
            "short",
        ])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    assert!(!output.exists());
}

#[cfg(all(feature = "q16", not(feature = "q32"), not(feature = "hdri")))]
mod q16 {
    use super::*;

    #[test]
    fn convert_matches_known_values() {
        let cases: [(&str, &str, &str); 6] = [
            ("byte", "1", "257"),
            ("byte", "255", "65535"),
            ("short", "32767", "65534"),
            ("int", "100000", "65535"),
            ("long", "-5", "0"),
            ("double", "32767.6", "32768"),
        ];
        for (kind, input, expected) in cases {
            let stdout = run_ok(cli().args(["convert", "--kind", kind, input]));
            assert_eq!(lines(&stdout), vec![expected], "kind={kind} input={input}");
        }
    }

    #[test]
    fn scale_reverses_byte_conversion() {
        let stdout = run_ok(cli().args(["scale", "--to", "byte", "0", "257", "65535", "70000"]));
        assert_eq!(lines(&stdout), vec!["0", "1", "255", "255"]);

        let stdout = run_ok(cli().args(["scale", "--to", "short", "65534", "-3"]));
        assert_eq!(lines(&stdout), vec!["32767", "0"]);
    }

    #[test]
    fn convert_file_writes_little_endian_quantums() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("in.raw");
        let output = dir.path().join("out.q16");
        std::fs::write(&input, [0u8, 1, 128, 255]).unwrap();

        let stdout = run_ok(cli().args([
            "convert-file",
            "--in",
            input.to_str().unwrap(),
            "--out",
            output.to_str().unwrap(),
        ]));
        assert!(stdout.contains("samples = 4"), "stdout:\n{stdout}");
        assert!(stdout.contains("bytes   = 8"), "stdout:\n{stdout}");

        let written = std::fs::read(&output).unwrap();
        let qs: Vec<u16> = written
            .chunks_exact(2)
            .map(|c| u16::from_le_bytes([c[0], c[1]]))
            .collect();
        assert_eq!(qs, vec![0, 257, 32896, 65535]);

        let crc = crc32fast::hash(&written);
        assert!(stdout.contains(&format!("0x{crc:08X}")));
    }
}
