//! End-to-end tests for the conversion pipeline and the binary.
//!
//! These tests verify:
//! - Oversized images are shrunk with the crossed fit scales
//! - The written raster is grayscale
//! - The text file holds the ASCII art, one line per row
//! - Wrong argument counts fail with "ERROR" and no file I/O
//! - Grayscale input is reported on stderr

use std::path::Path;
use std::process::Command;

use gray_ramp::config::Config;
use gray_ramp::image_io;
use gray_ramp::pipeline::{self, Paths, PipelineError};
use gray_ramp::PixelBuffer;
use tempfile::TempDir;

fn write_solid(path: &Path, width: u32, height: u32, rgb: [u8; 3]) {
    let buffer =
        PixelBuffer::from_raw(width, height, 3, rgb.repeat((width * height) as usize)).unwrap();
    image_io::write(&buffer, path).unwrap();
}

fn paths_in(dir: &TempDir, input: &str, image: &str, text: &str) -> Paths {
    Paths {
        input: dir.path().join(input),
        output_image: dir.path().join(image),
        output_text: dir.path().join(text),
    }
}

// ====================
// Library pipeline
// ====================

#[test]
fn test_white_100x100_end_to_end() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir, "white.png", "gray.png", "art.txt");
    write_solid(&paths.input, 100, 100, [255, 255, 255]);

    let conversion = pipeline::run(&paths, &Config::default()).unwrap();

    // width_scale = 50/100, height_scale = 80/100
    assert_eq!(conversion.source_size, (100, 100));
    assert_eq!(conversion.scales, Some((0.5, 0.8)));
    assert_eq!(conversion.output_size, (50, 80));
    assert_eq!(conversion.channels, 3);

    let gray = image_io::load(&paths.output_image).unwrap();
    assert_eq!((gray.width(), gray.height()), (50, 80));
    assert!(gray.as_bytes().iter().all(|&b| b == 84));

    let text = std::fs::read_to_string(&paths.output_text).unwrap();
    assert_eq!(text, conversion.ascii);
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), 80);
    for line in lines {
        assert_eq!(line, "X".repeat(50));
    }
}

#[test]
fn test_small_image_not_resized() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir, "black.bmp", "gray.bmp", "art.txt");
    write_solid(&paths.input, 80, 50, [0, 0, 0]);

    let conversion = pipeline::run(&paths, &Config::default()).unwrap();
    assert_eq!(conversion.scales, None);
    assert_eq!(conversion.output_size, (80, 50));

    let text = std::fs::read_to_string(&paths.output_text).unwrap();
    assert_eq!(text.lines().count(), 50);
    assert!(text.lines().all(|l| l == " ".repeat(80)));

    let bytes = std::fs::read(&paths.output_image).unwrap();
    assert_eq!(&bytes[..2], b"BM");
}

#[test]
fn test_wide_image_only_width_scaled() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir, "wide.png", "gray.jpg", "art.txt");
    write_solid(&paths.input, 160, 25, [255, 0, 0]);

    // Only the width is over: width_scale = 50/25 = 2.0, so it grows
    let conversion = pipeline::run(&paths, &Config::default()).unwrap();
    assert_eq!(conversion.scales, Some((2.0, 1.0)));
    assert_eq!(conversion.output_size, (320, 25));

    let jpg = std::fs::read(&paths.output_image).unwrap();
    assert_eq!(&jpg[..2], &[0xFF, 0xD8]);
}

#[test]
fn test_grayscale_input_gives_empty_text() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir, "luma.png", "gray.png", "art.txt");
    let luma = PixelBuffer::from_raw(4, 4, 1, vec![128; 16]).unwrap();
    image_io::write(&luma, &paths.input).unwrap();

    let conversion = pipeline::run(&paths, &Config::default()).unwrap();
    assert_eq!(conversion.channels, 1);
    assert_eq!(conversion.ascii, "");
    assert_eq!(std::fs::read_to_string(&paths.output_text).unwrap(), "");

    // Single-channel data passes through unchanged
    let gray = image_io::load(&paths.output_image).unwrap();
    assert_eq!(gray, luma);
}

#[test]
fn test_text_file_is_truncated() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir, "in.png", "out.png", "art.txt");
    write_solid(&paths.input, 2, 2, [0, 0, 0]);
    std::fs::write(&paths.output_text, "stale content that is much longer").unwrap();

    pipeline::run(&paths, &Config::default()).unwrap();
    assert_eq!(std::fs::read_to_string(&paths.output_text).unwrap(), "  \n  ");
}

#[test]
fn test_custom_config() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir, "in.png", "out.png", "art.txt");
    write_solid(&paths.input, 20, 10, [255, 255, 255]);

    let config = Config {
        max_width: 10,
        max_height: 5,
        ramp: ".#".to_string(),
        ..Config::default()
    };
    let conversion = pipeline::run(&paths, &config).unwrap();
    // width_scale = 5/10, height_scale = 10/20
    assert_eq!(conversion.scales, Some((0.5, 0.5)));
    assert_eq!(conversion.output_size, (10, 5));
    assert_eq!(conversion.ascii, vec!["#".repeat(10); 5].join("\n"));
}

#[test]
fn test_invalid_config_rejected_before_io() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir, "in.png", "out.png", "art.txt");
    write_solid(&paths.input, 2, 2, [255, 255, 255]);

    let config = Config {
        ramp: String::new(),
        ..Config::default()
    };
    let result = pipeline::run(&paths, &config);
    assert!(matches!(result, Err(PipelineError::Config(_))));
    assert!(!paths.output_image.exists());
    assert!(!paths.output_text.exists());
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir, "missing.png", "out.png", "art.txt");

    let result = pipeline::run(&paths, &Config::default());
    assert!(matches!(result, Err(PipelineError::Decode(_))));
    assert!(!paths.output_image.exists());
    assert!(!paths.output_text.exists());
}

#[test]
fn test_raster_failure_still_writes_text() {
    let dir = TempDir::new().unwrap();
    let mut paths = paths_in(&dir, "in.png", "unused.png", "art.txt");
    paths.output_image = dir.path().join("no-such-dir").join("out.png");
    write_solid(&paths.input, 3, 1, [255, 255, 255]);

    let result = pipeline::run(&paths, &Config::default());
    assert!(matches!(result, Err(PipelineError::Encode(_))));
    assert_eq!(std::fs::read_to_string(&paths.output_text).unwrap(), "XXX");
}

#[test]
fn test_convert_wrapper() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.png");
    write_solid(&input, 1, 1, [0, 0, 0]);

    let conversion = pipeline::convert(
        &input,
        &dir.path().join("out.png"),
        &dir.path().join("art.txt"),
    )
    .unwrap();
    assert_eq!(conversion.ascii, " ");
}

// ====================
// Binary
// ====================

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gray-ramp"))
}

#[test]
fn test_binary_wrong_arity_prints_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.png");
    let out = dir.path().join("out.png");

    for args in [vec![], vec![&input], vec![&input, &out]] {
        let output = binary().current_dir(dir.path()).args(&args).output().unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout), "ERROR");
        assert!(!output.status.success());
        #[cfg(unix)]
        assert_eq!(output.status.code(), Some(255));
    }

    let text = dir.path().join("art.txt");
    let extra = dir.path().join("extra.txt");
    let output = binary()
        .args([&input, &out, &text, &extra])
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout), "ERROR");
    assert!(!output.status.success());

    // Nothing was created
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_binary_converts() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.png");
    let out = dir.path().join("out.bmp");
    let text = dir.path().join("art.txt");
    write_solid(&input, 100, 100, [0, 0, 0]);

    let output = binary().args([&input, &out, &text]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Read "), "{}", stdout);
    assert!(stdout.contains("Width scale to height scale = 0.5:0.8"), "{}", stdout);

    let art = std::fs::read_to_string(&text).unwrap();
    assert_eq!(art.lines().count(), 80);
    assert!(out.exists());
}

#[test]
fn test_binary_warns_on_grayscale_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("luma.png");
    let out = dir.path().join("out.png");
    let text = dir.path().join("art.txt");
    let luma = PixelBuffer::from_raw(4, 4, 1, vec![200; 16]).unwrap();
    image_io::write(&luma, &input).unwrap();

    // No RUST_LOG: the notice must show with the default filter
    let output = binary()
        .env_remove("RUST_LOG")
        .args([&input, &out, &text])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already grayscale"), "{}", stderr);
    assert_eq!(std::fs::read_to_string(&text).unwrap(), "");
}

#[test]
fn test_binary_double_dash_is_a_path() {
    let dir = TempDir::new().unwrap();
    write_solid(&dir.path().join("--"), 2, 1, [0, 0, 0]);

    let output = binary()
        .current_dir(dir.path())
        .args(["--", "out.png", "art.txt"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stdout));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("art.txt")).unwrap(),
        "  "
    );
}

#[test]
fn test_binary_decode_failure_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.png");
    let out = dir.path().join("out.png");
    let text = dir.path().join("art.txt");

    let output = binary().args([&input, &out, &text]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(!out.exists());
    assert!(!text.exists());
}
