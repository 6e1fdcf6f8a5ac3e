#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::{DynamicImage, ImageFormat, ImageReader, RgbImage};

/// Creates a temp working directory with `mobile/assets/` in place.
/// Returns the temp directory (keep alive) and the expected output path.
pub fn create_workspace() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    std::fs::create_dir_all(dir.path().join("mobile/assets"))
        .expect("Failed to create mobile/assets");
    let output = dir.path().join(landing_gen::LANDING_PATH);
    (dir, output)
}

/// Decodes a PNG file and returns it as 8-bit RGB, failing on any other color type
pub fn decode_rgb(path: &Path) -> RgbImage {
    let mut reader = ImageReader::open(path).expect("Failed to open image");
    reader.set_format(ImageFormat::Png);
    match reader.decode().expect("Failed to decode PNG") {
        DynamicImage::ImageRgb8(img) => img,
        other => panic!("expected Rgb8, got {:?}", other.color()),
    }
}

/// Runs the built binary with `cwd` as its working directory
pub fn run_binary(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_landing-gen"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("Failed to run landing-gen")
}
