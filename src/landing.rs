use anyhow::{Result, bail};
use image::{DynamicImage, ImageFormat, ImageReader, RgbImage};
use std::path::Path;

use crate::models::{LANDING_PATH, LandingSpec};

/// Allocate a bitmap with every pixel set to the fill color
pub fn render(spec: &LandingSpec) -> RgbImage {
    RgbImage::from_pixel(spec.width, spec.height, spec.fill_pixel())
}

/// Encode `img` as PNG and write it to `path`.
/// The parent directory must already exist.
pub fn write_png(img: &RgbImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| anyhow::anyhow!("Failed to save landing image to {}: {}", path.display(), e))
}

/// Render the landing bitmap and write it to `path`
pub fn generate(path: &Path) -> Result<RgbImage> {
    let img = render(&LandingSpec::new());
    write_png(&img, path)?;
    Ok(img)
}

/// Write the landing bitmap to its fixed location under the working directory
pub fn generate_landing() -> Result<()> {
    generate(Path::new(LANDING_PATH))?;
    Ok(())
}

/// Decode the PNG at `path` and check it against the landing spec
pub fn verify(path: &Path) -> Result<()> {
    let mut reader = ImageReader::open(path)?;
    reader.set_format(ImageFormat::Png);
    let decoded = reader
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode {}: {}", path.display(), e))?;

    let img = match decoded {
        DynamicImage::ImageRgb8(img) => img,
        other => bail!("{} is {:?}, expected 8-bit RGB", path.display(), other.color()),
    };

    let spec = LandingSpec::new();
    if !spec.matches(&img) {
        bail!(
            "{} does not match landing spec ({}x{}, fill {:?})",
            path.display(),
            spec.width,
            spec.height,
            spec.fill
        );
    }

    Ok(())
}
