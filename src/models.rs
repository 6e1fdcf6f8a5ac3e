use image::{Rgb, RgbImage};

pub const LANDING_WIDTH: u32 = 800;
pub const LANDING_HEIGHT: u32 = 1200;

/// Teal
pub const LANDING_FILL: [u8; 3] = [0, 128, 128];

/// Output location, relative to the working directory
pub const LANDING_PATH: &str = "mobile/assets/landing.png";

/// Line printed on stdout after a successful write
pub const CONFIRMATION: &str = "Created simple landing.png";

/// Dimensions and fill color of a solid-color bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingSpec {
    pub width: u32,
    pub height: u32,
    pub fill: [u8; 3],
}

impl LandingSpec {
    pub fn new() -> Self {
        Self {
            width: LANDING_WIDTH,
            height: LANDING_HEIGHT,
            fill: LANDING_FILL,
        }
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn fill_pixel(&self) -> Rgb<u8> {
        Rgb(self.fill)
    }

    /// True if `img` has these dimensions and every pixel is the fill color
    pub fn matches(&self, img: &RgbImage) -> bool {
        if img.dimensions() != (self.width, self.height) {
            return false;
        }

        let fill = self.fill_pixel();
        img.pixels().all(|p| *p == fill)
    }
}

impl Default for LandingSpec {
    fn default() -> Self {
        Self::new()
    }
}
