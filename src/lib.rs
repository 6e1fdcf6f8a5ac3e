pub mod landing;
pub mod models;

pub use landing::{generate, generate_landing, render, verify, write_png};
pub use models::{
    CONFIRMATION, LANDING_FILL, LANDING_HEIGHT, LANDING_PATH, LANDING_WIDTH, LandingSpec,
};
