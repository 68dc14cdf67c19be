#![deny(clippy::all)]

mod color;
pub mod error_codes;
pub mod telemetry;

pub use color::Colors;
pub use color::init as color_init;
pub use error_codes::ErrorCategory;
