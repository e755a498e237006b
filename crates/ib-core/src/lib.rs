/// Palette, raster and configuration types shared across the img2board workspace.
///
/// This crate holds everything the loader, quantizer and serializer agree on:
/// colors, the palette file format, pixel buffers and the typed error.

pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod palette;

pub use color::Rgb;
pub use config::DitherMode;
pub use error::CoreError;
pub use frame::{IndexedBoard, Raster, TRANSPARENT_INDEX};
pub use palette::Palette;
