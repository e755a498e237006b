/// Palette quantization engine for img2board.
///
/// Maps board pixels onto a fixed palette, with optional error diffusion.
pub mod palette_map;
pub mod quantize;

pub use palette_map::PaletteMap;
pub use quantize::quantize;
