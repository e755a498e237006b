/// Image sources for img2board: board and placemap loading.

pub mod image;

pub use self::image::{ensure_same_dimensions, load_raster, resolve_placemap};
