use ib_core::{DitherMode, IndexedBoard, Palette, Raster, TRANSPARENT_INDEX};
use image::RgbImage;
use image::imageops::{dither, index_colors};

use crate::palette_map::PaletteMap;

/// Quantifie le plateau sur la palette.
///
/// Matching uses the RGB channels only. When the board has an alpha channel,
/// every pixel whose alpha is not exactly 255 is forced to
/// [`TRANSPARENT_INDEX`] after matching. With [`DitherMode::FloydSteinberg`]
/// the quantization error is diffused in row-major order before indexing.
///
/// # Example
/// ```
/// use ib_core::{DitherMode, Palette, Raster, Rgb};
/// use ib_quant::quantize;
/// let board = Raster::from_rgba(vec![255, 0, 0, 255, 0, 255, 0, 255], 2, 1, false).unwrap();
/// let palette = Palette::from_colors(vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]).unwrap();
/// let out = quantize(&board, &palette, DitherMode::None);
/// assert_eq!(out.indices, vec![0, 1]);
/// ```
#[must_use]
pub fn quantize(board: &Raster, palette: &Palette, mode: DitherMode) -> IndexedBoard {
    let map = PaletteMap::new(palette);

    let mut rgb = RgbImage::from_fn(board.width, board.height, |x, y| {
        let (r, g, b, _) = board.pixel(x, y);
        image::Rgb([r, g, b])
    });

    match mode {
        DitherMode::None => {}
        DitherMode::FloydSteinberg => {
            log::debug!("Tramage Floyd–Steinberg sur {} pixels", board.pixel_count());
            dither(&mut rgb, &map);
        }
    }

    let mut indices = index_colors(&rgb, &map).into_raw();

    if board.has_alpha {
        let mut transparent = 0usize;
        for (idx, alpha) in indices.iter_mut().zip(board.alphas()) {
            if alpha != u8::MAX {
                *idx = TRANSPARENT_INDEX;
                transparent += 1;
            }
        }
        log::debug!("{transparent} pixel(s) transparent(s)");
    }

    IndexedBoard {
        indices,
        width: board.width,
        height: board.height,
    }
}
