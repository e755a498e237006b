use ib_core::{Palette, Rgb};
use image::imageops::ColorMap;

/// Palette vue comme cible de quantification pour `image::imageops`.
///
/// Nearest entry is the minimum squared RGB distance; ties go to the lowest
/// index, so duplicated colors always resolve to their first occurrence.
///
/// # Example
/// ```
/// use ib_core::{Palette, Rgb};
/// use ib_quant::PaletteMap;
/// let palette = Palette::from_colors(vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// let map = PaletteMap::new(&palette);
/// assert_eq!(map.nearest(Rgb::new(200, 210, 190)), 1);
/// assert_eq!(map.nearest(Rgb::new(20, 5, 40)), 0);
/// ```
pub struct PaletteMap<'a> {
    colors: &'a [Rgb],
}

impl<'a> PaletteMap<'a> {
    #[must_use]
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            colors: palette.colors(),
        }
    }

    /// Index de l'entrée la plus proche de `color`.
    #[inline(always)]
    #[must_use]
    pub fn nearest(&self, color: Rgb) -> u8 {
        let mut best = 0usize;
        let mut best_dist = u32::MAX;
        for (i, &candidate) in self.colors.iter().enumerate() {
            let dist = color.distance_sq(candidate);
            if dist < best_dist {
                best = i;
                best_dist = dist;
                if dist == 0 {
                    break;
                }
            }
        }
        // Palette length is capped at 256, so every index fits.
        best as u8
    }
}

impl ColorMap for PaletteMap<'_> {
    type Color = image::Rgb<u8>;

    #[inline(always)]
    fn index_of(&self, color: &Self::Color) -> usize {
        usize::from(self.nearest(Rgb::from(color.0)))
    }

    fn lookup(&self, index: usize) -> Option<Self::Color> {
        self.colors.get(index).map(|c| image::Rgb(c.to_array()))
    }

    fn has_lookup(&self) -> bool {
        true
    }

    #[inline(always)]
    fn map_color(&self, color: &mut Self::Color) {
        let idx = usize::from(self.nearest(Rgb::from(color.0)));
        color.0 = self.colors[idx].to_array();
    }
}
