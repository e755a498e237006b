use crate::error::CoreError;

/// Index réservé : cellule transparente, aucune entrée de palette.
pub const TRANSPARENT_INDEX: u8 = 255;

/// Buffer de pixels décodé, RGBA row-major, 4 bytes par pixel.
///
/// `has_alpha` records whether the source image carried an alpha channel.
/// Sources without one are expanded with alpha = 255.
///
/// # Example
/// ```
/// use ib_core::frame::Raster;
/// let r = Raster::opaque(3, 2);
/// assert_eq!(r.data.len(), 3 * 2 * 4);
/// assert_eq!(r.pixel(2, 1), (0, 0, 0, 255));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Whether the decoded source had an alpha channel.
    pub has_alpha: bool,
}

impl Raster {
    /// Wrap an RGBA buffer.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if `data` is not exactly
    /// `width * height * 4` bytes long.
    pub fn from_rgba(
        data: Vec<u8>,
        width: u32,
        height: u32,
        has_alpha: bool,
    ) -> Result<Self, CoreError> {
        if data.len() != pixel_count(width, height) * 4 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
            has_alpha,
        })
    }

    /// Placemap synthétique : noir, entièrement opaque.
    #[must_use]
    pub fn opaque(width: u32, height: u32) -> Self {
        let data = [0, 0, 0, 255].repeat(pixel_count(width, height));
        Self {
            data,
            width,
            height,
            has_alpha: true,
        }
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Row-major iterator over the alpha channel.
    pub fn alphas(&self) -> impl Iterator<Item = u8> + '_ {
        self.data.chunks_exact(4).map(|px| px[3])
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        pixel_count(self.width, self.height)
    }
}

/// Plateau quantifié : un index de palette par pixel, row-major.
///
/// Values are `< palette.len()` or [`TRANSPARENT_INDEX`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedBoard {
    /// Indices, row-major.
    pub indices: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

#[inline]
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_checks_length() {
        assert!(Raster::from_rgba(vec![0; 16], 2, 2, true).is_ok());
        assert_eq!(
            Raster::from_rgba(vec![0; 15], 2, 2, true),
            Err(CoreError::InvalidDimensions {
                width: 2,
                height: 2
            })
        );
    }

    #[test]
    fn opaque_raster_is_fully_opaque() {
        let r = Raster::opaque(4, 3);
        assert_eq!(r.pixel_count(), 12);
        assert!(r.alphas().all(|a| a == 255));
    }

    #[test]
    fn pixel_reads_row_major() {
        let data = vec![
            1, 2, 3, 4, // (0, 0)
            5, 6, 7, 8, // (1, 0)
            9, 10, 11, 12, // (0, 1)
            13, 14, 15, 16, // (1, 1)
        ];
        let r = Raster::from_rgba(data, 2, 2, true).unwrap();
        assert_eq!(r.pixel(1, 0), (5, 6, 7, 8));
        assert_eq!(r.pixel(0, 1), (9, 10, 11, 12));
        assert_eq!(r.alphas().collect::<Vec<_>>(), vec![4, 8, 12, 16]);
    }
}
