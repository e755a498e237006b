use crate::color::Rgb;
use crate::error::CoreError;
use crate::frame::TRANSPARENT_INDEX;

/// Nombre maximal de couleurs adressables par un index sur un octet.
pub const MAX_COLORS: usize = 256;

/// Palette ordonnée de couleurs de référence. L'ordre définit l'index écrit
/// dans `default_board.dat`.
///
/// Immuable une fois construite ; la longueur est toujours dans `1..=256`.
///
/// # Example
/// ```
/// use ib_core::{Palette, Rgb};
/// let palette = Palette::from_colors(vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.get(1), Some(Rgb::new(0, 255, 0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Build a palette from an ordered color list.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyPalette`] for an empty list and
    /// [`CoreError::PaletteTooLarge`] past 256 colors.
    pub fn from_colors(colors: Vec<Rgb>) -> Result<Self, CoreError> {
        if colors.is_empty() {
            return Err(CoreError::EmptyPalette);
        }
        if colors.len() > MAX_COLORS {
            return Err(CoreError::PaletteTooLarge { len: colors.len() });
        }
        Ok(Self { colors })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false` for a constructed palette; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    #[must_use]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// `true` when the last palette index is the transparency sentinel, so a
    /// genuine match on that color cannot be told apart from a transparent cell.
    ///
    /// # Example
    /// ```
    /// use ib_core::{Palette, Rgb};
    /// let full = Palette::from_colors(vec![Rgb::default(); 256]).unwrap();
    /// assert!(full.collides_with_sentinel());
    /// let small = Palette::from_colors(vec![Rgb::default(); 255]).unwrap();
    /// assert!(!small.collides_with_sentinel());
    /// ```
    #[must_use]
    pub fn collides_with_sentinel(&self) -> bool {
        self.colors.len() > usize::from(TRANSPARENT_INDEX)
    }
}
