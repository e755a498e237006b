use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Referenced file does not exist.
    #[error("Fichier introuvable : {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// A palette entry is not a 3- or 6-digit hex color.
    #[error("Couleur hexadécimale invalide : {value:?}")]
    InvalidHex {
        /// The offending string, as written in the configuration.
        value: String,
    },

    /// A palette file entry holds a malformed color.
    #[error("Entrée de palette n°{index} invalide : {value:?}")]
    InvalidPaletteEntry {
        /// Zero-based position in the `colors` list.
        index: usize,
        /// The offending string, as written in the configuration.
        value: String,
    },

    /// The palette has no colors.
    #[error("La palette ne contient aucune couleur")]
    EmptyPalette,

    /// The palette does not fit a single-byte index.
    #[error("Palette trop grande : {len} couleurs (maximum 256)")]
    PaletteTooLarge {
        /// Number of colors found.
        len: usize,
    },

    /// Board and placemap sizes differ.
    #[error("Dimensions incohérentes : plateau {board_width}×{board_height}, placemap {placemap_width}×{placemap_height}")]
    DimensionMismatch {
        /// Board width.
        board_width: u32,
        /// Board height.
        board_height: u32,
        /// Placemap width.
        placemap_width: u32,
        /// Placemap height.
        placemap_height: u32,
    },

    /// Pixel buffer length does not match width/height.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}
