use std::path::Path;

use anyhow::{Context, Result};
use ib_core::{CoreError, Raster};

/// Charge une image (PNG, JPEG, BMP, GIF) en buffer RGBA.
///
/// Records whether the decoded image had an alpha channel; images without
/// one come back with alpha = 255 everywhere.
///
/// # Errors
/// Returns an error if the file is missing or cannot be decoded.
///
/// # Example
/// ```no_run
/// use ib_source::load_raster;
/// use std::path::Path;
/// let board = load_raster(Path::new("default_board.png")).unwrap();
/// ```
pub fn load_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path)
        .with_context(|| format!("Impossible de charger {}", path.display()))?;
    let has_alpha = img.color().has_alpha();
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!(
        "{} : {width}×{height}, alpha={has_alpha}",
        path.display()
    );
    Ok(Raster::from_rgba(rgba.into_raw(), width, height, has_alpha)?)
}

/// Charge la placemap, ou en génère une entièrement opaque aux dimensions du
/// plateau si `path` ne désigne pas un fichier existant.
///
/// # Errors
/// Returns an error if the placemap exists but cannot be decoded, or if its
/// dimensions differ from the board's.
pub fn resolve_placemap(path: &Path, board: &Raster) -> Result<Raster> {
    if !path.is_file() {
        log::warn!(
            "Placemap introuvable : {}. Utilisation d'une placemap générée.",
            path.display()
        );
        return Ok(Raster::opaque(board.width, board.height));
    }

    let placemap = load_raster(path)?;
    ensure_same_dimensions(board, &placemap)
        .with_context(|| format!("Placemap {} inutilisable", path.display()))?;
    Ok(placemap)
}

/// Vérifie que plateau et placemap ont la même taille.
///
/// # Errors
/// Returns [`CoreError::DimensionMismatch`] otherwise.
pub fn ensure_same_dimensions(board: &Raster, placemap: &Raster) -> Result<(), CoreError> {
    if board.dimensions() == placemap.dimensions() {
        Ok(())
    } else {
        Err(CoreError::DimensionMismatch {
            board_width: board.width,
            board_height: board.height,
            placemap_width: placemap.width,
            placemap_height: placemap.height,
        })
    }
}
