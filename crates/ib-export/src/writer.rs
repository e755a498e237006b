use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ib_core::{IndexedBoard, Raster};

/// Plateau quantifié, un index de palette par octet.
pub const BOARD_FILE_NAME: &str = "default_board.dat";

/// Masque de placement, 0 ou 255 par octet.
pub const PLACEMAP_FILE_NAME: &str = "placemap.dat";

/// Chemins des fichiers écrits par [`write_outputs`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub board: PathBuf,
    pub placemap: PathBuf,
}

/// Réduit l'alpha de la placemap à un octet binaire par pixel, row-major :
/// 255 si alpha vaut exactement 255, 0 sinon.
///
/// # Example
/// ```
/// use ib_core::Raster;
/// use ib_export::placement_mask;
/// let placemap = Raster::from_rgba(vec![0, 0, 0, 255, 0, 0, 0, 254], 2, 1, true).unwrap();
/// assert_eq!(placement_mask(&placemap), vec![255, 0]);
/// ```
#[must_use]
pub fn placement_mask(placemap: &Raster) -> Vec<u8> {
    placemap
        .alphas()
        .map(|a| if a == u8::MAX { u8::MAX } else { 0 })
        .collect()
}

/// Écrit `default_board.dat` dans `dir`, en écrasant tout fichier existant.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_board(dir: &Path, board: &IndexedBoard) -> Result<PathBuf> {
    let path = dir.join(BOARD_FILE_NAME);
    write_bytes(&path, &board.indices)?;
    Ok(path)
}

/// Écrit `placemap.dat` dans `dir`, en écrasant tout fichier existant.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_placemap(dir: &Path, placemap: &Raster) -> Result<PathBuf> {
    let path = dir.join(PLACEMAP_FILE_NAME);
    write_bytes(&path, &placement_mask(placemap))?;
    Ok(path)
}

/// Écrit les deux sorties.
///
/// # Errors
/// Returns the first I/O error encountered.
pub fn write_outputs(dir: &Path, board: &IndexedBoard, placemap: &Raster) -> Result<OutputPaths> {
    Ok(OutputPaths {
        board: write_board(dir, board)?,
        placemap: write_placemap(dir, placemap)?,
    })
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Impossible de créer {}", path.display()))?;
    let mut out = BufWriter::new(file);
    out.write_all(bytes)
        .and_then(|()| out.flush())
        .with_context(|| format!("Erreur d'écriture dans {}", path.display()))?;
    log::debug!("{} : {} octets écrits", path.display(), bytes.len());
    Ok(())
}
