use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ib_core::config::{load_palette, resolve_palette_path};
use ib_core::DitherMode;
use ib_export::OutputPaths;

use crate::cli::Cli;

/// Paramètres d'une conversion, chemins déjà absolus.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    pub board: PathBuf,
    pub placemap: PathBuf,
    pub palette: PathBuf,
    pub output: PathBuf,
    pub dither: DitherMode,
}

impl ConvertOptions {
    /// Build options from parsed arguments, resolving every path to an
    /// absolute one and `--palette` directories to their `palette.conf`.
    ///
    /// # Errors
    /// Returns an error if the working directory cannot be determined.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            board: absolute(&cli.board)?,
            placemap: absolute(&cli.placemap)?,
            palette: resolve_palette_path(&absolute(&cli.palette)?),
            output: absolute(&cli.output)?,
            dither: DitherMode::from_flag(cli.dither),
        })
    }
}

/// Résumé d'une conversion réussie.
#[derive(Clone, Debug)]
pub struct ConvertSummary {
    pub width: u32,
    pub height: u32,
    pub palette_len: usize,
    pub outputs: OutputPaths,
}

/// Palette → images → quantification → écriture.
///
/// # Errors
/// Returns an error if the palette is missing or invalid, the board cannot be
/// decoded, the placemap does not match the board, or an output cannot be
/// written.
pub fn run(options: &ConvertOptions) -> Result<ConvertSummary> {
    let palette = load_palette(&options.palette)?;

    let board = ib_source::load_raster(&options.board)?;
    let placemap = ib_source::resolve_placemap(&options.placemap, &board)?;
    log::info!(
        "Plateau {}×{} ({})",
        board.width,
        board.height,
        options.board.display()
    );

    let indexed = ib_quant::quantize(&board, &palette, options.dither);
    let outputs = ib_export::write_outputs(&options.output, &indexed, &placemap)?;

    Ok(ConvertSummary {
        width: board.width,
        height: board.height,
        palette_len: palette.len(),
        outputs,
    })
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("Chemin invalide : {}", path.display()))
}
