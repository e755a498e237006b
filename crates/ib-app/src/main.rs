use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod pipeline;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Résoudre les chemins
    let options = pipeline::ConvertOptions::from_cli(&cli)?;
    log::debug!("{options:?}");

    // 4. Convertir
    let summary = pipeline::run(&options)?;

    // Les .dat n'ont pas d'en-tête : les dimensions ne sont connues que d'ici.
    log::info!(
        "{}×{} pixels, {} couleurs → {} et {}",
        summary.width,
        summary.height,
        summary.palette_len,
        summary.outputs.board.display(),
        summary.outputs.placemap.display()
    );
    Ok(())
}
