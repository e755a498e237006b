use std::path::PathBuf;

use clap::Parser;

/// img2board — convertit un plateau (et sa placemap) en default_board.dat et placemap.dat.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image du plateau.
    #[arg(default_value = "default_board.png")]
    pub board: PathBuf,

    /// Image de la placemap. Générée entièrement opaque si absente.
    #[arg(default_value = "placemap.png")]
    pub placemap: PathBuf,

    /// Fichier palette.conf, ou dossier le contenant.
    #[arg(short, long, default_value = "../../palette.conf")]
    pub palette: PathBuf,

    /// Dossier de sortie.
    #[arg(short, long, default_value = "./")]
    pub output: PathBuf,

    /// Tramer la conversion vers la palette (Floyd–Steinberg).
    #[arg(short, long, default_value_t = false)]
    pub dither: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_instance_layout() {
        let cli = Cli::try_parse_from(["img2board"]).unwrap();
        assert_eq!(cli.board, PathBuf::from("default_board.png"));
        assert_eq!(cli.placemap, PathBuf::from("placemap.png"));
        assert_eq!(cli.palette, PathBuf::from("../../palette.conf"));
        assert_eq!(cli.output, PathBuf::from("./"));
        assert!(!cli.dither);
    }

    #[test]
    fn short_flags_and_positionals() {
        let cli = Cli::try_parse_from([
            "img2board", "b.png", "p.png", "-p", "conf", "-o", "out", "-d",
        ])
        .unwrap();
        assert_eq!(cli.board, PathBuf::from("b.png"));
        assert_eq!(cli.placemap, PathBuf::from("p.png"));
        assert_eq!(cli.palette, PathBuf::from("conf"));
        assert_eq!(cli.output, PathBuf::from("out"));
        assert!(cli.dither);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
