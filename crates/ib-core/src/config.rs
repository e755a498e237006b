use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::color::parse_hex;
use crate::error::CoreError;
use crate::palette::Palette;

/// Diagnostic affiché quand le fichier de palette n'existe pas.
pub const PALETTE_NOT_FOUND: &str = "Configuration de palette introuvable";

/// Nom de fichier cherché quand `--palette` désigne un dossier.
pub const PALETTE_FILE_NAME: &str = "palette.conf";

/// Dithering mode for palette quantization.
///
/// # Example
/// ```
/// use ib_core::config::DitherMode;
/// assert_eq!(DitherMode::default(), DitherMode::None);
/// assert_eq!(DitherMode::from_flag(true), DitherMode::FloydSteinberg);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DitherMode {
    /// Each pixel maps independently to its nearest palette entry.
    #[default]
    None,
    /// Floyd–Steinberg error diffusion, row-major.
    FloydSteinberg,
}

impl DitherMode {
    /// Map the boolean `--dither` switch to a mode.
    #[must_use]
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            Self::FloydSteinberg
        } else {
            Self::None
        }
    }
}

/// Une entrée de la liste `colors` du fichier de palette.
#[derive(Clone, Debug, Deserialize)]
pub struct PaletteEntry {
    /// Nom lisible, informatif.
    #[serde(default)]
    pub name: Option<String>,
    /// Couleur hexadécimale, `#` optionnel.
    pub value: String,
    /// Selectable in the game client. Unusable entries keep their index.
    #[serde(default = "default_true")]
    pub usable: bool,
}

#[must_use]
pub fn default_true() -> bool {
    true
}

/// Structure TOML du fichier de palette.
#[derive(Clone, Debug, Deserialize)]
pub struct PaletteFile {
    /// Couleurs, dans l'ordre des index.
    pub colors: Vec<PaletteEntry>,
}

impl PaletteFile {
    /// Validate every entry and build the palette.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidPaletteEntry`] for the first malformed
    /// entry, or a length error from [`Palette::from_colors`].
    pub fn into_palette(self) -> Result<Palette, CoreError> {
        let colors = self
            .colors
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                parse_hex(&entry.value).map_err(|_| CoreError::InvalidPaletteEntry {
                    index,
                    value: entry.value.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let unusable = self.colors.iter().filter(|e| !e.usable).count();
        if unusable > 0 {
            log::debug!("{unusable} couleur(s) marquée(s) non utilisable(s), index conservés");
        }

        Palette::from_colors(colors)
    }
}

/// Résout `--palette` : un dossier existant devient `dossier/palette.conf`,
/// tout autre chemin est retourné tel quel.
///
/// # Example
/// ```
/// use ib_core::config::resolve_palette_path;
/// use std::path::Path;
/// let p = resolve_palette_path(Path::new("does/not/exist.conf"));
/// assert_eq!(p, Path::new("does/not/exist.conf"));
/// ```
#[must_use]
pub fn resolve_palette_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(PALETTE_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

/// Parse le contenu d'un fichier de palette.
///
/// # Errors
/// Returns an error on invalid TOML, a missing `colors` list, a malformed hex
/// value, or a palette outside `1..=256` colors.
///
/// # Example
/// ```
/// use ib_core::config::parse_palette;
/// let palette = parse_palette(r#"
/// [[colors]]
/// name = "Red"
/// value = "ff0000"
///
/// [[colors]]
/// value = "00ff00"
/// "#).unwrap();
/// assert_eq!(palette.len(), 2);
/// ```
pub fn parse_palette(content: &str) -> Result<Palette> {
    let file: PaletteFile = toml::from_str(content).context("Erreur de parsing TOML")?;
    let palette = file.into_palette()?;
    if palette.collides_with_sentinel() {
        log::warn!(
            "La palette a 256 couleurs : l'index 255 est aussi l'index de transparence, \
             les deux deviennent indiscernables dans default_board.dat"
        );
    }
    Ok(palette)
}

/// Charge et valide un fichier de palette.
///
/// # Errors
/// Returns [`CoreError::FileNotFound`] if `path` does not exist, otherwise
/// any read or [`parse_palette`] error, with the path as context.
pub fn load_palette(path: &Path) -> Result<Palette> {
    if !path.exists() {
        return Err(anyhow::Error::new(CoreError::FileNotFound {
            path: path.display().to_string(),
        })
        .context(PALETTE_NOT_FOUND));
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let palette = parse_palette(&content)
        .with_context(|| format!("Palette invalide dans {}", path.display()))?;

    log::info!("Palette chargée : {} couleurs depuis {}", palette.len(), path.display());
    Ok(palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    const TWO_COLORS: &str = r##"
[[colors]]
name = "Red"
value = "ff0000"

[[colors]]
name = "Green"
value = "#00FF00"
usable = false
"##;

    #[test]
    fn parses_ordered_colors() {
        let palette = parse_palette(TWO_COLORS).unwrap();
        assert_eq!(
            palette.colors(),
            &[Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]
        );
    }

    #[test]
    fn accepts_inline_table_array() {
        let palette =
            parse_palette(r#"colors = [{ value = "000" }, { value = "fff" }, { value = "888888" }]"#)
                .unwrap();
        assert_eq!(palette.get(2), Some(Rgb::new(0x88, 0x88, 0x88)));
    }

    #[test]
    fn malformed_hex_is_typed_error() {
        let err = parse_palette("[[colors]]\nvalue = \"12345\"\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<CoreError>(),
            Some(&CoreError::InvalidPaletteEntry {
                index: 0,
                value: "12345".into()
            })
        );
    }

    #[test]
    fn malformed_entry_reports_its_position() {
        let err = parse_palette("[[colors]]\nvalue = \"ff0000\"\n\n[[colors]]\nvalue = \"zz\"\n")
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<CoreError>(),
            Some(&CoreError::InvalidPaletteEntry {
                index: 1,
                value: "zz".into()
            })
        );
        assert_eq!(err.to_string(), "Entrée de palette n°1 invalide : \"zz\"");
    }

    #[test]
    fn full_palette_is_accepted() {
        let content: String = (0..=255u8)
            .map(|v| format!("[[colors]]\nvalue = \"{v:02x}{v:02x}{v:02x}\"\n"))
            .collect();
        let palette = parse_palette(&content).unwrap();
        assert_eq!(palette.len(), 256);
        assert!(palette.collides_with_sentinel());
    }

    #[test]
    fn missing_colors_key_fails() {
        assert!(parse_palette("name = \"nothing\"\n").is_err());
    }

    #[test]
    fn empty_colors_list_fails() {
        let err = parse_palette("colors = []\n").unwrap_err();
        assert_eq!(err.downcast_ref::<CoreError>(), Some(&CoreError::EmptyPalette));
    }

    #[test]
    fn directory_resolves_to_palette_conf() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            resolve_palette_path(dir.path()),
            dir.path().join(PALETTE_FILE_NAME)
        );
        let file = dir.path().join("custom.toml");
        assert_eq!(resolve_palette_path(&file), file);
    }

    #[test]
    fn load_palette_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PALETTE_FILE_NAME);
        let err = load_palette(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::FileNotFound { .. })
        ));
        assert_eq!(err.to_string(), PALETTE_NOT_FOUND);
    }

    #[test]
    fn shipped_sample_palette_parses() {
        let palette = parse_palette(include_str!("../../../config/palette.conf")).unwrap();
        assert_eq!(palette.len(), 11);
        assert_eq!(palette.get(0), Some(Rgb::new(255, 255, 255)));
        assert_eq!(palette.get(10), Some(Rgb::new(0xff, 0x99, 0xaa)));
    }

    #[test]
    fn load_palette_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PALETTE_FILE_NAME);
        std::fs::write(&path, TWO_COLORS).unwrap();
        let palette = load_palette(&resolve_palette_path(dir.path())).unwrap();
        assert_eq!(palette.len(), 2);
    }
}
