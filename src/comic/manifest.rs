// SPDX-License-Identifier: MPL-2.0
//! TOML comic manifest.
//!
//! ```toml
//! title = "The Fall of Rome"
//! final_comic = "The_Fall_of_Rome_complete_comic.png"
//!
//! [[panels]]
//! image = "The_Fall_of_Rome_panel_01.png"
//! scene_description = "Senators argue on the steps of the Curia."
//! dialogue = ["Cato: Carthage must be destroyed!"]
//! narration = "Rome, 150 BC."
//! ```
//!
//! Relative paths are resolved against the manifest's directory. A panel
//! without `panel_number` is numbered by its position; an explicit number
//! must be positive.

use super::{Comic, PanelRecord};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    title: String,
    final_comic: PathBuf,
    #[serde(default)]
    panels: Vec<ManifestPanel>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestPanel {
    #[serde(default)]
    panel_number: Option<NonZeroU32>,
    image: PathBuf,
    scene_description: String,
    #[serde(default)]
    dialogue: Vec<String>,
    #[serde(default)]
    narration: Option<String>,
}

/// Reads and parses a manifest file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, [`Error::Manifest`] if
/// it is not a valid manifest, and [`Error::EmptyComic`] if it lists no
/// panels.
pub fn load(path: &Path) -> Result<Comic> {
    let content = fs::read_to_string(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    parse(&content, base)
}

/// Parses manifest text, resolving relative paths against `base`.
///
/// # Errors
///
/// See [`load`].
pub fn parse(content: &str, base: &Path) -> Result<Comic> {
    let file: ManifestFile =
        toml::from_str(content).map_err(|err| Error::Manifest(err.message().to_string()))?;

    if file.panels.is_empty() {
        return Err(Error::EmptyComic);
    }

    let panels = file
        .panels
        .into_iter()
        .zip(1u32..)
        .map(|(panel, position)| PanelRecord {
            panel_number: panel.panel_number.map_or(position, NonZeroU32::get),
            image: base.join(panel.image),
            scene_description: panel.scene_description,
            dialogue: panel.dialogue,
            narration: panel.narration.filter(|text| !text.trim().is_empty()),
            image_available: false,
        })
        .collect();

    Ok(Comic::new(file.title, panels, base.join(file.final_comic)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"
title = "Harbor"
final_comic = "full.png"

[[panels]]
image = "one.png"
scene_description = "Boats at dawn."
dialogue = ["A: ahoy", "B: ahoy yourself"]
narration = "Lisbon, 1498."

[[panels]]
panel_number = 9
image = "/abs/two.png"
scene_description = "Open sea."
"#;

    #[test]
    fn parses_panels_relative_to_base() {
        let comic = parse(MANIFEST, Path::new("out")).expect("manifest parses");
        assert_eq!(comic.title, "Harbor");
        assert_eq!(comic.final_comic, PathBuf::from("out/full.png"));
        assert_eq!(comic.panels[0].image, PathBuf::from("out/one.png"));
        assert_eq!(comic.panels[0].dialogue.len(), 2);
        assert_eq!(comic.panels[0].narration.as_deref(), Some("Lisbon, 1498."));
    }

    #[test]
    fn absolute_paths_are_kept() {
        let comic = parse(MANIFEST, Path::new("out")).expect("manifest parses");
        assert_eq!(comic.panels[1].image, PathBuf::from("/abs/two.png"));
    }

    #[test]
    fn panel_number_defaults_to_position() {
        let comic = parse(MANIFEST, Path::new("out")).expect("manifest parses");
        assert_eq!(comic.panels[0].panel_number, 1);
        assert_eq!(comic.panels[1].panel_number, 9);
        assert!(comic.panels[1].dialogue.is_empty());
        assert_eq!(comic.panels[1].narration, None);
    }

    #[test]
    fn panel_number_zero_is_manifest_error() {
        let manifest = "title = \"t\"\nfinal_comic = \"f.png\"\n\n[[panels]]\npanel_number = 0\nimage = \"a.png\"\nscene_description = \"s\"\n";
        let err = parse(manifest, Path::new(".")).expect_err("zero panel number");
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn zero_panels_is_empty_comic() {
        let err = parse("title = \"t\"\nfinal_comic = \"f.png\"\n", Path::new("."))
            .expect_err("no panels");
        assert!(matches!(err, Error::EmptyComic));
    }

    #[test]
    fn missing_field_is_manifest_error() {
        let err = parse("title = \"t\"\n", Path::new(".")).expect_err("no final_comic");
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn unknown_field_is_manifest_error() {
        let err = parse(
            "title = \"t\"\nfinal_comic = \"f.png\"\ncolour = \"red\"\n",
            Path::new("."),
        )
        .expect_err("unknown field");
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("comic.toml");
        fs::write(&path, MANIFEST).expect("write manifest");

        let comic = load(&path).expect("manifest loads");
        assert_eq!(comic.panels[0].image, dir.path().join("one.png"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let err = load(&dir.path().join("absent.toml")).expect_err("missing file");
        assert!(matches!(err, Error::Io(_)));
    }
}
