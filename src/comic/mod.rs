// SPDX-License-Identifier: MPL-2.0
//! Comic data handed to the slideshow, and the loaders that produce it.
//!
//! A comic can be opened from three kinds of sources:
//!
//! - a `comic.toml` manifest (see [`manifest`]),
//! - a generator script `.txt` file, whose images are looked up next to it
//!   (see [`script`]),
//! - an output directory holding either of the above.

pub mod manifest;
pub mod naming;
pub mod script;

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up first when a directory is opened.
pub const MANIFEST_FILE: &str = "comic.toml";

/// One panel of a generated comic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRecord {
    /// Display number, 1-based. Shown in the panel counter.
    pub panel_number: u32,
    pub image: PathBuf,
    pub scene_description: String,
    /// Dialogue lines in reading order. May be empty.
    pub dialogue: Vec<String>,
    pub narration: Option<String>,
    /// Whether `image` was found on disk when the comic was loaded.
    pub image_available: bool,
}

impl PanelRecord {
    #[must_use]
    pub fn new(
        panel_number: u32,
        image: impl Into<PathBuf>,
        scene_description: impl Into<String>,
    ) -> Self {
        Self {
            panel_number,
            image: image.into(),
            scene_description: scene_description.into(),
            dialogue: Vec::new(),
            narration: None,
            image_available: false,
        }
    }

    #[must_use]
    pub fn with_dialogue(mut self, dialogue: Vec<String>) -> Self {
        self.dialogue = dialogue;
        self
    }

    #[must_use]
    pub fn with_narration(mut self, narration: impl Into<String>) -> Self {
        self.narration = Some(narration.into());
        self
    }
}

/// A loaded comic: its panels plus the assembled full-page image.
///
/// Image availability flags start out `false` and are filled in by
/// [`Comic::locate_images`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comic {
    pub title: String,
    pub panels: Vec<PanelRecord>,
    pub final_comic: PathBuf,
    pub final_comic_available: bool,
}

impl Comic {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        panels: Vec<PanelRecord>,
        final_comic: impl Into<PathBuf>,
    ) -> Self {
        Self {
            title: title.into(),
            panels,
            final_comic: final_comic.into(),
            final_comic_available: false,
        }
    }

    /// Records which images exist on disk right now.
    pub fn locate_images(&mut self) {
        for panel in &mut self.panels {
            panel.image_available = panel.image.is_file();
        }
        self.final_comic_available = self.final_comic.is_file();
    }

    /// Panel images and the final comic not found by the last
    /// [`Comic::locate_images`].
    #[must_use]
    pub fn missing_images(&self) -> Vec<&Path> {
        self.panels
            .iter()
            .map(|panel| (panel.image.as_path(), panel.image_available))
            .chain(std::iter::once((
                self.final_comic.as_path(),
                self.final_comic_available,
            )))
            .filter(|(_, available)| !available)
            .map(|(path, _)| path)
            .collect()
    }
}

/// Loads a comic from a manifest, a script, or an output directory.
///
/// Missing images are logged but not fatal; the surface shows a placeholder
/// for them.
///
/// # Errors
///
/// Returns an error if the source cannot be read or parsed, holds no panels,
/// or is none of the supported kinds.
pub fn load(path: &Path) -> Result<Comic> {
    let mut comic = if path.is_dir() {
        load_dir(path)?
    } else {
        load_file(path)?
    };

    if comic.panels.is_empty() {
        return Err(Error::EmptyComic);
    }

    comic.locate_images();
    for missing in comic.missing_images() {
        tracing::warn!(path = %missing.display(), "comic image not found");
    }
    tracing::info!(
        title = %comic.title,
        panels = comic.panels.len(),
        source = %path.display(),
        "comic loaded"
    );
    Ok(comic)
}

fn load_file(path: &Path) -> Result<Comic> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("toml") => manifest::load(path),
        Some("txt") => {
            let text = fs::read_to_string(path)?;
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            Ok(script::parse(&text)?.into_comic(dir))
        }
        _ => Err(Error::UnsupportedSource(path.to_path_buf())),
    }
}

fn load_dir(dir: &Path) -> Result<Comic> {
    let manifest_path = dir.join(MANIFEST_FILE);
    if manifest_path.is_file() {
        return manifest::load(&manifest_path);
    }

    let mut scripts: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
        })
        .collect();

    match scripts.len() {
        1 => load_file(&scripts.remove(0)),
        0 => Err(Error::UnsupportedSource(dir.to_path_buf())),
        count => {
            tracing::warn!(dir = %dir.display(), count, "several scripts found; cannot pick one");
            Err(Error::UnsupportedSource(dir.to_path_buf()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SCRIPT: &str = "TITLE: Harbor\nPANEL 1:\nSCENE: Boats.\nDIALOGUE: A: ahoy\n";

    #[test]
    fn builders_fill_optional_fields() {
        let panel = PanelRecord::new(2, "p.png", "scene")
            .with_dialogue(vec!["line".into()])
            .with_narration("caption");
        assert_eq!(panel.panel_number, 2);
        assert_eq!(panel.dialogue, vec!["line"]);
        assert_eq!(panel.narration.as_deref(), Some("caption"));
    }

    #[test]
    fn loads_script_file_with_sibling_images() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("script.txt");
        fs::write(&path, SCRIPT).expect("write script");

        let comic = load(&path).expect("script loads");
        assert_eq!(comic.title, "Harbor");
        assert_eq!(comic.panels[0].image, dir.path().join("Harbor_panel_01.png"));
    }

    #[test]
    fn directory_prefers_manifest() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("script.txt"), SCRIPT).expect("write script");
        fs::write(
            dir.path().join(MANIFEST_FILE),
            "title = \"From Manifest\"\nfinal_comic = \"full.png\"\n\n[[panels]]\nimage = \"a.png\"\nscene_description = \"s\"\n",
        )
        .expect("write manifest");

        let comic = load(dir.path()).expect("directory loads");
        assert_eq!(comic.title, "From Manifest");
    }

    #[test]
    fn directory_falls_back_to_single_script() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("story.TXT"), SCRIPT).expect("write script");

        let comic = load(dir.path()).expect("directory loads");
        assert_eq!(comic.title, "Harbor");
    }

    #[test]
    fn directory_with_two_scripts_is_unsupported() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("a.txt"), SCRIPT).expect("write a");
        fs::write(dir.path().join("b.txt"), SCRIPT).expect("write b");

        let err = load(dir.path()).expect_err("ambiguous directory");
        assert!(matches!(err, Error::UnsupportedSource(_)));
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("comic.png");
        fs::write(&path, b"").expect("write file");

        assert!(matches!(load(&path), Err(Error::UnsupportedSource(_))));
    }

    #[test]
    fn missing_images_lists_absent_files() {
        let dir = tempdir().expect("temp dir");
        let present = dir.path().join("present.png");
        fs::write(&present, b"png").expect("write image");

        let mut comic = Comic::new(
            "t",
            vec![
                PanelRecord::new(1, &present, "a"),
                PanelRecord::new(2, dir.path().join("absent.png"), "b"),
            ],
            dir.path().join("full.png"),
        );
        comic.locate_images();

        let missing = comic.missing_images();
        assert_eq!(missing.len(), 2);
        assert!(missing.iter().all(|path| *path != present.as_path()));
        assert!(comic.panels[0].image_available);
        assert!(!comic.panels[1].image_available);
        assert!(!comic.final_comic_available);
    }

    #[test]
    fn availability_is_fixed_at_load_time() {
        let dir = tempdir().expect("temp dir");
        let script = dir.path().join("script.txt");
        fs::write(&script, SCRIPT).expect("write script");
        let image = dir.path().join("Harbor_panel_01.png");
        fs::write(&image, b"png").expect("write image");

        let comic = load(&script).expect("script loads");
        assert!(comic.panels[0].image_available);

        fs::remove_file(&image).expect("remove image");
        assert!(comic.panels[0].image_available);
        assert_eq!(comic.missing_images(), vec![comic.final_comic.as_path()]);
    }
}
