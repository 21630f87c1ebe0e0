// SPDX-License-Identifier: MPL-2.0
use panel_reel::comic::{self, naming};
use panel_reel::error::Error;
use panel_reel::slideshow::{Navigator, Timing};
use std::fs;
use tempfile::tempdir;

const SCRIPT: &str = "\
TITLE: Night Market

PANEL 1:
SCENE: Lanterns sway over crowded stalls.
DIALOGUE:
Vendor: Fresh dumplings!
Mei: Two, please.
NARRATION: Taipei, midnight.

PANEL 2:
SCENE: Mei bites into a dumpling.
DIALOGUE: [none]
";

#[test]
fn generator_output_directory_opens_as_slideshow() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("night_market.txt"), SCRIPT).expect("write script");
    for number in 1..=2 {
        fs::write(dir.path().join(naming::panel_image_name("Night Market", number)), b"png")
            .expect("write panel image");
    }

    let comic = comic::load(dir.path()).expect("comic loads");
    assert_eq!(comic.title, "Night Market");
    assert!(comic.missing_images().is_empty());
    assert_eq!(
        comic.final_comic,
        dir.path().join("Night_Market_complete_comic.png")
    );

    let first = &comic.panels[0];
    assert_eq!(first.dialogue, vec!["Vendor: Fresh dumplings!", "Mei: Two, please."]);
    assert_eq!(first.narration.as_deref(), Some("Taipei, midnight."));
    assert!(comic.panels[1].dialogue.is_empty());

    let (navigator, _) = Navigator::mount(comic.panels, Timing::default()).expect("mounted");
    assert_eq!(navigator.layout().total_steps(), 4 + 2);
}

#[test]
fn manifest_paths_resolve_against_manifest_dir() {
    let dir = tempdir().expect("temp dir");
    let manifest = dir.path().join("harbor.toml");
    fs::write(
        &manifest,
        r#"
title = "Harbor"
final_comic = "full.png"

[[panels]]
image = "images/one.png"
scene_description = "Boats at rest."
dialogue = ["Gull: Kraa!"]

[[panels]]
panel_number = 5
image = "images/two.png"
scene_description = "A storm rolls in."
narration = "Later."
"#,
    )
    .expect("write manifest");

    let comic = comic::load(&manifest).expect("manifest loads");
    assert_eq!(comic.final_comic, dir.path().join("full.png"));
    assert_eq!(comic.panels[0].panel_number, 1);
    assert_eq!(comic.panels[1].panel_number, 5);
    assert_eq!(comic.panels[1].image, dir.path().join("images/two.png"));
    assert_eq!(comic.missing_images().len(), 2);
}

#[test]
fn unreadable_sources_are_reported() {
    let dir = tempdir().expect("temp dir");

    assert!(matches!(
        comic::load(dir.path()),
        Err(Error::UnsupportedSource(_))
    ));

    let image = dir.path().join("cover.png");
    fs::write(&image, b"png").expect("write image");
    assert!(matches!(comic::load(&image), Err(Error::UnsupportedSource(_))));

    let script = dir.path().join("blank.txt");
    fs::write(&script, "TITLE: Nothing here\n").expect("write script");
    assert!(matches!(comic::load(&script), Err(Error::Script(_))));

    let manifest = dir.path().join("empty.toml");
    fs::write(&manifest, "title = \"Empty\"\nfinal_comic = \"f.png\"\n").expect("write manifest");
    assert!(matches!(comic::load(&manifest), Err(Error::EmptyComic)));
}
