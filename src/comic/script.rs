// SPDX-License-Identifier: MPL-2.0
//! Parser for the comic generator's script text.
//!
//! A script looks like:
//!
//! ```text
//! TITLE: The Fall of Rome
//!
//! PANEL 1:
//! SCENE: Senators argue on the steps of the Curia.
//! DIALOGUE:
//! Cato: Carthage must be destroyed!
//! Scipio: Again, Cato?
//! NARRATION: Rome, 150 BC.
//!
//! PANEL 2:
//! SCENE: An empty forum at dusk.
//! DIALOGUE: [none]
//! ```
//!
//! Section keywords are case-insensitive. Panels without a scene are dropped
//! and the remaining ones are renumbered from 1.

use super::naming::{final_comic_name, panel_image_name};
use super::{Comic, PanelRecord};
use crate::error::{Error, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

const UNTITLED: &str = "Untitled Comic";

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)TITLE:\s*(.+)").expect("title regex should compile"));

static TITLE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^TITLE:").expect("title keyword regex should compile"));

static PANEL_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)PANEL\s+(\d+):").expect("panel header regex should compile")
});

static SCENE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)SCENE:\s*").expect("scene regex should compile"));

static DIALOGUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)DIALOGUE:\s*").expect("dialogue regex should compile"));

static NARRATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)NARRATION:\s*").expect("narration regex should compile"));

/// One panel as written in the script, before images are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptPanel {
    pub panel_number: u32,
    pub scene_description: String,
    pub dialogue: Vec<String>,
    pub narration: Option<String>,
}

/// A parsed script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub title: String,
    pub panels: Vec<ScriptPanel>,
}

impl Script {
    /// Attaches the generator's image file names, resolved inside `dir`.
    #[must_use]
    pub fn into_comic(self, dir: &Path) -> Comic {
        let panels = self
            .panels
            .into_iter()
            .map(|panel| PanelRecord {
                image: dir.join(panel_image_name(&self.title, panel.panel_number)),
                panel_number: panel.panel_number,
                scene_description: panel.scene_description,
                dialogue: panel.dialogue,
                narration: panel.narration,
                image_available: false,
            })
            .collect();

        let final_comic = dir.join(final_comic_name(&self.title));
        Comic::new(self.title, panels, final_comic)
    }
}

/// Parses script text.
///
/// # Errors
///
/// Returns [`Error::Script`] when no panel with a scene description is found.
pub fn parse(text: &str) -> Result<Script> {
    let title = extract_title(text);
    let panels: Vec<ScriptPanel> = panel_sections(text)
        .into_iter()
        .filter_map(|(number, content)| parse_panel(number, content))
        .enumerate()
        .map(|(index, mut panel)| {
            // Panels are renumbered by position, like the generator does.
            panel.panel_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
            panel
        })
        .collect();

    if panels.is_empty() {
        return Err(Error::Script(format!("no panels found in \"{title}\"")));
    }

    tracing::debug!(%title, panels = panels.len(), "script parsed");
    Ok(Script { title, panels })
}

fn extract_title(text: &str) -> String {
    if let Some(caps) = TITLE.captures(text) {
        let title = caps[1].trim();
        if !title.is_empty() && !PANEL_HEADER.is_match(title) {
            return title.to_string();
        }
    }

    let first_line = text.trim().lines().next().unwrap_or_default().trim();
    let is_header = first_line.starts_with("PANEL") || TITLE_KEYWORD.is_match(first_line);
    if !first_line.is_empty() && !is_header {
        return first_line.to_string();
    }

    UNTITLED.to_string()
}

/// Splits the text into `(declared number, body)` pairs, one per panel header.
fn panel_sections(text: &str) -> Vec<(u32, &str)> {
    let headers: Vec<_> = PANEL_HEADER.captures_iter(text).collect();
    headers
        .iter()
        .enumerate()
        .filter_map(|(i, caps)| {
            let header = caps.get(0)?;
            let number = caps[1].parse().unwrap_or_else(|_| {
                tracing::warn!(header = &caps[0], "panel number out of range; clamping");
                u32::MAX
            });
            let end = headers
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(text.len(), |next| next.start());
            Some((number, &text[header.end()..end]))
        })
        .collect()
}

fn parse_panel(panel_number: u32, content: &str) -> Option<ScriptPanel> {
    let scene = section(content, &SCENE, &[&DIALOGUE, &NARRATION])?;
    if scene.is_empty() {
        tracing::warn!(panel_number, "script panel has no scene; skipping");
        return None;
    }

    Some(ScriptPanel {
        panel_number,
        scene_description: scene.to_string(),
        dialogue: section(content, &DIALOGUE, &[&NARRATION])
            .map(dialogue_lines)
            .unwrap_or_default(),
        narration: section(content, &NARRATION, &[])
            .filter(|text| !text.is_empty() && !is_none_marker(text))
            .map(str::to_string),
    })
}

/// Trimmed body of the section introduced by `start`, ending at the first of
/// `terminators` that follows it.
fn section<'a>(
    content: &'a str,
    start: &Regex,
    terminators: &[&LazyLock<Regex>],
) -> Option<&'a str> {
    let begin = start.find(content)?.end();
    let rest = &content[begin..];
    let end = terminators
        .iter()
        .filter_map(|terminator| terminator.find(rest).map(|m| m.start()))
        .min()
        .unwrap_or(rest.len());
    Some(rest[..end].trim())
}

fn is_none_marker(text: &str) -> bool {
    matches!(text.to_lowercase().as_str(), "none" | "[none]")
}

fn dialogue_lines(text: &str) -> Vec<String> {
    if text.is_empty() || is_none_marker(text) {
        return Vec::new();
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('['))
        .filter(|line| {
            if line.contains(':') && !line.to_lowercase().starts_with("dialogue") {
                return true;
            }
            let upper = line.to_uppercase();
            !["SCENE", "DIALOGUE", "NARRATION"]
                .iter()
                .any(|header| upper.starts_with(header))
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SAMPLE: &str = "\
TITLE: The Fall of Rome

PANEL 1:
SCENE: Senators argue on the steps of the Curia.
DIALOGUE:
Cato: Carthage must be destroyed!
[crowd murmurs]
Scipio: Again, Cato?
NARRATION: Rome, 150 BC.

PANEL 2:
SCENE: An empty forum at dusk.
DIALOGUE: [none]
NARRATION: none
";

    #[test]
    fn parses_title_and_panels() {
        let script = parse(SAMPLE).expect("sample parses");
        assert_eq!(script.title, "The Fall of Rome");
        assert_eq!(script.panels.len(), 2);

        let first = &script.panels[0];
        assert_eq!(first.panel_number, 1);
        assert_eq!(
            first.scene_description,
            "Senators argue on the steps of the Curia."
        );
        assert_eq!(
            first.dialogue,
            vec!["Cato: Carthage must be destroyed!", "Scipio: Again, Cato?"]
        );
        assert_eq!(first.narration.as_deref(), Some("Rome, 150 BC."));
    }

    #[test]
    fn none_markers_mean_empty() {
        let script = parse(SAMPLE).expect("sample parses");
        let second = &script.panels[1];
        assert!(second.dialogue.is_empty());
        assert_eq!(second.narration, None);
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let script = parse("title: Lower\npanel 1:\nscene: quiet\ndialogue:\nA: hi\n")
            .expect("lowercase script parses");
        assert_eq!(script.title, "Lower");
        assert_eq!(script.panels[0].dialogue, vec!["A: hi"]);
    }

    #[test]
    fn title_falls_back_to_first_line() {
        let script = parse("A Quiet Morning\nPANEL 1:\nSCENE: Birds.\n").expect("parses");
        assert_eq!(script.title, "A Quiet Morning");
    }

    #[test]
    fn title_on_line_after_keyword() {
        let script = parse("TITLE:\nThe Fall of Rome\nPANEL 1:\nSCENE: x\n").expect("parses");
        assert_eq!(script.title, "The Fall of Rome");
        let comic = script.into_comic(Path::new("out"));
        assert_eq!(
            comic.panels[0].image,
            PathBuf::from("out/The_Fall_of_Rome_panel_01.png")
        );
    }

    #[test]
    fn bare_title_keyword_is_untitled() {
        let script = parse("TITLE:\nPANEL 1:\nSCENE: x\n").expect("parses");
        assert_eq!(script.title, UNTITLED);
    }

    #[test]
    fn title_falls_back_to_untitled() {
        let script = parse("PANEL 1:\nSCENE: Birds.\n").expect("parses");
        assert_eq!(script.title, UNTITLED);
    }

    #[test]
    fn panels_without_scene_are_skipped_and_renumbered() {
        let text = "TITLE: T\nPANEL 1:\nDIALOGUE: A: x\nPANEL 2:\nSCENE: kept\nPANEL 5:\nSCENE: also kept\n";
        let script = parse(text).expect("parses");
        let numbers: Vec<u32> = script.panels.iter().map(|p| p.panel_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(script.panels[0].scene_description, "kept");
    }

    #[test]
    fn oversized_panel_number_keeps_its_panel() {
        let text = "PANEL 99999999999:\nSCENE: far\nPANEL 2:\nSCENE: near\n";
        let script = parse(text).expect("parses");
        let scenes: Vec<&str> = script
            .panels
            .iter()
            .map(|p| p.scene_description.as_str())
            .collect();
        assert_eq!(scenes, vec!["far", "near"]);
        assert_eq!(script.panels[0].panel_number, 1);
    }

    #[test]
    fn dialogue_without_speaker_is_kept() {
        let script = parse("PANEL 1:\nSCENE: s\nDIALOGUE:\nHello there\n").expect("parses");
        assert_eq!(script.panels[0].dialogue, vec!["Hello there"]);
    }

    #[test]
    fn script_without_panels_is_an_error() {
        let err = parse("TITLE: Nothing here").expect_err("no panels");
        assert!(matches!(err, Error::Script(_)));
    }

    #[test]
    fn into_comic_attaches_generator_file_names() {
        let comic = parse(SAMPLE)
            .expect("sample parses")
            .into_comic(Path::new("output"));
        assert_eq!(
            comic.panels[1].image,
            PathBuf::from("output/The_Fall_of_Rome_panel_02.png")
        );
        assert_eq!(
            comic.final_comic,
            PathBuf::from("output/The_Fall_of_Rome_complete_comic.png")
        );
    }
}
