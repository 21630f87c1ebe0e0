// SPDX-License-Identifier: MPL-2.0
//! File naming conventions of the comic generator's output directory.
//!
//! The generator writes one image per panel plus the assembled comic, all
//! named after a sanitized version of the comic title:
//!
//! ```text
//! The_Fall_of_Rome_panel_01.png
//! The_Fall_of_Rome_panel_02.png
//! The_Fall_of_Rome_complete_comic.png
//! ```

/// Characters that are replaced by `_` in file names.
const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Longest sanitized title, in characters.
pub const MAX_TITLE_CHARS: usize = 50;

/// Makes a comic title safe to embed in a file name.
///
/// Invalid characters become `_`, whitespace runs collapse into a single `_`,
/// and the result is truncated to [`MAX_TITLE_CHARS`] characters.
///
/// # Example
///
/// ```
/// use panel_reel::comic::naming::sanitize_title;
///
/// assert_eq!(sanitize_title("Rome: Day  One"), "Rome__Day_One");
/// ```
#[must_use]
pub fn sanitize_title(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let joined = replaced.split_whitespace().collect::<Vec<_>>().join("_");
    joined.chars().take(MAX_TITLE_CHARS).collect()
}

/// File name of a panel image.
#[must_use]
pub fn panel_image_name(title: &str, panel_number: u32) -> String {
    format!("{}_panel_{panel_number:02}.png", sanitize_title(title))
}

/// File name of the assembled comic.
#[must_use]
pub fn final_comic_name(title: &str) -> String {
    format!("{}_complete_comic.png", sanitize_title(title))
}
