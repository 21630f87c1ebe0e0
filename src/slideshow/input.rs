// SPDX-License-Identifier: MPL-2.0
//! Keyboard mapping for the slideshow.
//!
//! Keys are modeled independently of the GUI toolkit so the mapping can be
//! tested without a window; the UI layer converts `iced` keys into [`Key`].

/// Keys the slideshow distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Space,
    Escape,
    /// Anything else; never handled.
    Other,
}

/// Navigation command produced by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    Retreat,
    Close,
}

/// Maps a key to its command.
///
/// Returns `None` for keys the slideshow leaves alone; any `Some` means the
/// key is consumed and must not reach other handlers.
#[must_use]
pub fn map_key(key: Key) -> Option<Command> {
    match key {
        Key::ArrowRight | Key::Space => Some(Command::Advance),
        Key::ArrowLeft => Some(Command::Retreat),
        Key::Escape => Some(Command::Close),
        Key::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_keys_advance() {
        assert_eq!(map_key(Key::ArrowRight), Some(Command::Advance));
        assert_eq!(map_key(Key::Space), Some(Command::Advance));
    }

    #[test]
    fn left_arrow_retreats() {
        assert_eq!(map_key(Key::ArrowLeft), Some(Command::Retreat));
    }

    #[test]
    fn escape_closes() {
        assert_eq!(map_key(Key::Escape), Some(Command::Close));
    }

    #[test]
    fn other_keys_are_not_consumed() {
        assert_eq!(map_key(Key::Other), None);
    }
}
