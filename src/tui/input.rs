//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// One of the three flag buttons, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumCount)]
pub enum FlagSlot {
    /// Top flag (index 0).
    #[default]
    Top,
    /// Middle flag (index 1).
    Middle,
    /// Bottom flag (index 2).
    Bottom,
}

impl FlagSlot {
    /// Index into the round's candidates.
    pub fn index(self) -> usize {
        match self {
            FlagSlot::Top => 0,
            FlagSlot::Middle => 1,
            FlagSlot::Bottom => 2,
        }
    }

    /// Slot for a 1-based digit key.
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::iter().nth(i))
    }

    /// Number shown next to the flag.
    pub fn label(self) -> usize {
        self.index() + 1
    }
}

/// Moves cursor based on arrow keys, wrapping at the ends.
pub fn move_cursor(cursor: FlagSlot, key: KeyCode) -> FlagSlot {
    let step = match key {
        KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => 1,
        KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => FlagSlot::COUNT - 1,
        _ => return cursor,
    };
    let next = (cursor.index() + step) % FlagSlot::COUNT;
    FlagSlot::iter().nth(next).unwrap_or(cursor)
}
