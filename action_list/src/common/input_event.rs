// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// Input events that reach an item. Both a pointer click and a keyboard `Enter` or
/// `Space` press map to the same select action, see [`InputEvent::is_select_action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Click,
    Keyboard(Key),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Character(char),
    SpecialKey(SpecialKey),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialKey {
    Enter,
    Esc,
    Tab,
    Backspace,
    Up,
    Down,
    Home,
    End,
}

impl InputEvent {
    /// `Space` is a plain character key, the same way a terminal reports it.
    #[must_use]
    pub fn is_select_action(&self) -> bool {
        matches!(
            self,
            InputEvent::Click
                | InputEvent::Keyboard(
                    Key::Character(' ') | Key::SpecialKey(SpecialKey::Enter)
                )
        )
    }

    #[must_use]
    pub fn enter() -> Self { InputEvent::Keyboard(Key::SpecialKey(SpecialKey::Enter)) }

    #[must_use]
    pub fn space() -> Self { InputEvent::Keyboard(Key::Character(' ')) }
}

impl Display for InputEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            InputEvent::Click => write!(f, "click"),
            InputEvent::Keyboard(Key::Character(' ')) => write!(f, "key:Space"),
            InputEvent::Keyboard(Key::Character(ch)) => write!(f, "key:{ch}"),
            InputEvent::Keyboard(Key::SpecialKey(key)) => write!(f, "key:{key:?}"),
        }
    }
}
