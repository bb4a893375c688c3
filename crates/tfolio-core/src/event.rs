//! Normalized input events.
//!
//! The runtime translates backend events into these types so that models
//! and widgets never depend on a specific terminal backend.

use bitflags::bitflags;

/// Canonical input event delivered to the program loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key press, repeat, or release.
    Key(KeyEvent),
    /// A mouse button, motion, or wheel event.
    Mouse(MouseEvent),
    /// The terminal was resized to the given cell dimensions.
    Resize { width: u16, height: u16 },
}

bitflags! {
    /// Keyboard modifier state attached to key and mouse events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0000_0001;
        const CTRL  = 0b0000_0010;
        const ALT   = 0b0000_0100;
    }
}

/// Whether a key event is the initial press, an auto-repeat, or a release.
///
/// Models usually act on `Press` only; repeats and releases are delivered
/// for completeness on backends that report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Decoded key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
}

/// A single keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Construct a plain key press with no modifiers.
    #[must_use]
    pub fn press(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }

    /// Whether this event is a press of the given character.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        self.kind == KeyEventKind::Press && self.code == KeyCode::Char(c)
    }
}

/// Mouse buttons reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// What a mouse event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    Drag(MouseButton),
    Moved,
    ScrollUp,
    ScrollDown,
}

/// A single mouse event in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    /// Column, 0-based.
    pub x: u16,
    /// Row, 0-based.
    pub y: u16,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// Whether this is a left-button press.
    #[must_use]
    pub fn is_left_down(&self) -> bool {
        matches!(self.kind, MouseEventKind::Down(MouseButton::Left))
    }
}
