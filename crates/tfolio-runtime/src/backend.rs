//! Crossterm backend: terminal session lifecycle, event decoding, and
//! frame presentation.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event as ct;
use crossterm::style::{
    Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::{cursor, execute, queue, terminal};
use tracing::debug;

use tfolio_core::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tfolio_render::Frame;
use tfolio_style::{Color, Style, StyleFlags};

use crate::program::ProgramConfig;

/// RAII guard for raw mode, the alternate screen, cursor visibility, and
/// mouse capture. `Drop` restores the terminal on every exit path.
pub struct TerminalSession {
    mouse: bool,
    alt_screen: bool,
}

impl TerminalSession {
    pub fn new(config: &ProgramConfig) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if config.alt_screen {
            execute!(out, terminal::EnterAlternateScreen)?;
        }
        execute!(out, cursor::Hide, terminal::Clear(terminal::ClearType::All))?;
        if config.mouse {
            execute!(out, ct::EnableMouseCapture)?;
        }
        debug!(
            alt_screen = config.alt_screen,
            mouse = config.mouse,
            "terminal session opened"
        );
        Ok(Self {
            mouse: config.mouse,
            alt_screen: config.alt_screen,
        })
    }

    /// Current terminal dimensions in cells.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Best-effort teardown; errors here have nowhere useful to go.
        let mut out = io::stdout();
        if self.mouse {
            let _ = execute!(out, ct::DisableMouseCapture);
        }
        let _ = execute!(out, cursor::Show);
        if self.alt_screen {
            let _ = execute!(out, terminal::LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }
}

/// Wait up to `timeout` for input.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    ct::poll(timeout)
}

/// Read and decode one backend event. Events with no normalized
/// counterpart (focus, paste, horizontal scroll) are dropped.
pub fn read_event() -> io::Result<Option<Event>> {
    Ok(convert_event(ct::read()?))
}

fn convert_event(event: ct::Event) -> Option<Event> {
    match event {
        ct::Event::Key(key) => convert_key(key).map(Event::Key),
        ct::Event::Mouse(mouse) => convert_mouse(mouse).map(Event::Mouse),
        ct::Event::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    }
}

fn convert_key(key: ct::KeyEvent) -> Option<KeyEvent> {
    let code = match key.code {
        ct::KeyCode::Char(c) => KeyCode::Char(c),
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Esc => KeyCode::Esc,
        ct::KeyCode::Tab => KeyCode::Tab,
        ct::KeyCode::BackTab => KeyCode::BackTab,
        ct::KeyCode::Backspace => KeyCode::Backspace,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        ct::KeyCode::PageUp => KeyCode::PageUp,
        ct::KeyCode::PageDown => KeyCode::PageDown,
        ct::KeyCode::Home => KeyCode::Home,
        ct::KeyCode::End => KeyCode::End,
        _ => return None,
    };
    let kind = match key.kind {
        ct::KeyEventKind::Press => KeyEventKind::Press,
        ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
        ct::KeyEventKind::Release => KeyEventKind::Release,
    };
    Some(KeyEvent {
        code,
        modifiers: convert_modifiers(key.modifiers),
        kind,
    })
}

fn convert_mouse(mouse: ct::MouseEvent) -> Option<MouseEvent> {
    let kind = match mouse.kind {
        ct::MouseEventKind::Down(b) => MouseEventKind::Down(convert_button(b)?),
        ct::MouseEventKind::Up(b) => MouseEventKind::Up(convert_button(b)?),
        ct::MouseEventKind::Drag(b) => MouseEventKind::Drag(convert_button(b)?),
        ct::MouseEventKind::Moved => MouseEventKind::Moved,
        ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
        ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
        _ => return None,
    };
    Some(MouseEvent {
        kind,
        x: mouse.column,
        y: mouse.row,
        modifiers: convert_modifiers(mouse.modifiers),
    })
}

fn convert_button(button: ct::MouseButton) -> Option<MouseButton> {
    match button {
        ct::MouseButton::Left => Some(MouseButton::Left),
        ct::MouseButton::Right => Some(MouseButton::Right),
        ct::MouseButton::Middle => Some(MouseButton::Middle),
    }
}

fn convert_modifiers(m: ct::KeyModifiers) -> Modifiers {
    let mut out = Modifiers::empty();
    if m.contains(ct::KeyModifiers::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    if m.contains(ct::KeyModifiers::CONTROL) {
        out |= Modifiers::CTRL;
    }
    if m.contains(ct::KeyModifiers::ALT) {
        out |= Modifiers::ALT;
    }
    out
}

fn convert_color(color: Color) -> CtColor {
    match color {
        Color::Reset => CtColor::Reset,
        Color::Black => CtColor::Black,
        Color::Red => CtColor::DarkRed,
        Color::Green => CtColor::DarkGreen,
        Color::Yellow => CtColor::DarkYellow,
        Color::Blue => CtColor::DarkBlue,
        Color::Magenta => CtColor::DarkMagenta,
        Color::Cyan => CtColor::DarkCyan,
        Color::White => CtColor::Grey,
        Color::BrightBlack => CtColor::DarkGrey,
        Color::BrightRed => CtColor::Red,
        Color::BrightGreen => CtColor::Green,
        Color::BrightYellow => CtColor::Yellow,
        Color::BrightBlue => CtColor::Blue,
        Color::BrightMagenta => CtColor::Magenta,
        Color::BrightCyan => CtColor::Cyan,
        Color::BrightWhite => CtColor::White,
        Color::Rgb(rgb) => CtColor::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        },
    }
}

fn apply_style(out: &mut Stdout, style: Style) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(convert_color(fg)))?;
    }
    if let Some(bg) = style.bg {
        queue!(out, SetBackgroundColor(convert_color(bg)))?;
    }
    if style.attrs.contains(StyleFlags::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.attrs.contains(StyleFlags::DIM) {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.attrs.contains(StyleFlags::ITALIC) {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.attrs.contains(StyleFlags::UNDERLINE) {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if style.attrs.contains(StyleFlags::REVERSED) {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

/// Present a frame: full repaint, style runs coalesced per change.
pub fn present(out: &mut Stdout, frame: &Frame) -> io::Result<()> {
    let buffer = &frame.buffer;
    let mut current: Option<Style> = None;
    for y in 0..buffer.height() {
        queue!(out, cursor::MoveTo(0, y))?;
        for x in 0..buffer.width() {
            let Some(cell) = buffer.get(x, y) else {
                continue;
            };
            if cell.is_continuation() {
                continue;
            }
            if current != Some(cell.style) {
                apply_style(out, cell.style)?;
                current = Some(cell.style);
            }
            queue!(out, Print(cell.content()))?;
        }
    }
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    out.flush()
}
