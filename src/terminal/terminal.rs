use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::terminal_event::TerminalEvent;
use crate::ui::frame::{Frame, Line};
use crate::ui::style::Color;
use crossterm::event::{Event, KeyEventKind, poll, read};
use crossterm::style::{Attribute, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, queue, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

/// Thin crossterm wrapper. Frames are drawn in place, starting from the row
/// the cursor was on when the terminal was opened.
pub struct Terminal {
    stdout: Stdout,
    size: Size,
    origin_row: u16,
    last_frame_height: u16,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let stdout = io::stdout();
        let (width, height) = terminal::size()?;
        let (_, origin_row) = cursor::position()?;
        Ok(Self {
            stdout,
            size: Size { width, height },
            origin_row,
            last_frame_height: 0,
        })
    }

    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    pub fn exit_raw_mode(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn poll(&self, timeout: Duration) -> io::Result<bool> {
        poll(timeout)
    }

    pub fn read_event(&mut self) -> io::Result<TerminalEvent> {
        loop {
            match read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    return Ok(TerminalEvent::Key(map_key_event(key)));
                }
                Event::Resize(width, height) => {
                    self.size = Size { width, height };
                    return Ok(TerminalEvent::Resize { width, height });
                }
                _ => continue,
            }
        }
    }

    pub fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        queue!(self.stdout, cursor::Hide)?;
        queue!(self.stdout, cursor::MoveTo(0, self.origin_row))?;
        queue!(
            self.stdout,
            terminal::Clear(terminal::ClearType::FromCursorDown)
        )?;

        for (i, line) in frame.lines().iter().enumerate() {
            if i > 0 {
                write!(self.stdout, "\r\n")?;
            }
            self.queue_line(line)?;
        }

        let height = frame.lines().len() as u16;
        if self.origin_row.saturating_add(height) > self.size.height {
            // The write above scrolled; keep the origin pinned to the frame.
            self.origin_row = self.size.height.saturating_sub(height);
        }
        self.last_frame_height = height;

        if let Some(pos) = frame.cursor() {
            queue!(
                self.stdout,
                cursor::MoveTo(pos.col, self.origin_row.saturating_add(pos.row))
            )?;
            queue!(self.stdout, cursor::Show)?;
        }

        self.stdout.flush()
    }

    /// Leaves the cursor on a fresh line below the last frame.
    pub fn finish(&mut self) -> io::Result<()> {
        let end_row = self
            .origin_row
            .saturating_add(self.last_frame_height)
            .min(self.size.height.saturating_sub(1));
        queue!(self.stdout, cursor::MoveTo(0, end_row))?;
        queue!(self.stdout, cursor::Show)?;
        write!(self.stdout, "\r\n")?;
        self.stdout.flush()
    }

    fn queue_line(&mut self, line: &Line) -> io::Result<()> {
        for span in line.spans() {
            let style = span.style;
            let styled = style.color.is_some() || style.bold || style.dim;

            if let Some(color) = style.color {
                queue!(self.stdout, SetForegroundColor(map_color(color)))?;
            }
            if style.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                queue!(self.stdout, SetAttribute(Attribute::Dim))?;
            }

            write!(self.stdout, "{}", span.text)?;

            if styled {
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                queue!(self.stdout, ResetColor)?;
            }
        }
        Ok(())
    }
}

fn map_color(color: Color) -> crossterm::style::Color {
    match color {
        Color::DarkGrey => crossterm::style::Color::DarkGrey,
        Color::Red => crossterm::style::Color::Red,
        Color::Green => crossterm::style::Color::Green,
        Color::Yellow => crossterm::style::Color::Yellow,
        Color::Cyan => crossterm::style::Color::Cyan,
        Color::White => crossterm::style::Color::White,
    }
}

fn map_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    KeyEvent {
        code: map_key_code(event.code),
        modifiers: map_key_modifiers(event.modifiers),
    }
}

fn map_key_code(code: crossterm::event::KeyCode) -> KeyCode {
    match code {
        crossterm::event::KeyCode::Char(ch) => KeyCode::Char(ch),
        crossterm::event::KeyCode::Backspace => KeyCode::Backspace,
        crossterm::event::KeyCode::Enter => KeyCode::Enter,
        crossterm::event::KeyCode::Esc => KeyCode::Esc,
        crossterm::event::KeyCode::Left => KeyCode::Left,
        crossterm::event::KeyCode::Right => KeyCode::Right,
        crossterm::event::KeyCode::Up => KeyCode::Up,
        crossterm::event::KeyCode::Down => KeyCode::Down,
        crossterm::event::KeyCode::Home => KeyCode::Home,
        crossterm::event::KeyCode::End => KeyCode::End,
        crossterm::event::KeyCode::Tab => KeyCode::Tab,
        crossterm::event::KeyCode::BackTab => KeyCode::BackTab,
        crossterm::event::KeyCode::Delete => KeyCode::Delete,
        _ => KeyCode::Other,
    }
}

fn map_key_modifiers(modifiers: crossterm::event::KeyModifiers) -> KeyModifiers {
    let mut mapped = KeyModifiers::NONE;
    if modifiers.contains(crossterm::event::KeyModifiers::SHIFT) {
        mapped |= KeyModifiers::SHIFT;
    }
    if modifiers.contains(crossterm::event::KeyModifiers::CONTROL) {
        mapped |= KeyModifiers::CONTROL;
    }
    if modifiers.contains(crossterm::event::KeyModifiers::ALT) {
        mapped |= KeyModifiers::ALT;
    }
    mapped
}
