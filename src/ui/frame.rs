use crate::ui::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub row: u16,
    pub col: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_span(span: Span) -> Self {
        let mut line = Self::new();
        line.push(span);
        line
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn push(&mut self, span: Span) {
        if !span.text.is_empty() {
            self.spans.push(span);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| s.width()).sum()
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    lines: Vec<Line>,
    cursor: Option<CursorPos>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn cursor(&self) -> Option<CursorPos> {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: CursorPos) {
        self.cursor = Some(cursor);
    }

    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn push_span(&mut self, span: Span) {
        self.lines.push(Line::from_span(span));
    }

    pub fn push_blank(&mut self) {
        self.lines.push(Line::new());
    }

    /// Row the next pushed line will land on.
    pub fn next_row(&self) -> u16 {
        self.lines.len() as u16
    }
}
