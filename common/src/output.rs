//! # Console Port
//!
//! Every demonstration writes its output as a sequence of [`Line`]s into a
//! [`Console`]. The binary renders them on the terminal; tests collect them
//! into a [`Transcript`].

use std::fmt;

/// A single line of demonstration output.
///
/// The kind only drives styling. [`Line::text`] is what gets printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Blank,
    Heading(String),
    Text(String),
    Warning(String),
    Error(String),
}

impl Line {
    pub fn text(&self) -> &str {
        match self {
            Line::Blank => "",
            Line::Heading(msg) | Line::Text(msg) | Line::Warning(msg) | Line::Error(msg) => msg,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

pub trait Console {
    fn emit(&mut self, line: Line);

    fn blank(&mut self) {
        self.emit(Line::Blank);
    }

    fn heading(&mut self, msg: &str) {
        self.emit(Line::Heading(msg.to_owned()));
    }

    fn text(&mut self, msg: &str) {
        self.emit(Line::Text(msg.to_owned()));
    }

    fn warning(&mut self, msg: &str) {
        self.emit(Line::Warning(msg.to_owned()));
    }

    fn error(&mut self, msg: &str) {
        self.emit(Line::Error(msg.to_owned()));
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn emit(&mut self, line: Line) {
        (**self).emit(line);
    }
}

/// Collects lines in memory.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Vec<Line>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(Line::text).collect()
    }

    /// Joins every line with `\n`, including a trailing newline after the last one.
    pub fn render(&self) -> String {
        self.lines.iter().fold(String::new(), |mut acc, line| {
            acc.push_str(line.text());
            acc.push('\n');
            acc
        })
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Console for Transcript {
    fn emit(&mut self, line: Line) {
        self.lines.push(line);
    }
}
