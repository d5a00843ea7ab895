use colored::*;
use guide_common::output::{Console, Line};

use crate::terminal::{colors, print};

/// Renders guide lines on the terminal.
///
/// Only the color changes with the line kind, never the text.
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn emit(&mut self, line: Line) {
        let rendered: String = match &line {
            Line::Blank => String::new(),
            Line::Heading(msg) => msg.color(colors::HEADING).bold().to_string(),
            Line::Text(msg) => msg.clone(),
            Line::Warning(msg) => msg.color(colors::WARNING).to_string(),
            Line::Error(msg) => msg.color(colors::ERROR).to_string(),
        };
        print::print(&rendered);
    }
}
