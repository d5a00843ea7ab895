use guide_core::sections::{self, Section};

use crate::terminal::console::TerminalConsole;

pub fn run(selected: &[Section]) {
    let mut out = TerminalConsole;

    if selected.is_empty() {
        sections::run_all(&mut out);
    } else {
        sections::run_sections(selected, &mut out);
    }
}
