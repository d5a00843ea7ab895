//! # Demonstration Sections
//!
//! The guide is a fixed sequence of sections. Each one prints its heading and
//! then runs a short demonstration against a [`Console`].

pub mod fundamentals;
pub mod logic;
pub mod oop;
pub mod repetition;
pub mod utilities;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use guide_common::output::Console;
use tracing::debug;

/// Declaration order is the order sections are run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Fundamentals,
    Logic,
    Repetition,
    Oop,
    Utilities,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Fundamentals,
        Section::Logic,
        Section::Repetition,
        Section::Oop,
        Section::Utilities,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Fundamentals => "fundamentals",
            Section::Logic => "logic",
            Section::Repetition => "repetition",
            Section::Oop => "oop",
            Section::Utilities => "utilities",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Section::Fundamentals => {
                "--- SECTION 1: FUNDAMENTALS (Variables, Data Types, Casting) ---"
            }
            Section::Logic => "--- SECTION 2: LOGIC & FLOW (Decision Making) ---",
            Section::Repetition => "--- SECTION 3: REPETITION (Arrays and Loops) ---",
            Section::Oop => {
                "--- SECTION 4 & 5: OOP IN ACTION (Abstraction, Inheritance, etc.) ---"
            }
            Section::Utilities => "--- SECTION 7: ADVANCED UTILITIES ---",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Section::Fundamentals => "primitive types, strings and casting",
            Section::Logic => "if/else chains and match",
            Section::Repetition => "arrays, for and while loops",
            Section::Oop => "abstraction, inheritance and dynamic dispatch",
            Section::Utilities => "growable lists and recoverable errors",
        }
    }

    fn demonstrate(self, out: &mut dyn Console) {
        match self {
            Section::Fundamentals => fundamentals::run(out),
            Section::Logic => logic::run(out),
            Section::Repetition => repetition::run(out),
            Section::Oop => oop::run(out),
            Section::Utilities => utilities::run(out),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = String;

    /// Accepts the section name (case-insensitive) or its position in [`Section::ALL`],
    /// starting at 1. Positions are not the numbers printed in the headings:
    /// `4` is "SECTION 4 & 5" and `5` is "SECTION 7".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();

        if let Some(section) = Section::ALL.iter().find(|section| section.name() == lower) {
            return Ok(*section);
        }

        lower
            .parse::<usize>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|index| Section::ALL.get(index).copied())
            .ok_or_else(|| format!("invalid section: {s}"))
    }
}

/// Runs the given sections in canonical order, each at most once.
///
/// A blank line separates consecutive sections.
pub fn run_sections(sections: &[Section], out: &mut dyn Console) {
    let ordered: BTreeSet<Section> = sections.iter().copied().collect();

    for (i, section) in ordered.into_iter().enumerate() {
        debug!(%section, "running section");
        if i > 0 {
            out.blank();
        }
        out.heading(section.heading());
        section.demonstrate(out);
    }
}

/// Runs every section.
pub fn run_all(out: &mut dyn Console) {
    run_sections(&Section::ALL, out);
}
