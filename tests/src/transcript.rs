#![cfg(test)]
use guide_common::output::{Line, Transcript};
use guide_core::sections::{self, Section};

const FULL_GUIDE: &str = "\
--- SECTION 1: FUNDAMENTALS (Variables, Data Types, Casting) ---
Current Year: 2025, Price: $55999.99
Welcome to the Java guide! - Complete Status: true
Widening Cast (int to double): 2025.0
Narrowing Cast (double to int): 55999

--- SECTION 2: LOGIC & FLOW (Decision Making) ---
Result: Grade B.
Day 3 is Wednesday

--- SECTION 3: REPETITION (Arrays and Loops) ---
Array Size: 4
Standard Loop Output: 10 20 \n\
Enhanced Loop Output: 10 20 30 40 \n\
While Loop Output: Count 0 Count 1 Count 2 \n\
\n\
--- SECTION 4 & 5: OOP IN ACTION (Abstraction, Inheritance, etc.) ---
LOG: Vehicle created: Honda Civic
Warning: Cannot exceed max speed of 200. Setting to max.
Final Speed (via Getter): 200
Honda Civic accelerated by 10 km/h (default).
Honda Civic accelerated with a boost of 50 km/h.
Honda Civic is currently traveling at 260 km/h.
It is a 4-door Car.
LOG: Vehicle created: Ford Fiesta

--- Polymorphic Call via Parent Reference ---
Ford Fiesta is currently traveling at 80 km/h.
It is a 2-door Car.

--- SECTION 7: ADVANCED UTILITIES ---
List Size: 1
List Content: [Master Collections]

Attempting division...
ERROR CAUGHT: Arithmetic problem. Cannot divide by zero.
Exception Message: / by zero
FINALLY BLOCK: Execution finished.
Program successfully continued.
";

#[test]
fn full_guide_matches_byte_for_byte() {
    let mut out = Transcript::new();
    sections::run_all(&mut out);

    assert_eq!(out.render(), FULL_GUIDE);
}

#[test]
fn selecting_every_section_equals_running_all() {
    let mut all = Transcript::new();
    sections::run_all(&mut all);

    let mut selected = Transcript::new();
    let reversed: Vec<Section> = Section::ALL.iter().rev().copied().collect();
    sections::run_sections(&reversed, &mut selected);

    assert_eq!(all.lines(), selected.lines());
}

#[test]
fn every_heading_is_styled_as_heading() {
    let mut out = Transcript::new();
    sections::run_all(&mut out);

    let headings: Vec<&str> = out
        .lines()
        .iter()
        .filter(|line| matches!(line, Line::Heading(_)))
        .map(Line::text)
        .collect();

    assert_eq!(
        headings,
        vec![
            Section::Fundamentals.heading(),
            Section::Logic.heading(),
            Section::Repetition.heading(),
            Section::Oop.heading(),
            "--- Polymorphic Call via Parent Reference ---",
            Section::Utilities.heading(),
        ]
    );
}

#[test]
fn only_the_caught_division_is_reported_as_error() {
    let mut out = Transcript::new();
    sections::run_all(&mut out);

    let errors: Vec<&str> = out
        .lines()
        .iter()
        .filter(|line| matches!(line, Line::Error(_)))
        .map(Line::text)
        .collect();

    assert_eq!(
        errors,
        vec![
            "ERROR CAUGHT: Arithmetic problem. Cannot divide by zero.",
            "Exception Message: / by zero",
        ]
    );
}

#[test]
fn later_section_alone_starts_with_its_heading() {
    let mut out = Transcript::new();
    sections::run_sections(&[Section::Utilities], &mut out);

    let texts = out.texts();
    assert_eq!(texts[0], Section::Utilities.heading());
    assert_eq!(texts.last(), Some(&"Program successfully continued."));
}
