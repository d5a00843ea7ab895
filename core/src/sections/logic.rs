use guide_common::output::Console;

const SCORE: i32 = 85;
const DAY: u8 = 3;

pub fn grade(score: i32) -> char {
    if score >= 90 {
        'A'
    } else if score >= 80 {
        'B'
    } else {
        'C'
    }
}

pub fn day_name(day: u8) -> &'static str {
    match day {
        1 => "Monday",
        3 => "Wednesday",
        _ => "Other Day",
    }
}

pub fn run(out: &mut dyn Console) {
    out.text(&format!("Result: Grade {}.", grade(SCORE)));
    out.text(&format!("Day {DAY} is {}", day_name(DAY)));
}
