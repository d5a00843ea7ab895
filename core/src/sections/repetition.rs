use std::fmt::Display;

use guide_common::output::Console;

const NUMBERS: [i32; 4] = [10, 20, 30, 40];

/// Walks `values` front to back, skipping 30 and stopping at the first 40.
pub fn standard_loop(values: &[i32]) -> Vec<i32> {
    let mut visited: Vec<i32> = Vec::new();
    for &value in values {
        if value == 30 {
            continue;
        }
        if value == 40 {
            break;
        }
        visited.push(value);
    }
    visited
}

// Every item is followed by one space, the last one included.
fn spaced<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items.into_iter().map(|item| format!("{item} ")).collect()
}

pub fn run(out: &mut dyn Console) {
    out.text(&format!("Array Size: {}", NUMBERS.len()));

    out.text(&format!(
        "Standard Loop Output: {}",
        spaced(standard_loop(&NUMBERS))
    ));

    out.text(&format!("Enhanced Loop Output: {}", spaced(NUMBERS)));

    let mut counter: i32 = 0;
    let mut line: String = String::from("While Loop Output: ");
    while counter < 3 {
        line.push_str(&format!("Count {counter} "));
        counter += 1;
    }
    out.text(&line);
}
