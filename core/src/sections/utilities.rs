use std::fmt::Display;

use guide_common::output::Console;
use tracing::debug;

use crate::error::ArithmeticError;

/// Renders items as `[a, b, c]`.
pub fn format_list<T: Display>(items: &[T]) -> String {
    let joined: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", joined.join(", "))
}

pub fn divide(x: i32, y: i32) -> Result<i32, ArithmeticError> {
    if y == 0 {
        return Err(ArithmeticError::DivideByZero);
    }
    x.checked_div(y).ok_or(ArithmeticError::Overflow)
}

/// Divides and reports the outcome. The closing line is written whatever the outcome.
pub fn attempt_division(x: i32, y: i32, out: &mut dyn Console) {
    out.blank();
    out.text("Attempting division...");

    match divide(x, y) {
        Ok(result) => out.text(&format!("Result: {result}")),
        Err(err) => {
            debug!(x, y, %err, "division failed");
            out.error(&format!(
                "ERROR CAUGHT: Arithmetic problem. {}",
                err.explanation()
            ));
            out.error(&format!("Exception Message: {err}"));
        }
    }

    out.text("FINALLY BLOCK: Execution finished.");
}

pub fn run(out: &mut dyn Console) {
    let mut tasks: Vec<String> = Vec::new();
    tasks.push(String::from("Study OOP"));
    tasks.push(String::from("Write Report"));
    tasks[0] = String::from("Master Collections");
    tasks.remove(1);

    out.text(&format!("List Size: {}", tasks.len()));
    out.text(&format!("List Content: {}", format_list(&tasks)));

    attempt_division(10, 0, out);

    out.text("Program successfully continued.");
}
