use colored::*;
use guide_common::config::Config;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{colors, logging::PRINT_TARGET};

pub const TOTAL_WIDTH: usize = 64;

pub fn initialize(cfg: &Config) {
    if cfg.no_color {
        colored::control::set_override(false);
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let msg_width: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_width);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: String = format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        formatted.color(colors::PRIMARY),
        "─".repeat(right).color(colors::SEPARATOR)
    );

    print(&line);
}

pub fn aligned_line(key: &str, value: &str, key_width: usize) {
    let dots: String = ".".repeat(key_width.saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    print_status(format!(
        "{}{} {}",
        key.color(colors::ACCENT),
        colon,
        value.color(colors::TEXT_DEFAULT)
    ));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{} {}", prefix, msg.as_ref()));
}

pub fn end_of_program(q_level: u8) {
    if q_level > 0 {
        return;
    }

    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
