/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

use crate::models::action::Action;

/// IN → green, OUT → red.
pub fn colorize_action(action: Action) -> String {
    let color = if action.is_in() { GREEN } else { RED };
    format!("{color}{}{RESET}", action.name())
}

/// Zero totals are greyed out.
pub fn colorize_total(value: &str, is_zero: bool) -> String {
    if is_zero {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
