//! Formatting utilities used for CLI and export outputs.

use crate::models::event::ClockEvent;
use crate::models::summary::TimeParts;
use crate::utils::colors::colorize_action;

/// `8 hrs, 0 mins, 0 seconds`
pub fn parts2readable(parts: TimeParts) -> String {
    format!(
        "{} hrs, {} mins, {} seconds",
        parts.hours, parts.minutes, parts.seconds
    )
}

/// One record line: `<when> | WORK IN`.
///
/// With `show_date` the full `date_format` is used; otherwise only the time,
/// right-aligned under the date column of the previous line.
pub fn format_record(
    ev: &ClockEvent,
    show_date: bool,
    date_format: &str,
    time_format: &str,
) -> String {
    let when = if show_date {
        ev.timestamp.format(date_format).to_string()
    } else {
        let width = ev.timestamp.format(date_format).to_string().chars().count();
        format!(
            "{:>width$}",
            ev.timestamp.format(time_format).to_string(),
            width = width
        )
    };

    format!(
        "{} | {} {}",
        when,
        ev.activity.name(),
        colorize_action(ev.action)
    )
}
