use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 40;

/// ANSI colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "in" => Colour::Green,
        "out" => Colour::Red,
        "remove" => Colour::Yellow,
        "clear" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `op (target)`, cut to `MAX_OP_WIDTH` visible characters.
fn op_target(entry: &LogEntry) -> String {
    let raw = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    if raw.chars().count() > MAX_OP_WIDTH {
        let mut s: String = raw.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        raw
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for entry in &entries {
            let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| entry.date.clone());

            let text = op_target(entry);
            let padding = " ".repeat(op_w.saturating_sub(text.chars().count()));

            // Only the operation word is coloured.
            let colored = match text.split_once(' ') {
                Some((op, rest)) => format!(
                    "{} {}",
                    color_for_operation(&entry.operation).paint(op),
                    rest
                ),
                None => color_for_operation(&entry.operation)
                    .paint(text.as_str())
                    .to_string(),
            };

            println!(
                "{:>id_w$}: {} | {}{} => {}",
                entry.id,
                date,
                colored,
                padding,
                entry.message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
