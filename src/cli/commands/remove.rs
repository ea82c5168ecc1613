use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

use std::io::{self, Write};

/// `[Y/n]` prompt: blank, `Y` or `y` confirm; anything else declines.
pub fn is_confirmed(answer: &str) -> bool {
    matches!(answer.trim(), "" | "Y" | "y")
}

fn ask_confirmation(prompt: &str) -> AppResult<bool> {
    print!("{prompt} [Y/n] ");
    io::stdout().flush()?;

    let mut s = String::new();
    // Closed stdin is not an answer.
    if io::stdin().read_line(&mut s)? == 0 {
        println!();
        return Ok(false);
    }
    Ok(is_confirmed(&s))
}

pub fn remove_positions(pool: &mut DbPool, positions: &[usize]) -> AppResult<()> {
    let removed = DeleteLogic::remove(pool, positions)?;

    for ev in &removed {
        ttlog_or_warn(
            &pool.conn,
            "remove",
            &ev.id,
            &format!("Removed {} {} at {}", ev.activity, ev.action, ev.timestamp_str()),
        );
    }

    success(format!("Removed {} clock record(s).", removed.len()));
    Ok(())
}

pub fn clear_all(pool: &mut DbPool, cfg: &Config, assume_yes: bool) -> AppResult<()> {
    if cfg.confirm_clear && !assume_yes && !ask_confirmation("Delete all clock records?")? {
        info("Operation cancelled.");
        return Ok(());
    }

    let removed = DeleteLogic::clear(pool)?;
    ttlog_or_warn(
        &pool.conn,
        "clear",
        "",
        &format!("Deleted all {removed} clock record(s)"),
    );

    success(format!("Deleted all {removed} clock record(s)."));
    Ok(())
}
