use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::recorder::Recorder;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::formatting::format_record;

use super::{display, remove};

/// Handle the flag-driven mode (no subcommand).
///
/// Order: record → display → today → week → remove → clear.
/// The first error stops the run; later flags are not processed.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if cli.is_idle() {
        info("Nothing to do. Try `clocker --help`.");
        return Ok(());
    }

    let mut pool = DbPool::new(&cfg.database_path().to_string_lossy())?;

    record(&mut pool, cli, cfg)?;

    if cli.display {
        display::show_records(&pool, cfg)?;
    }
    if cli.today {
        display::show_today(&pool)?;
    }
    if cli.week {
        display::show_week(&pool)?;
    }

    if let Some(positions) = &cli.remove {
        remove::remove_positions(&mut pool, positions)?;
    }
    if cli.clear {
        remove::clear_all(&mut pool, cfg, cli.yes)?;
    }

    Ok(())
}

/// Record one event when exactly one direction and one activity are given.
fn record(pool: &mut DbPool, cli: &Cli, cfg: &Config) -> AppResult<()> {
    match (cli.activity(), cli.action()) {
        (Some(activity), Some(action)) => {
            let ev = Recorder::record(pool, activity, action)?;

            println!(
                "{}",
                format_record(&ev, true, &cfg.date_format, &cfg.time_format)
            );

            ttlog_or_warn(
                &pool.conn,
                &action.name().to_lowercase(),
                activity.name(),
                &format!("Clocked {action} for {activity} at {}", ev.timestamp_str()),
            );
        }
        (Some(activity), None) => {
            warning(format!(
                "No direction given for {activity}: use --in or --out. Nothing recorded."
            ));
        }
        (None, Some(action)) => {
            warning(format!(
                "No activity given for clock {action}: use --work, --lunch or --break. Nothing recorded."
            ));
        }
        (None, None) => {}
    }
    Ok(())
}
