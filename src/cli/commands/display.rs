use crate::config::Config;
use crate::core::logic::Core;
use crate::db::store::ClockStore;
use crate::errors::AppResult;
use crate::models::{activity::Activity, summary::DaySummary};
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_total;
use crate::utils::date;
use crate::utils::formatting::{format_record, parts2readable};

/// Print every record, numbered from 1. The full date is shown only on the
/// first record of each day.
pub fn show_records<S: ClockStore + ?Sized>(store: &S, cfg: &Config) -> AppResult<()> {
    let events = store.all_events()?;

    if events.is_empty() {
        info("No clock records.");
        return Ok(());
    }

    let mut last_day = None;
    for (i, ev) in events.iter().enumerate() {
        let day = ev.timestamp.date();
        let show_date = last_day != Some(day);
        println!(
            "{:02}: {}",
            i + 1,
            format_record(ev, show_date, &cfg.date_format, &cfg.time_format)
        );
        last_day = Some(day);
    }

    Ok(())
}

pub fn show_today<S: ClockStore + ?Sized>(store: &S) -> AppResult<()> {
    let summary = Core::summarize(store, date::today())?;
    print_summary(&summary);
    Ok(())
}

pub fn show_week<S: ClockStore + ?Sized>(store: &S) -> AppResult<()> {
    for summary in Core::summarize_week(store, date::today())? {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &DaySummary) {
    header(summary.date.format("%Y-%m-%d (%a)"));
    for activity in Activity::ALL {
        let text = parts2readable(summary.parts(activity));
        println!(
            "Total {:<5}: {}",
            activity.name(),
            colorize_total(&text, summary.seconds(activity) == 0)
        );
    }
    println!();
}
