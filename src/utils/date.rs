use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Local midnight opening `day`.
pub fn day_start(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// Half-open `[start, end)` window covering `day`.
pub fn day_bounds(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = day_start(day);
    (start, start + TimeDelta::days(1))
}

/// The seven calendar days ending with `last` (inclusive), oldest first.
pub fn week_ending(last: NaiveDate) -> Vec<NaiveDate> {
    (0..7)
        .rev()
        .map(|back| last - TimeDelta::days(back))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_ending_spans_seven_days_oldest_first() {
        let last = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let days = week_ending(last);

        assert_eq!(days.len(), 7);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2025, 2, 24).unwrap());
        assert_eq!(days[6], last);
    }

    #[test]
    fn day_bounds_cover_exactly_one_day() {
        let day = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let (start, end) = day_bounds(day);

        assert_eq!(start, day.and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(end - start, TimeDelta::days(1));
    }
}
