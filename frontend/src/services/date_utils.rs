use chrono::{Datelike, Duration, Months, NaiveDate};
use shared::DayAvailability;

/// Current date in `YYYY-MM-DD`, from the browser clock.
pub fn today() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1, // JavaScript months are 0-indexed
        now.get_date()
    )
}

/// Current month in `YYYY-MM`, from the browser clock.
pub fn current_month() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    format!("{:04}-{:02}", now.get_full_year(), now.get_month() + 1)
}

fn first_of_month(month: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").ok()
}

/// Monday-based column of the 1st of the month (Mon = 0 .. Sun = 6).
pub fn first_weekday_offset(month: &str) -> usize {
    first_of_month(month)
        .map(|d| d.weekday().num_days_from_monday() as usize)
        .unwrap_or(0)
}

/// Shift a `YYYY-MM` month string by whole calendar months.
pub fn shift_month(month: &str, delta: i32) -> String {
    let Some(first) = first_of_month(month) else {
        return month.to_string();
    };
    let shifted = if delta >= 0 {
        first.checked_add_months(Months::new(delta as u32))
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted
        .map(|d| format!("{:04}-{:02}", d.year(), d.month()))
        .unwrap_or_else(|| month.to_string())
}

/// Shift a `YYYY-MM-DD` date string by days.
pub fn add_days(date: &str, days: i64) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| (d + Duration::days(days)).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| date.to_string())
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid",
    }
}

/// Heading for the calendar, e.g. `"March 2025"`.
pub fn month_title(month: &str) -> String {
    first_of_month(month)
        .map(|d| format!("{} {}", month_name(d.month()), d.year()))
        .unwrap_or_else(|| month.to_string())
}

/// Day-of-month number of a cell, parsed from the last two characters of the
/// date string.
pub fn day_number(date: &str) -> u32 {
    date.len()
        .checked_sub(2)
        .and_then(|start| date.get(start..))
        .and_then(|tail| tail.parse().ok())
        .unwrap_or(0)
}

/// Lay a month's availability entries out as a 7-column grid.
///
/// Leading `None` cells align the first entry to the Monday-based weekday of
/// the 1st; entries are placed sequentially in the order the backend sent
/// them; trailing `None` cells pad the total to whole weeks.
pub fn build_month_grid(month: &str, days: &[DayAvailability]) -> Vec<Option<DayAvailability>> {
    let lead = first_weekday_offset(month);
    let mut grid: Vec<Option<DayAvailability>> = Vec::with_capacity(lead + days.len() + 6);
    grid.resize(lead, None);
    grid.extend(days.iter().cloned().map(Some));
    while grid.len() % 7 != 0 {
        grid.push(None);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn full_month(month: &str, len: u32) -> Vec<DayAvailability> {
        (1..=len)
            .map(|day| DayAvailability {
                date: format!("{month}-{day:02}"),
                free: 1,
            })
            .collect()
    }

    #[wasm_bindgen_test]
    fn first_weekday_is_monday_based() {
        // 2025-03-01 is a Saturday: JS weekday 6, Monday-based column 5.
        assert_eq!(first_weekday_offset("2025-03"), 5);
        // 2025-09-01 is a Monday.
        assert_eq!(first_weekday_offset("2025-09"), 0);
        // 2025-06-01 is a Sunday.
        assert_eq!(first_weekday_offset("2025-06"), 6);
    }

    #[wasm_bindgen_test]
    fn grid_is_whole_weeks_with_first_day_in_place() {
        let days = full_month("2025-03", 31);
        let grid = build_month_grid("2025-03", &days);
        assert_eq!(grid.len() % 7, 0);
        assert_eq!(grid.len(), 42); // 5 leading + 31 days + 6 trailing
        assert!(grid[..5].iter().all(Option::is_none));
        assert_eq!(grid[5].as_ref().unwrap().date, "2025-03-01");
        assert_eq!(grid[35].as_ref().unwrap().date, "2025-03-31");
        assert!(grid[36..].iter().all(Option::is_none));
    }

    #[wasm_bindgen_test]
    fn grid_places_entries_sequentially() {
        // A short or gapped list must not desynchronize the layout: cells
        // follow list order, whatever the entries' own day numbers are.
        let days = vec![
            DayAvailability { date: "2025-03-10".into(), free: 2 },
            DayAvailability { date: "2025-03-12".into(), free: 0 },
        ];
        let grid = build_month_grid("2025-03", &days);
        assert_eq!(grid.len(), 7);
        assert_eq!(grid[5].as_ref().unwrap().date, "2025-03-10");
        assert_eq!(grid[6].as_ref().unwrap().date, "2025-03-12");
    }

    #[wasm_bindgen_test]
    fn empty_availability_yields_empty_grid_for_monday_start() {
        assert!(build_month_grid("2025-09", &[]).is_empty());
        // Non-Monday start still pads the lead-in to a full week.
        assert_eq!(build_month_grid("2025-03", &[]).len(), 7);
    }

    #[wasm_bindgen_test]
    fn month_shift_rolls_over_year_boundaries() {
        assert_eq!(shift_month("2025-01", -1), "2024-12");
        assert_eq!(shift_month("2025-12", 1), "2026-01");
        assert_eq!(shift_month("2025-03", 1), "2025-04");
        assert_eq!(shift_month("not-a-month", 1), "not-a-month");
    }

    #[wasm_bindgen_test]
    fn day_number_reads_last_two_characters() {
        assert_eq!(day_number("2025-03-09"), 9);
        assert_eq!(day_number("2025-03-31"), 31);
        assert_eq!(day_number(""), 0);
    }

    #[wasm_bindgen_test]
    fn add_days_crosses_month_boundaries() {
        assert_eq!(add_days("2025-03-30", 14), "2025-04-13");
        assert_eq!(add_days("2025-01-01", -1), "2024-12-31");
    }

    #[wasm_bindgen_test]
    fn month_title_is_english() {
        assert_eq!(month_title("2025-03"), "March 2025");
    }
}
