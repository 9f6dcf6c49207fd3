//! Static data for pre-existing named holiday calendars.
//!

pub mod all;
pub mod br;
pub mod bus;

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::error::TimelineError;

/// Names of the calendars available to [`Cal::try_from_name`](crate::scheduling::Cal::try_from_name).
pub const CALENDAR_NAMES: &[&str] = &["all", "br", "bus"];

fn unknown(name: &str) -> TimelineError {
    TimelineError::UnknownCalendar {
        name: name.to_string(),
    }
}

pub(crate) fn get_weekmask_by_name(name: &str) -> Result<Vec<u8>, TimelineError> {
    let hmap: HashMap<&str, &[u8]> = HashMap::from([
        ("all", all::WEEKMASK),
        ("br", br::WEEKMASK),
        ("bus", bus::WEEKMASK),
    ]);
    match hmap.get(name) {
        None => Err(unknown(name)),
        Some(value) => Ok(value.to_vec()),
    }
}

pub(crate) fn get_coverage_by_name(name: &str) -> Result<Option<(i32, i32)>, TimelineError> {
    let hmap: HashMap<&str, Option<(i32, i32)>> = HashMap::from([
        ("all", all::COVERAGE),
        ("br", br::COVERAGE),
        ("bus", bus::COVERAGE),
    ]);
    hmap.get(name).copied().ok_or_else(|| unknown(name))
}

pub(crate) fn get_holidays_by_name(name: &str) -> Result<Vec<NaiveDate>, TimelineError> {
    let hmap: HashMap<&str, &[&str]> = HashMap::from([
        ("all", all::HOLIDAYS),
        ("br", br::HOLIDAYS),
        ("bus", bus::HOLIDAYS),
    ]);
    match hmap.get(name) {
        None => Err(unknown(name)),
        Some(value) => value
            .iter()
            .map(|x| {
                NaiveDate::parse_from_str(x, "%Y-%m-%d").map_err(|e| {
                    TimelineError::invalid_argument(format!(
                        "bad holiday '{x}' in calendar '{name}': {e}"
                    ))
                })
            })
            .collect(),
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::ndt;
    use chrono::Datelike;

    #[test]
    fn test_get_weekmask() {
        let result = get_weekmask_by_name("bus").unwrap();
        assert_eq!(result, vec![5, 6]);
        let result = get_weekmask_by_name("all").unwrap();
        assert_eq!(result, Vec::<u8>::new());
    }

    #[test]
    fn test_get_holidays() {
        let result = get_holidays_by_name("bus").unwrap();
        assert_eq!(result, vec![]);
    }

    #[test]
    fn test_unknown_name() {
        assert!(get_weekmask_by_name("ldn").is_err());
        assert!(get_holidays_by_name("ldn").is_err());
        assert!(get_coverage_by_name("ldn").is_err());
    }

    #[test]
    fn test_br_holidays_parse_and_cover_every_year() {
        let hols = get_holidays_by_name("br").unwrap();
        let (first, last) = get_coverage_by_name("br").unwrap().unwrap();
        for year in first..=last {
            let n = hols.iter().filter(|d| d.year() == year).count();
            let expected = if year >= 2024 { 10 } else { 9 };
            assert_eq!(n, expected, "holiday count for {year}");
        }
        assert!(hols.iter().all(|d| (first..=last).contains(&d.year())));
    }

    #[test]
    fn test_br_good_friday() {
        let hols = get_holidays_by_name("br").unwrap();
        for gf in [ndt(2024, 3, 29), ndt(2025, 4, 18), ndt(2026, 4, 3)] {
            assert!(hols.contains(&gf), "missing Good Friday {gf}");
        }
    }

    #[test]
    fn test_names_are_complete() {
        for name in CALENDAR_NAMES {
            assert!(get_weekmask_by_name(name).is_ok());
        }
    }
}
