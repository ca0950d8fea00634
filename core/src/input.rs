use chrono::{NaiveTime, Timelike};

use crate::error::{ScheduleError, ScheduleResult};
use crate::model::activity::{Activity, ClockTime};
use crate::model::schedule::{FIRST_DAY, LAST_DAY};

const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Raw, user-typed fields of an activity before any checking.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ActivityDraft {
    pub name: String,
    pub day: String,
    pub start: String,
    pub end: String,
    pub location: String,
}

impl ActivityDraft {
    /// Checks every field and builds the activity.
    ///
    /// Names may not contain commas or line breaks and locations may not
    /// contain line breaks, otherwise the saved file could not be read back.
    pub fn validate(&self) -> ScheduleResult<Activity> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ScheduleError::InvalidInput("activity name is required".to_string()));
        }
        if name.contains(',') {
            return Err(ScheduleError::InvalidInput(format!(
                "activity name '{}' must not contain commas",
                name
            )));
        }
        if has_line_break(name) || has_line_break(&self.location) {
            return Err(ScheduleError::InvalidInput(
                "name and location must fit on one line".to_string(),
            ));
        }

        let day = parse_day(&self.day)?;
        let start = parse_clock(&self.start)?;
        let end = parse_clock(&self.end)?;
        check_ranges(day, start, end).map_err(ScheduleError::InvalidInput)?;

        Ok(Activity::new(name, day, start, end, self.location.trim()))
    }
}

/// Trims a new schedule name. The name is the header line of the saved
/// file, so it may not span lines.
pub fn validate_schedule_name(input: &str) -> ScheduleResult<String> {
    let name = input.trim();
    if has_line_break(name) {
        return Err(ScheduleError::InvalidInput(
            "schedule name must fit on one line".to_string(),
        ));
    }
    Ok(name.to_string())
}

fn has_line_break(s: &str) -> bool {
    s.contains('\n') || s.contains('\r')
}

/// Range and ordering checks shared by user input and file records.
pub(crate) fn check_ranges(day: u8, start: ClockTime, end: ClockTime) -> Result<(), String> {
    if !(FIRST_DAY..=LAST_DAY).contains(&day) {
        return Err(format!("day {} is out of range 1-7", day));
    }
    for time in [start, end] {
        if time.hour > 23 || time.minute > 59 {
            return Err(format!("time {}:{} is out of range", time.hour, time.minute));
        }
    }
    if start >= end {
        return Err(format!("end {} must be after start {}", end, start));
    }
    Ok(())
}

/// Parses a day as a number (`3`) or an English weekday name or unambiguous
/// prefix (`wed`, `Wednesday`, `th`).
///
/// Numbers are returned as typed, out-of-range values included, so that
/// day-scoped queries can report them as invalid days.
pub fn parse_day(input: &str) -> ScheduleResult<u8> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ScheduleError::InvalidInput("day is required".to_string()));
    }

    if input.chars().all(|c| c.is_ascii_digit()) {
        return input.parse::<u8>().map_err(|_| {
            ScheduleError::InvalidInput(format!("day '{}' is out of range 1-7", input))
        });
    }

    let key = input.to_lowercase();
    let matches: Vec<usize> = DAY_NAMES
        .iter()
        .enumerate()
        .filter(|(_, name)| name.starts_with(key.as_str()))
        .map(|(i, _)| i)
        .collect();

    match matches.as_slice() {
        [i] => Ok(*i as u8 + FIRST_DAY),
        [] => Err(ScheduleError::InvalidInput(format!("unknown day: '{}'", input))),
        _ => Err(ScheduleError::InvalidInput(format!(
            "ambiguous day: '{}' matches {:?}",
            input,
            matches.iter().map(|&i| DAY_NAMES[i]).collect::<Vec<_>>()
        ))),
    }
}

/// Parses `HH:MM` (24 hour clock).
pub fn parse_clock(input: &str) -> ScheduleResult<ClockTime> {
    let input = input.trim();
    let time = NaiveTime::parse_from_str(input, "%H:%M").map_err(|_| {
        ScheduleError::InvalidInput(format!("invalid time '{}', expected HH:MM", input))
    })?;
    Ok(ClockTime::new(time.hour() as u8, time.minute() as u8))
}

/// Parses a one-line entry such as `Math mon 08:00-09:30 @Room A`.
///
/// The last two words before the optional `@location` are the day and the
/// time range, everything in front of them is the name.
pub fn parse_quick_entry(input: &str) -> ScheduleResult<ActivityDraft> {
    let (head, location) = match input.split_once('@') {
        Some((head, location)) => (head, location.trim()),
        None => (input, ""),
    };

    let words: Vec<&str> = head.split_whitespace().collect();
    let [name_words @ .., day, range] = words.as_slice() else {
        return Err(ScheduleError::InvalidInput(
            "expected: NAME DAY HH:MM-HH:MM [@LOCATION]".to_string(),
        ));
    };
    if name_words.is_empty() {
        return Err(ScheduleError::InvalidInput("activity name is required".to_string()));
    }

    let (start, end) = range.split_once('-').ok_or_else(|| {
        ScheduleError::InvalidInput(format!("invalid time range '{}', expected HH:MM-HH:MM", range))
    })?;

    Ok(ActivityDraft {
        name: name_words.join(" "),
        day: day.to_string(),
        start: start.to_string(),
        end: end.to_string(),
        location: location.to_string(),
    })
}
