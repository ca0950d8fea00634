//! Line-based text format of a schedule.
//!
//! ```text
//! My Schedule
//! Math,1,8,0,9,30,Room A
//! Physics,1,9,30,10,0,Room B
//! ```
//!
//! The first line is the display name, every following line is one
//! [`Activity::to_record`]. Fields are split at the first six commas only,
//! so the location may contain commas but the name may not.

use crate::error::{ScheduleError, ScheduleResult};
use crate::input::check_ranges;
use crate::model::activity::{Activity, ClockTime};
use crate::model::schedule::Schedule;

const FIELD_COUNT: usize = 7;

impl Schedule {
    /// Header line followed by one record per activity, in insertion order.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.len() + 1);
        lines.push(self.name().to_string());
        lines.extend(self.activities().iter().map(Activity::to_record));
        lines
    }

    /// Builds a schedule from [`Schedule::to_lines`] output.
    ///
    /// Parsing is all-or-nothing: the first bad record aborts with its
    /// 1-based line number. Records are not checked against each other for
    /// overlaps.
    pub fn from_lines<I, S>(lines: I) -> ScheduleResult<Schedule>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = lines.into_iter();
        let name = lines
            .next()
            .map(|l| strip_cr(l.as_ref()).to_string())
            .unwrap_or_default();

        let mut activities = Vec::new();
        for (idx, line) in lines.enumerate() {
            let line = strip_cr(line.as_ref());
            if line.trim().is_empty() {
                continue;
            }
            // header is line 1
            let line_no = idx + 2;
            let activity =
                parse_record(line).map_err(|reason| ScheduleError::malformed(line_no, reason))?;
            activities.push(activity);
        }

        Ok(Schedule::from_parts(name, activities))
    }
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

pub fn parse_record(line: &str) -> Result<Activity, String> {
    let fields: Vec<&str> = line.splitn(FIELD_COUNT, ',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} comma-separated fields, found {}",
            FIELD_COUNT,
            fields.len()
        ));
    }

    let name = fields[0];
    if name.trim().is_empty() {
        return Err("activity name is empty".to_string());
    }

    let day = parse_number(fields[1], "day")?;
    let start = ClockTime::new(
        parse_number(fields[2], "start hour")?,
        parse_number(fields[3], "start minute")?,
    );
    let end = ClockTime::new(
        parse_number(fields[4], "end hour")?,
        parse_number(fields[5], "end minute")?,
    );
    check_ranges(day, start, end)?;

    Ok(Activity::new(name, day, start, end, fields[6]))
}

fn parse_number(field: &str, what: &str) -> Result<u8, String> {
    field
        .trim()
        .parse::<u8>()
        .map_err(|_| format!("{} '{}' is not a valid number", what, field))
}
