use std::fmt;

pub const MINUTES_PER_HOUR: u16 = 60;

/// Wall-clock time within a single day, without seconds.
///
/// Ordering follows `(hour, minute)`, which is the same as ordering by
/// minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    pub const fn from_minutes(minutes: u16) -> Self {
        Self {
            hour: (minutes / MINUTES_PER_HOUR) as u8,
            minute: (minutes % MINUTES_PER_HOUR) as u8,
        }
    }

    /// Minutes since midnight.
    pub const fn minutes(&self) -> u16 {
        self.hour as u16 * MINUTES_PER_HOUR + self.minute as u16
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// One timed event on a single weekday.
///
/// Fields are fixed at construction. `new` trusts its arguments: range and
/// ordering checks belong to the caller (see [`crate::input::ActivityDraft`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    name: String,
    day: u8,
    start: ClockTime,
    end: ClockTime,
    location: String,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        day: u8,
        start: ClockTime,
        end: ClockTime,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            day,
            start,
            end,
            location: location.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1 = Monday ... 7 = Sunday.
    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn start(&self) -> ClockTime {
        self.start
    }

    pub fn end(&self) -> ClockTime {
        self.end
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Half-open interval test: activities that only touch do not overlap.
    pub fn overlaps_with(&self, other: &Activity) -> bool {
        if self.day != other.day {
            return false;
        }

        let (start_a, end_a) = (self.start.minutes(), self.end.minutes());
        let (start_b, end_b) = (other.start.minutes(), other.end.minutes());

        start_a < end_b && start_b < end_a
    }

    /// Single-line record: `name,day,startHour,startMinute,endHour,endMinute,location`.
    ///
    /// Nothing is escaped, so a comma inside `name` will not survive a reload.
    pub fn to_record(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.name,
            self.day,
            self.start.hour,
            self.start.minute,
            self.end.hour,
            self.end.minute,
            self.location
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(day: u8, start: (u8, u8), end: (u8, u8)) -> Activity {
        Activity::new(
            "Test",
            day,
            ClockTime::new(start.0, start.1),
            ClockTime::new(end.0, end.1),
            "",
        )
    }

    #[test]
    fn test_clock_minutes() {
        assert_eq!(ClockTime::new(0, 0).minutes(), 0);
        assert_eq!(ClockTime::new(8, 0).minutes(), 480);
        assert_eq!(ClockTime::new(23, 59).minutes(), 1439);
        assert_eq!(ClockTime::from_minutes(1320), ClockTime::new(22, 0));
        assert_eq!(ClockTime::new(9, 5).to_string(), "09:05");
        assert!(ClockTime::new(9, 59) < ClockTime::new(10, 0));
    }

    #[test]
    fn test_overlap_same_day() {
        let math = activity(1, (8, 0), (9, 30));
        let physics = activity(1, (9, 0), (10, 0));
        assert!(math.overlaps_with(&physics));
        assert!(physics.overlaps_with(&math));
    }

    #[test]
    fn test_touching_intervals_do_not_overlap() {
        let math = activity(1, (8, 0), (9, 30));
        let physics = activity(1, (9, 30), (10, 0));
        assert!(!math.overlaps_with(&physics));
        assert!(!physics.overlaps_with(&math));
    }

    #[test]
    fn test_contained_interval_overlaps() {
        let outer = activity(4, (8, 0), (12, 0));
        let inner = activity(4, (9, 0), (9, 1));
        assert!(outer.overlaps_with(&inner));
        assert!(inner.overlaps_with(&outer));
    }

    #[test]
    fn test_different_days_never_overlap() {
        let monday = activity(1, (8, 0), (9, 30));
        let tuesday = activity(2, (8, 0), (9, 30));
        assert!(!monday.overlaps_with(&tuesday));
    }

    #[test]
    fn test_overlap_is_symmetric_over_grid() {
        let starts = [0u16, 30, 60, 90, 120];
        for &sa in &starts {
            for &sb in &starts {
                for len_a in [15u16, 30, 60] {
                    for len_b in [15u16, 30, 60] {
                        let a = Activity::new(
                            "a",
                            3,
                            ClockTime::from_minutes(sa),
                            ClockTime::from_minutes(sa + len_a),
                            "",
                        );
                        let b = Activity::new(
                            "b",
                            3,
                            ClockTime::from_minutes(sb),
                            ClockTime::from_minutes(sb + len_b),
                            "",
                        );
                        let expected = sa.max(sb) < (sa + len_a).min(sb + len_b);
                        assert_eq!(a.overlaps_with(&b), expected);
                        assert_eq!(a.overlaps_with(&b), b.overlaps_with(&a));
                    }
                }
            }
        }
    }

    #[test]
    fn test_to_record() {
        let math = Activity::new("Math", 1, ClockTime::new(8, 0), ClockTime::new(9, 30), "Room A");
        assert_eq!(math.to_record(), "Math,1,8,0,9,30,Room A");

        let nowhere = Activity::new("Run", 7, ClockTime::new(6, 5), ClockTime::new(7, 0), "");
        assert_eq!(nowhere.to_record(), "Run,7,6,5,7,0,");
    }
}
