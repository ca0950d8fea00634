use crate::error::{ScheduleError, ScheduleResult};
use crate::model::activity::{Activity, ClockTime};

pub const DEFAULT_SCHEDULE_NAME: &str = "My Schedule";

pub const FIRST_DAY: u8 = 1;
pub const LAST_DAY: u8 = 7;

/// Free slots are only searched inside the daytime window [08:00, 22:00).
pub const DAY_WINDOW_START: u16 = 8 * 60;
pub const DAY_WINDOW_END: u16 = 22 * 60;

/// An uncovered interval `[start, end)` in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeSlot {
    pub start: u16,
    pub end: u16,
}

impl FreeSlot {
    pub fn duration_minutes(&self) -> u16 {
        self.end - self.start
    }

    pub fn start_time(&self) -> ClockTime {
        ClockTime::from_minutes(self.start)
    }

    pub fn end_time(&self) -> ClockTime {
        ClockTime::from_minutes(self.end)
    }
}

pub fn ensure_valid_day(day: u8) -> ScheduleResult<()> {
    if (FIRST_DAY..=LAST_DAY).contains(&day) {
        Ok(())
    } else {
        Err(ScheduleError::InvalidDay(day))
    }
}

/// Named, ordered collection of activities for one week.
///
/// No two stored activities overlap, as long as they were all inserted
/// through [`Schedule::add`]. Activities loaded from a file are taken as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    name: String,
    activities: Vec<Activity>,
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule::new(DEFAULT_SCHEDULE_NAME)
    }
}

impl Schedule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            activities: Vec::new(),
        }
    }

    pub(crate) fn from_parts(name: String, activities: Vec<Activity>) -> Self {
        Self { name, activities }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Activities in insertion order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Appends `activity` unless it overlaps something already scheduled.
    ///
    /// Only the first conflicting activity (in insertion order) is reported.
    pub fn add(&mut self, activity: Activity) -> ScheduleResult<()> {
        if let Some(existing) = self.find_conflict(&activity) {
            return Err(ScheduleError::Conflict {
                existing: Box::new(existing.clone()),
                candidate: Box::new(activity),
            });
        }

        self.activities.push(activity);
        Ok(())
    }

    pub fn find_conflict(&self, candidate: &Activity) -> Option<&Activity> {
        self.activities.iter().find(|a| a.overlaps_with(candidate))
    }

    /// Removes the first activity named exactly `name`.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.activities.iter().position(|a| a.name() == name) {
            Some(pos) => {
                self.activities.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Removes the first activity equal to `activity` in every field.
    pub fn remove_exact(&mut self, activity: &Activity) -> bool {
        match self.activities.iter().position(|a| a == activity) {
            Some(pos) => {
                self.activities.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Activities on `day`, ascending by start time. Equal starts keep
    /// insertion order.
    pub fn activities_for_day(&self, day: u8) -> ScheduleResult<Vec<&Activity>> {
        ensure_valid_day(day)?;
        Ok(self.sorted_day(day))
    }

    fn sorted_day(&self, day: u8) -> Vec<&Activity> {
        let mut day_activities: Vec<&Activity> =
            self.activities.iter().filter(|a| a.day() == day).collect();
        // sort_by_key is stable
        day_activities.sort_by_key(|a| a.start().minutes());
        day_activities
    }

    /// Every day of the week in order, each with its sorted activities.
    pub fn week(&self) -> Vec<(u8, Vec<&Activity>)> {
        (FIRST_DAY..=LAST_DAY)
            .map(|day| (day, self.sorted_day(day)))
            .collect()
    }

    /// Gaps between activities on `day`, clipped to the daytime window.
    pub fn free_slots_for_day(&self, day: u8) -> ScheduleResult<Vec<FreeSlot>> {
        let day_activities = self.activities_for_day(day)?;

        let mut slots = Vec::new();
        let mut cursor = DAY_WINDOW_START;

        for activity in day_activities {
            let gap_end = activity.start().minutes().min(DAY_WINDOW_END);
            if gap_end > cursor {
                slots.push(FreeSlot { start: cursor, end: gap_end });
            }
            // max() keeps hand-edited files with nested activities from
            // producing a slot inside a covered interval
            cursor = cursor.max(activity.end().minutes());
            if cursor >= DAY_WINDOW_END {
                break;
            }
        }

        if cursor < DAY_WINDOW_END {
            slots.push(FreeSlot { start: cursor, end: DAY_WINDOW_END });
        }

        Ok(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn act(name: &str, day: u8, start: (u8, u8), end: (u8, u8)) -> Activity {
        Activity::new(
            name,
            day,
            ClockTime::new(start.0, start.1),
            ClockTime::new(end.0, end.1),
            "",
        )
    }

    fn slot(start: u16, end: u16) -> FreeSlot {
        FreeSlot { start, end }
    }

    #[test]
    fn test_add_rejects_overlap() {
        let mut schedule = Schedule::default();
        schedule
            .add(Activity::new("Math", 1, ClockTime::new(8, 0), ClockTime::new(9, 30), "Room A"))
            .unwrap();

        let err = schedule
            .add(Activity::new("Physics", 1, ClockTime::new(9, 0), ClockTime::new(10, 0), "Room B"))
            .unwrap_err();

        match err {
            ScheduleError::Conflict { candidate, existing } => {
                assert_eq!(candidate.name(), "Physics");
                assert_eq!(existing.name(), "Math");
            }
            other => panic!("expected conflict, got {:?}", other),
        }
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_add_accepts_touching_boundary() {
        let mut schedule = Schedule::default();
        schedule
            .add(Activity::new("Math", 1, ClockTime::new(8, 0), ClockTime::new(9, 30), "Room A"))
            .unwrap();
        let physics =
            Activity::new("Physics", 1, ClockTime::new(9, 30), ClockTime::new(10, 0), "Room B");
        schedule.add(physics).unwrap();
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_add_reports_first_conflict_in_insertion_order() {
        let mut schedule = Schedule::default();
        schedule.add(act("Late", 2, (11, 0), (12, 0))).unwrap();
        schedule.add(act("Early", 2, (9, 0), (10, 0))).unwrap();

        let err = schedule.add(act("Long", 2, (8, 0), (13, 0))).unwrap_err();
        match err {
            ScheduleError::Conflict { existing, .. } => assert_eq!(existing.name(), "Late"),
            other => panic!("expected conflict, got {:?}", other),
        }
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_same_time_other_day_is_accepted() {
        let mut schedule = Schedule::default();
        schedule.add(act("Math", 1, (8, 0), (9, 30))).unwrap();
        schedule.add(act("Math", 2, (8, 0), (9, 30))).unwrap();
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut schedule = Schedule::default();
        schedule.add(act("Math", 1, (8, 0), (9, 30))).unwrap();
        schedule.add(act("Physics", 1, (10, 0), (11, 0))).unwrap();

        assert!(schedule.remove("Math"));
        let names: Vec<&str> = schedule.activities().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["Physics"]);

        assert!(!schedule.remove("Math"));
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_remove_duplicates_and_case() {
        let mut schedule = Schedule::default();
        schedule.add(act("Gym", 1, (7, 0), (8, 0))).unwrap();
        schedule.add(act("Gym", 3, (7, 0), (8, 0))).unwrap();

        assert!(!schedule.remove("gym"));
        assert!(schedule.remove("Gym"));
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.activities()[0].day(), 3);
    }

    #[test]
    fn test_remove_exact_keeps_same_named_activities() {
        let mut schedule = Schedule::default();
        schedule.add(act("Gym", 1, (7, 0), (8, 0))).unwrap();
        schedule.add(act("Gym", 3, (18, 0), (19, 0))).unwrap();

        assert!(schedule.remove_exact(&act("Gym", 3, (18, 0), (19, 0))));
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.activities()[0].day(), 1);

        // same name and day, different time
        assert!(!schedule.remove_exact(&act("Gym", 1, (7, 0), (8, 30))));
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_activities_for_day_sorted_and_stable() {
        // equal starts can only come from a loaded file
        let schedule = Schedule::from_parts(
            "Loaded".to_string(),
            vec![
                act("C", 5, (14, 0), (15, 0)),
                act("A", 5, (9, 0), (10, 0)),
                act("Other", 4, (8, 0), (9, 0)),
                act("B", 5, (9, 0), (9, 30)),
            ],
        );

        let names: Vec<&str> = schedule
            .activities_for_day(5)
            .unwrap()
            .iter()
            .map(|a| a.name())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        // storage order untouched
        assert_eq!(schedule.activities()[0].name(), "C");
    }

    #[test]
    fn test_invalid_day_rejected() {
        let mut schedule = Schedule::default();
        schedule.add(act("Math", 1, (8, 0), (9, 30))).unwrap();
        let before = schedule.clone();

        assert!(matches!(schedule.activities_for_day(9), Err(ScheduleError::InvalidDay(9))));
        assert!(matches!(schedule.free_slots_for_day(9), Err(ScheduleError::InvalidDay(9))));
        assert!(matches!(schedule.free_slots_for_day(0), Err(ScheduleError::InvalidDay(0))));
        assert_eq!(schedule, before);
    }

    #[test]
    fn test_free_slots_empty_day() {
        let schedule = Schedule::default();
        assert_eq!(schedule.free_slots_for_day(3).unwrap(), vec![slot(480, 1320)]);
    }

    #[test]
    fn test_free_slots_single_activity() {
        let mut schedule = Schedule::default();
        schedule.add(act("Meeting", 2, (10, 0), (11, 0))).unwrap();
        assert_eq!(
            schedule.free_slots_for_day(2).unwrap(),
            vec![slot(480, 600), slot(660, 1320)]
        );
    }

    #[test]
    fn test_free_slots_between_activities() {
        let mut schedule = Schedule::default();
        schedule.add(act("Lunch", 1, (13, 0), (14, 0))).unwrap();
        schedule.add(act("Math", 1, (8, 0), (9, 30))).unwrap();
        schedule.add(act("Physics", 1, (9, 30), (11, 0))).unwrap();

        assert_eq!(
            schedule.free_slots_for_day(1).unwrap(),
            vec![slot(660, 780), slot(840, 1320)]
        );
    }

    #[test]
    fn test_free_slots_clipped_to_window() {
        let mut schedule = Schedule::default();
        schedule.add(act("Run", 6, (6, 0), (7, 0))).unwrap();
        schedule.add(act("Breakfast", 6, (7, 30), (8, 30))).unwrap();
        schedule.add(act("Party", 6, (21, 0), (23, 30))).unwrap();

        assert_eq!(schedule.free_slots_for_day(6).unwrap(), vec![slot(510, 1260)]);
    }

    #[test]
    fn test_free_slots_fully_booked() {
        let mut schedule = Schedule::default();
        schedule.add(act("Marathon", 7, (7, 0), (22, 0))).unwrap();
        assert!(schedule.free_slots_for_day(7).unwrap().is_empty());
    }

    #[test]
    fn test_free_slots_outside_window_only() {
        let mut schedule = Schedule::default();
        schedule.add(act("Night shift", 4, (0, 0), (6, 0))).unwrap();
        schedule.add(act("Late show", 4, (22, 0), (23, 59))).unwrap();
        assert_eq!(schedule.free_slots_for_day(4).unwrap(), vec![slot(480, 1320)]);
    }

    #[test]
    fn test_free_slots_ignore_nested_loaded_activities() {
        let schedule = Schedule::from_parts(
            "Loaded".to_string(),
            vec![act("Outer", 1, (9, 0), (12, 0)), act("Inner", 1, (10, 0), (10, 30))],
        );
        assert_eq!(
            schedule.free_slots_for_day(1).unwrap(),
            vec![slot(480, 540), slot(720, 1320)]
        );
    }

    #[test]
    fn test_free_slots_are_positive_and_inside_window() {
        let mut schedule = Schedule::default();
        for (i, hour) in [5u8, 8, 10, 12, 15, 19, 21].iter().enumerate() {
            schedule
                .add(act(&format!("A{}", i), 2, (*hour, 0), (*hour + 1, 15)))
                .unwrap();
        }
        for free in schedule.free_slots_for_day(2).unwrap() {
            assert!(free.start < free.end);
            assert!(free.start >= DAY_WINDOW_START);
            assert!(free.end <= DAY_WINDOW_END);
        }
    }

    #[test]
    fn test_week_groups_every_day() {
        let mut schedule = Schedule::default();
        schedule.add(act("Late", 1, (18, 0), (19, 0))).unwrap();
        schedule.add(act("Early", 1, (8, 0), (9, 0))).unwrap();
        schedule.add(act("Sunday", 7, (10, 0), (11, 0))).unwrap();

        let week = schedule.week();
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].0, 1);
        let monday: Vec<&str> = week[0].1.iter().map(|a| a.name()).collect();
        assert_eq!(monday, vec!["Early", "Late"]);
        assert!(week[1].1.is_empty());
        assert_eq!(week[6].1.len(), 1);
    }

    #[test]
    fn test_rename() {
        let mut schedule = Schedule::default();
        assert_eq!(schedule.name(), DEFAULT_SCHEDULE_NAME);
        schedule.rename("Spring term");
        assert_eq!(schedule.name(), "Spring term");
    }
}
