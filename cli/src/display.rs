use chrono::{Datelike, Local};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use weekplan_core::{Activity, ActivityDto, ClockTime, DayScheduleDto, FreeSlotDto, WeekDto};
use weekplan_core::{DAY_WINDOW_END, DAY_WINDOW_START};

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn day_name(day: u8) -> &'static str {
    match day {
        1..=7 => DAY_NAMES[day as usize - 1],
        _ => "?",
    }
}

pub fn today() -> u8 {
    Local::now().weekday().number_from_monday() as u8
}

pub fn describe_activity(activity: &Activity) -> String {
    let mut line = format!(
        "{} ({} {} - {})",
        activity.name(),
        day_name(activity.day()),
        activity.start(),
        activity.end()
    );
    if !activity.location().is_empty() {
        line.push_str(" at ");
        line.push_str(activity.location());
    }
    line
}

pub fn print_conflict(candidate: &Activity, existing: &Activity) {
    println!("Error: schedule conflict detected.");
    println!("  New activity:   {}", describe_activity(candidate));
    println!("  Conflicts with: {}", describe_activity(existing));
}

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Activity")]
    name: String,
    #[tabled(rename = "Location")]
    location: String,
}

fn activity_table(activities: &[ActivityDto]) -> Table {
    let rows: Vec<ActivityRow> = activities
        .iter()
        .map(|a| ActivityRow {
            start: a.start.clone(),
            end: a.end.clone(),
            name: a.name.clone(),
            location: if a.location.is_empty() { "-".to_string() } else { a.location.clone() },
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    table
}

pub fn print_week(week: &WeekDto) {
    if week.is_empty() {
        println!("The schedule '{}' is empty.", week.name);
        return;
    }

    println!("\n\x1b[1;36m=== {} ===\x1b[0m", week.name);
    for day in &week.days {
        println!("\n{}:", day_name(day.day));
        if day.activities.is_empty() {
            println!("  No activities.");
        } else {
            println!("{}", activity_table(&day.activities));
        }
    }
}

pub fn print_day(day: &DayScheduleDto) {
    println!("\nActivities for {}:", day_name(day.day));
    if day.activities.is_empty() {
        println!("  No activities for this day.");
        return;
    }

    println!("{}", activity_table(&day.activities));
    let booked = day.booked_minutes();
    println!("  Booked: {}h{:02}m", booked / 60, booked % 60);
}

pub fn print_free_slots(day: u8, slots: &[FreeSlotDto]) {
    println!(
        "\nFree slots for {} ({} - {}):",
        day_name(day),
        ClockTime::from_minutes(DAY_WINDOW_START),
        ClockTime::from_minutes(DAY_WINDOW_END)
    );

    match slots {
        [] => println!("  No free time."),
        [only] if only.start_minutes == DAY_WINDOW_START && only.end_minutes == DAY_WINDOW_END => {
            println!("  The whole day is free.")
        }
        _ => {
            for slot in slots {
                println!("  {} - {}  ({} min)", slot.start, slot.end, slot.minutes);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_name() {
        assert_eq!(day_name(1), "Monday");
        assert_eq!(day_name(7), "Sunday");
        assert_eq!(day_name(0), "?");
        assert_eq!(day_name(8), "?");
    }

    #[test]
    fn test_today_in_range() {
        assert!((1..=7).contains(&today()));
    }

    #[test]
    fn test_describe_activity() {
        let math = Activity::new("Math", 1, ClockTime::new(8, 0), ClockTime::new(9, 30), "Room A");
        assert_eq!(describe_activity(&math), "Math (Monday 08:00 - 09:30) at Room A");

        let run = Activity::new("Run", 7, ClockTime::new(7, 5), ClockTime::new(8, 0), "");
        assert_eq!(describe_activity(&run), "Run (Sunday 07:05 - 08:00)");
    }
}
