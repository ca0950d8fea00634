use serde::Serialize;

use crate::model::activity::Activity;
use crate::model::schedule::FreeSlot;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ActivityDto {
    pub name: String,
    pub day: u8,
    pub start: String, // HH:MM
    pub end: String,   // HH:MM
    pub location: String,
    pub minutes: u16,
}

impl ActivityDto {
    pub fn from_entity(activity: &Activity) -> Self {
        Self {
            name: activity.name().to_string(),
            day: activity.day(),
            start: activity.start().to_string(),
            end: activity.end().to_string(),
            location: activity.location().to_string(),
            minutes: activity.duration_minutes(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DayScheduleDto {
    pub day: u8,
    pub activities: Vec<ActivityDto>,
}

impl DayScheduleDto {
    pub fn new(day: u8, activities: &[&Activity]) -> Self {
        Self {
            day,
            activities: activities.iter().map(|a| ActivityDto::from_entity(a)).collect(),
        }
    }

    pub fn booked_minutes(&self) -> u32 {
        self.activities.iter().map(|a| a.minutes as u32).sum()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WeekDto {
    pub name: String,
    pub days: Vec<DayScheduleDto>,
}

impl WeekDto {
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|d| d.activities.is_empty())
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FreeSlotDto {
    pub start: String,
    pub end: String,
    pub start_minutes: u16,
    pub end_minutes: u16,
    pub minutes: u16,
}

impl FreeSlotDto {
    pub fn from_slot(slot: FreeSlot) -> Self {
        Self {
            start: slot.start_time().to_string(),
            end: slot.end_time().to_string(),
            start_minutes: slot.start,
            end_minutes: slot.end,
            minutes: slot.duration_minutes(),
        }
    }
}
