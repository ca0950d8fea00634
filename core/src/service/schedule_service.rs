use std::io;

use tracing::{debug, info};

use crate::error::{ScheduleError, ScheduleResult};
use crate::input::validate_schedule_name;
use crate::model::activity::Activity;
use crate::model::schedule::Schedule;
use crate::repository::ScheduleRepository;
use crate::service::dto::{DayScheduleDto, FreeSlotDto, WeekDto};

/// One in-memory schedule plus the store it is saved to.
///
/// All edits happen in memory; nothing is written until [`save`](Self::save).
pub struct ScheduleService<R: ScheduleRepository> {
    repo: R,
    schedule: Schedule,
}

impl<R: ScheduleRepository> ScheduleService<R> {
    pub fn new(repo: R, schedule: Schedule) -> Self {
        Self { repo, schedule }
    }

    /// Loads the stored schedule, or starts an empty one if nothing is stored.
    pub fn open(repo: R) -> ScheduleResult<Self> {
        let schedule = match repo.load()? {
            Some(schedule) => {
                info!(
                    location = %repo.location().display(),
                    activities = schedule.len(),
                    "schedule loaded"
                );
                schedule
            }
            None => Schedule::default(),
        };
        Ok(Self::new(repo, schedule))
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn add_activity(&mut self, activity: Activity) -> ScheduleResult<()> {
        debug!(name = activity.name(), day = activity.day(), "checking for conflicts");
        match self.schedule.add(activity) {
            Ok(()) => {
                info!(total = self.schedule.len(), "activity added");
                Ok(())
            }
            Err(err) => {
                debug!(%err, "activity rejected");
                Err(err)
            }
        }
    }

    pub fn remove_activity(&mut self, name: &str) -> ScheduleResult<()> {
        if self.schedule.remove(name) {
            info!(name, total = self.schedule.len(), "activity removed");
            Ok(())
        } else {
            Err(ScheduleError::NotFound(name.to_string()))
        }
    }

    /// Removes exactly `activity`, leaving same-named activities alone.
    pub fn remove_exact(&mut self, activity: &Activity) -> ScheduleResult<()> {
        if self.schedule.remove_exact(activity) {
            info!(
                name = activity.name(),
                day = activity.day(),
                total = self.schedule.len(),
                "activity removed"
            );
            Ok(())
        } else {
            Err(ScheduleError::NotFound(activity.name().to_string()))
        }
    }

    pub fn rename(&mut self, name: &str) -> ScheduleResult<()> {
        let name = validate_schedule_name(name)?;
        info!(from = self.schedule.name(), to = %name, "schedule renamed");
        self.schedule.rename(name);
        Ok(())
    }

    pub fn activities_for_day(&self, day: u8) -> ScheduleResult<DayScheduleDto> {
        let activities = self.schedule.activities_for_day(day)?;
        Ok(DayScheduleDto::new(day, &activities))
    }

    pub fn free_slots_for_day(&self, day: u8) -> ScheduleResult<Vec<FreeSlotDto>> {
        let slots = self.schedule.free_slots_for_day(day)?;
        debug!(day, slots = slots.len(), "free slots computed");
        Ok(slots.into_iter().map(FreeSlotDto::from_slot).collect())
    }

    pub fn week(&self) -> WeekDto {
        WeekDto {
            name: self.schedule.name().to_string(),
            days: self
                .schedule
                .week()
                .into_iter()
                .map(|(day, activities)| DayScheduleDto::new(day, &activities))
                .collect(),
        }
    }

    pub fn save(&self) -> ScheduleResult<()> {
        self.repo.save(&self.schedule)
    }

    /// Replaces the in-memory schedule with the stored one. On any error
    /// the current schedule is left as it was.
    pub fn reload(&mut self) -> ScheduleResult<()> {
        self.schedule = load_required(&self.repo)?;
        Ok(())
    }

    pub fn export_to<S: ScheduleRepository>(&self, target: &S) -> ScheduleResult<()> {
        target.save(&self.schedule)
    }

    pub fn import_from<S: ScheduleRepository>(&mut self, source: &S) -> ScheduleResult<()> {
        self.schedule = load_required(source)?;
        Ok(())
    }
}

fn load_required<S: ScheduleRepository>(source: &S) -> ScheduleResult<Schedule> {
    match source.load()? {
        Some(schedule) => {
            info!(
                location = %source.location().display(),
                activities = schedule.len(),
                "schedule replaced from store"
            );
            Ok(schedule)
        }
        None => Err(ScheduleError::persistence(
            source.location(),
            io::Error::new(io::ErrorKind::NotFound, "no saved schedule"),
        )),
    }
}
