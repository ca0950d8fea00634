use std::path::PathBuf;

use crate::error::ScheduleResult;
use crate::model::schedule::Schedule;

pub trait ScheduleRepository {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> ScheduleResult<Option<Schedule>>;
    fn save(&self, schedule: &Schedule) -> ScheduleResult<()>;
    /// Where the schedule lives, for messages.
    fn location(&self) -> PathBuf;
}
