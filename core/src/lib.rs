pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;

pub use error::{ScheduleError, ScheduleResult};
pub use input::{
    parse_clock, parse_day, parse_quick_entry, validate_schedule_name, ActivityDraft,
};
pub use model::activity::{Activity, ClockTime};
pub use model::schedule::{FreeSlot, Schedule, DAY_WINDOW_END, DAY_WINDOW_START};
pub use repository::{FileScheduleRepository, ScheduleRepository};
pub use service::dto::{ActivityDto, DayScheduleDto, FreeSlotDto, WeekDto};
pub use service::schedule_service::ScheduleService;
