pub mod file;
pub mod traits;

// Re-export
pub use file::FileScheduleRepository;
pub use traits::ScheduleRepository;
