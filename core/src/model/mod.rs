pub mod activity;
pub mod record;
pub mod schedule;
