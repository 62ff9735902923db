//! Shift schedule and day-off maintenance

pub mod ports;
pub mod service;

pub use service::ScheduleService;
