mod calendar;
mod entity;
mod grid;

pub use calendar::*;
pub use entity::*;
pub use grid::*;

/// Builds a timetable for an instance.
pub trait Scheduler {
    /// Builds a timetable for the given instance.
    fn schedule<'a>(&mut self, instance: &'a Instance) -> Timetable<'a>;

    /// Returns the name of the scheduler.
    fn name(&self) -> &str;
}
