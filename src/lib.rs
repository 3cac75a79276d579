#![deny(clippy::all, clippy::cargo, clippy::expect_used, clippy::unwrap_used)]
#![deny(clippy::pedantic, clippy::nursery, unsafe_code)]
#![warn(clippy::unimplemented, clippy::redundant_type_annotations)]

use anyhow::Result;
use std::io::Write;

pub mod algo;
pub mod core;
pub mod data;
pub mod logging;

use crate::core::{Instance, Scheduler, Stats};

/// Runs the given scheduler on the instance and writes the retained
/// timetable to `writer` as CSV. Returns the run statistics.
///
/// # Errors
/// - If the timetable could not be written.
///
/// # Panics
/// - If the produced timetable is invalid in debug mode.
pub fn run_writer(
    scheduler: &mut dyn Scheduler,
    instance: &Instance,
    writer: &mut impl Write,
) -> Result<Stats> {
    let timetable = scheduler.schedule(instance);

    debug_assert!(timetable.verify(), "Timetable is invalid: {timetable:?}");

    data::write_csv(&timetable, writer)?;

    Ok(timetable.stats())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::RandomizedRestart;
    use crate::core::Calendar;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_run_writer_reports_stats() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(6);
        let teachers = data::load_roster(
            std::io::Cursor::new(data::sample_roster(6, &mut rng)?),
            &mut rng,
        )?;
        let groups = data::generate_groups(&mut rng);
        let classrooms = data::standard_classrooms();
        let demands = data::generate_demands(&teachers, &groups, &mut rng);
        let instance = Instance::new(Calendar::default(), teachers, groups, classrooms, demands);

        let mut scheduler = RandomizedRestart::new(5, 13);
        let mut output = Vec::new();
        let stats = run_writer(&mut scheduler, &instance, &mut output)?;

        assert_eq!(stats.total, instance.demands.len());
        assert!(stats.placed > 0);
        assert!(stats.placed <= stats.total);
        assert_eq!(
            String::from_utf8_lossy(&output).lines().count(),
            stats.placed + 1,
        );
        Ok(())
    }
}
