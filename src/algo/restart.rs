use crate::core::{Instance, Scheduler, Timetable};
use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Runs one greedy pass over the full demand list and returns the resulting
/// timetable.
///
/// The demand order, the day order and the per-day slot order are all drawn
/// from `rng`; rooms of the required kind are scanned in catalogue order and
/// the first one clearing the conflict check wins. A demand that fits nowhere
/// is left unplaced, which only shows up as a lower placed count.
pub fn run_attempt<'a>(instance: &'a Instance, rng: &mut impl Rng) -> Timetable<'a> {
    let mut grid = Timetable::new(instance);

    let mut order: Vec<usize> = (0..instance.demands.len()).collect();
    order.shuffle(rng);

    let mut days = instance.calendar.days.clone();
    let mut slots = instance.calendar.slots.clone();

    for index in order {
        let demand = &instance.demands[index];
        days.shuffle(rng);

        'cells: for &day in &days {
            slots.shuffle(rng);

            for &slot in &slots {
                let room = instance.classrooms.iter().position(|room| {
                    room.kind == demand.kind && !grid.conflicts(day, slot, demand, room)
                });

                if let Some(room) = room {
                    grid.place(index, day, slot, room);
                    break 'cells;
                }
            }
        }
    }

    grid
}

/// Randomized restart search: a fixed number of independent greedy attempts,
/// keeping the first timetable to reach the highest placed count.
#[derive(Clone, Debug)]
pub struct RandomizedRestart {
    attempts: usize,
    rng: StdRng,
}

impl RandomizedRestart {
    /// Attempt count used when none is configured.
    pub const DEFAULT_ATTEMPTS: usize = 30;

    /// Creates a seeded search. The same seed replays the same attempts.
    #[must_use]
    pub fn new(attempts: usize, seed: u64) -> Self {
        Self {
            attempts,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a search seeded from the operating system.
    #[must_use]
    pub fn from_entropy(attempts: usize) -> Self {
        Self {
            attempts,
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for RandomizedRestart {
    fn default() -> Self {
        Self::from_entropy(Self::DEFAULT_ATTEMPTS)
    }
}

impl Scheduler for RandomizedRestart {
    fn schedule<'a>(&mut self, instance: &'a Instance) -> Timetable<'a> {
        let mut best = Timetable::new(instance);

        for attempt in 0..self.attempts {
            let candidate = run_attempt(instance, &mut self.rng);
            debug!(attempt, placed = candidate.placed_count(), "attempt finished");

            if candidate.placed_count() > best.placed_count() {
                best = candidate;
            }
        }

        best
    }

    fn name(&self) -> &'static str {
        "RandomizedRestart"
    }
}
