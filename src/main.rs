use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::BufReader;
use std::num::NonZero;
use university_timetabling::algo::RandomizedRestart;
use university_timetabling::core::{Calendar, Instance, Scheduler};
use university_timetabling::{data, logging, run_writer};

/// Application building weekly university timetables.
#[derive(Debug, Parser)]
#[command(version, about)]
enum Application {
    /// Build a timetable from a teacher roster.
    Schedule {
        /// Path to the roster CSV (columns: name, subjects, department).
        roster: String,
        /// Number of independent placement attempts.
        #[clap(short, long, default_value = "30")]
        attempts: usize,
        /// Seed for a reproducible run. Drawn from the system when absent.
        #[clap(long)]
        seed: Option<u64>,
        /// Path of the timetable CSV to write.
        #[clap(short, long, default_value = "timetable.csv")]
        output: String,
    },
    /// Generate a synthetic roster CSV to schedule from.
    Roster {
        /// Number of teachers to generate.
        #[clap(default_value = "15")]
        teachers: NonZero<usize>,
        /// Seed for a reproducible roster. Drawn from the system when absent.
        #[clap(long)]
        seed: Option<u64>,
        /// Path of the roster CSV to write.
        #[clap(short, long, default_value = "roster.csv")]
        output: String,
    },
}

fn rng_from(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

fn schedule(roster: &str, attempts: usize, seed: Option<u64>, output: &str) -> anyhow::Result<()> {
    let mut rng = rng_from(seed);

    let file = File::open(roster).with_context(|| format!("cannot open roster {roster}"))?;
    let teachers = data::load_roster(BufReader::new(file), &mut rng)?;
    let groups = data::generate_groups(&mut rng);
    let classrooms = data::standard_classrooms();
    let demands = data::generate_demands(&teachers, &groups, &mut rng);

    let instance = Instance::new(Calendar::default(), teachers, groups, classrooms, demands);
    let mut scheduler = RandomizedRestart::new(attempts, rng.gen());

    tracing::info!(
        scheduler = scheduler.name(),
        teachers = instance.teachers.len(),
        groups = instance.groups.len(),
        demands = instance.demands.len(),
        attempts,
        "scheduling"
    );

    let mut file =
        File::create(output).with_context(|| format!("cannot create output {output}"))?;
    let stats = run_writer(&mut scheduler, &instance, &mut file)?;

    println!("{stats}, timetable written to {output}");
    Ok(())
}

fn roster(teachers: usize, seed: Option<u64>, output: &str) -> anyhow::Result<()> {
    let mut rng = rng_from(seed);
    let csv = data::sample_roster(teachers, &mut rng)?;

    std::fs::write(output, csv).with_context(|| format!("cannot write roster {output}"))?;

    println!("roster of {teachers} teachers written to {output}");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    logging::init();

    match Application::parse() {
        Application::Schedule {
            roster,
            attempts,
            seed,
            output,
        } => schedule(&roster, attempts, seed, &output),
        Application::Roster {
            teachers,
            seed,
            output,
        } => roster(teachers.get(), seed, &output),
    }
}
