use super::DataError;
use crate::core::{Teacher, TimeSlot};
use rand::prelude::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::io::Read;

/// How many periods each teacher marks as preferred.
const PREFERRED_SLOTS: usize = 3;

/// One line of a roster file.
#[derive(Debug, Deserialize)]
struct RosterRecord {
    name: String,
    subjects: String,
    #[serde(default = "default_department")]
    department: String,
}

fn default_department() -> String {
    "General".into()
}

/// Reads a teacher roster from CSV with columns `name`, `subjects`
/// (comma-separated list) and an optional `department`.
///
/// Daily caps and the preferred-period sample are not part of the file; they
/// are drawn from `rng` at load time, so a seeded run assigns them
/// reproducibly.
///
/// # Errors
/// - If the CSV cannot be read or a record does not match the roster shape.
/// - If the roster is empty or a teacher lists no subjects.
pub fn load_roster<R: Read>(reader: R, rng: &mut impl Rng) -> Result<Vec<Teacher>, DataError> {
    let mut teachers = Vec::new();

    for (id, record) in csv::Reader::from_reader(reader).into_deserialize().enumerate() {
        let record: RosterRecord = record?;
        let subjects: Vec<String> = record
            .subjects
            .split(',')
            .map(str::trim)
            .filter(|subject| !subject.is_empty())
            .map(String::from)
            .collect();

        if subjects.is_empty() {
            return Err(DataError::NoSubjects(record.name));
        }

        teachers.push(Teacher {
            id,
            name: record.name,
            subjects,
            department: record.department,
            daily_cap: rng.gen_range(3..=5),
            preferred_slots: TimeSlot::ALL
                .choose_multiple(rng, PREFERRED_SLOTS)
                .copied()
                .collect(),
        });
    }

    if teachers.is_empty() {
        return Err(DataError::EmptyRoster);
    }

    Ok(teachers)
}

const SURNAMES: [&str; 12] = [
    "Petrov", "Sokolov", "Ivanova", "Lebedev", "Kuznetsova", "Popov", "Morozova", "Volkov",
    "Fedorova", "Orlov", "Vasilyeva", "Novikov",
];

const SUBJECTS: [(&str, &str); 15] = [
    ("Programming Fundamentals", "Computer Science"),
    ("Algorithms and Data Structures", "Computer Science"),
    ("Computer Networks", "Computer Science"),
    ("Applied Informatics", "Computer Science"),
    ("Database Theory", "Computer Science"),
    ("Mathematical Analysis", "Mathematics"),
    ("Linear Algebra", "Mathematics"),
    ("Probability Theory", "Mathematics"),
    ("Discrete Mathematics", "Mathematics"),
    ("Physics", "Natural Sciences"),
    ("Philosophy", "Humanities"),
    ("Economics", "Humanities"),
    ("History", "Humanities"),
    ("Foreign Language", "Languages"),
    ("Business English Language", "Languages"),
];

/// Produces a synthetic roster of `count` teachers as CSV text, in the shape
/// [`load_roster`] reads back.
///
/// # Errors
/// - If the CSV writer fails, which only happens on formatting bugs.
pub fn sample_roster(count: usize, rng: &mut impl Rng) -> Result<String, DataError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["name", "subjects", "department"])?;

    for index in 0..count {
        let surname = SURNAMES[index % SURNAMES.len()];
        let initial = char::from(b'A' + rng.gen_range(0..26));
        let subject_count = rng.gen_range(2..=3);
        let taught: Vec<&(&str, &str)> = SUBJECTS.choose_multiple(rng, subject_count).collect();
        let subjects: Vec<&str> = taught.iter().map(|(subject, _)| *subject).collect();
        let department: &str = taught.first().map_or("General", |(_, department)| department);

        writer.write_record([
            format!("{initial}. {surname}").as_str(),
            subjects.join(", ").as_str(),
            department,
        ])?;
    }

    let bytes = writer.into_inner().map_err(csv::IntoInnerError::into_error)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    const ROSTER: &str = "name,subjects,department\n\
        A. Petrov,\"Programming Fundamentals, Linear Algebra\",Computer Science\n\
        I. Sokolova,Foreign Language,Languages\n";

    #[test]
    fn test_load_roster_parses_records() -> anyhow::Result<()> {
        let mut rng = StdRng::seed_from_u64(1);
        let teachers = load_roster(Cursor::new(ROSTER), &mut rng)?;

        assert_eq!(teachers.len(), 2);
        assert_eq!(teachers[0].id, 0);
        assert_eq!(teachers[0].name, "A. Petrov");
        assert_eq!(
            teachers[0].subjects,
            vec!["Programming Fundamentals", "Linear Algebra"],
        );
        assert_eq!(teachers[1].subjects, vec!["Foreign Language"]);
        assert_eq!(teachers[1].department, "Languages");

        for teacher in &teachers {
            assert!((3..=5).contains(&teacher.daily_cap));
            assert_eq!(teacher.preferred_slots.len(), PREFERRED_SLOTS);
        }
        Ok(())
    }

    #[test]
    fn test_load_roster_defaults_department() -> anyhow::Result<()> {
        let csv = "name,subjects\nB. Volkov,History\n";
        let mut rng = StdRng::seed_from_u64(2);
        let teachers = load_roster(Cursor::new(csv), &mut rng)?;

        assert_eq!(teachers[0].department, "General");
        Ok(())
    }

    #[test]
    fn test_load_roster_rejects_degenerate_input() {
        let mut rng = StdRng::seed_from_u64(3);

        let empty = load_roster(Cursor::new("name,subjects,department\n"), &mut rng);
        assert!(matches!(empty, Err(DataError::EmptyRoster)));

        let no_subjects = "name,subjects,department\nC. Orlov,\" , \",General\n";
        let no_subjects = load_roster(Cursor::new(no_subjects), &mut rng);
        assert!(matches!(no_subjects, Err(DataError::NoSubjects(name)) if name == "C. Orlov"));
    }

    #[test]
    fn test_sample_roster_round_trips() -> anyhow::Result<()> {
        let mut rng = StdRng::seed_from_u64(4);
        let csv = sample_roster(8, &mut rng)?;
        let teachers = load_roster(Cursor::new(csv), &mut rng)?;

        assert_eq!(teachers.len(), 8);
        for teacher in &teachers {
            assert!(!teacher.subjects.is_empty());
            assert!(!teacher.department.is_empty());
        }
        Ok(())
    }
}
