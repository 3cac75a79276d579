use crate::core::{Classroom, Demand, Group, RoomKind, Teacher};
use rand::prelude::SliceRandom;
use rand::Rng;

/// Room catalogue of the faculty building: room number and equipment class.
const CLASSROOMS: [(&str, RoomKind); 20] = [
    ("201", RoomKind::Computer),
    ("210", RoomKind::Computer),
    ("213", RoomKind::Computer),
    ("216", RoomKind::Computer),
    ("221", RoomKind::Computer),
    ("203", RoomKind::Lecture),
    ("204", RoomKind::Lecture),
    ("207", RoomKind::Lecture),
    ("215", RoomKind::Lecture),
    ("219", RoomKind::Lecture),
    ("220", RoomKind::Lecture),
    ("224", RoomKind::Lecture),
    ("226", RoomKind::Lecture),
    ("301", RoomKind::Lecture),
    ("304", RoomKind::Lecture),
    ("309", RoomKind::Lecture),
    ("312", RoomKind::Lecture),
    ("208", RoomKind::Language),
    ("305", RoomKind::Language),
    ("306", RoomKind::Language),
];

/// Group names across three programmes and four study years.
const GROUP_NAMES: [&str; 25] = [
    "CS-11", "CS-12", "CS-13", "IT-11", "IT-12", "SE-11", "SE-12", "SE-14", "CS-21", "CS-22",
    "IT-21", "IT-22", "SE-21", "SE-22", "CS-31", "CS-32", "IT-31", "IT-32", "SE-31", "SE-32",
    "CS-41", "CS-42", "IT-41", "IT-42", "SE-41",
];

/// Returns the fixed classroom catalogue.
#[must_use]
pub fn standard_classrooms() -> Vec<Classroom> {
    CLASSROOMS
        .iter()
        .enumerate()
        .map(|(id, &(number, kind))| Classroom {
            id,
            name: format!("Room {number}"),
            kind,
        })
        .collect()
}

/// Generates the student groups with randomized weekly targets and daily
/// caps.
#[must_use]
pub fn generate_groups(rng: &mut impl Rng) -> Vec<Group> {
    GROUP_NAMES
        .iter()
        .enumerate()
        .map(|(id, &name)| Group {
            id,
            name: name.into(),
            weekly_lessons: rng.gen_range(20..=30),
            daily_cap: rng.gen_range(3..=5),
        })
        .collect()
}

/// Classifies a subject into the room kind it needs, by keyword on the
/// lowercased name. Unmatched subjects go to an ordinary lecture room.
#[must_use]
pub fn room_kind_for(subject: &str) -> RoomKind {
    const COMPUTER: [&str; 4] = ["programming", "computer", "informatics", "algorithm"];
    const LANGUAGE: [&str; 2] = ["language", "foreign"];

    let lowered = subject.to_lowercase();
    if COMPUTER.iter().any(|keyword| lowered.contains(keyword)) {
        RoomKind::Computer
    } else if LANGUAGE.iter().any(|keyword| lowered.contains(keyword)) {
        RoomKind::Language
    } else {
        RoomKind::Lecture
    }
}

/// Expands teachers × groups into the flat demand list.
///
/// Each group draws shuffled (subject, teacher) pairs and books one or two
/// lessons per pair until its weekly target is met. The pair order and the
/// per-pair lesson count come from `rng`; ids are assigned in creation order.
#[must_use]
pub fn generate_demands(teachers: &[Teacher], groups: &[Group], rng: &mut impl Rng) -> Vec<Demand> {
    let mut demands = Vec::new();

    for group in groups {
        let mut pairs: Vec<(&str, &Teacher)> = teachers
            .iter()
            .flat_map(|teacher| {
                teacher
                    .subjects
                    .iter()
                    .map(move |subject| (subject.as_str(), teacher))
            })
            .collect();
        pairs.shuffle(rng);

        let mut booked = 0;
        for (subject, teacher) in pairs {
            if booked >= group.weekly_lessons {
                break;
            }

            let lessons = rng.gen_range(1..=2).min(group.weekly_lessons - booked);
            for _ in 0..lessons {
                demands.push(Demand {
                    id: demands.len(),
                    group_id: group.id,
                    group: group.name.clone(),
                    subject: subject.into(),
                    teacher_id: teacher.id,
                    teacher: teacher.name.clone(),
                    kind: room_kind_for(subject),
                    priority: rng.gen_range(1..=3),
                });
                booked += 1;
            }
        }
    }

    demands
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::TimeSlot;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn teachers() -> Vec<Teacher> {
        let subjects = [
            vec!["Programming Fundamentals", "Discrete Mathematics"],
            vec!["Foreign Language"],
            vec!["Philosophy", "History"],
        ];

        subjects
            .into_iter()
            .enumerate()
            .map(|(id, subjects)| Teacher {
                id,
                name: format!("Teacher {id}"),
                subjects: subjects.into_iter().map(String::from).collect(),
                department: "General".into(),
                daily_cap: 4,
                preferred_slots: vec![TimeSlot::First],
            })
            .collect()
    }

    #[test]
    fn test_classrooms_cover_every_kind() {
        let rooms = standard_classrooms();

        assert_eq!(rooms.len(), 20);
        for kind in [RoomKind::Computer, RoomKind::Lecture, RoomKind::Language] {
            assert!(rooms.iter().any(|room| room.kind == kind));
        }
        for (index, room) in rooms.iter().enumerate() {
            assert_eq!(room.id, index);
        }
    }

    #[test]
    fn test_groups_stay_in_configured_ranges() {
        let mut rng = StdRng::seed_from_u64(9);
        let groups = generate_groups(&mut rng);

        assert_eq!(groups.len(), 25);
        for group in &groups {
            assert!((20..=30).contains(&group.weekly_lessons));
            assert!((3..=5).contains(&group.daily_cap));
        }
    }

    #[test]
    fn test_subject_classification() {
        assert_eq!(room_kind_for("Programming Fundamentals"), RoomKind::Computer);
        assert_eq!(room_kind_for("Applied INFORMATICS"), RoomKind::Computer);
        assert_eq!(room_kind_for("Algorithms and Data Structures"), RoomKind::Computer);
        assert_eq!(room_kind_for("Foreign Language"), RoomKind::Language);
        assert_eq!(room_kind_for("Business English Language"), RoomKind::Language);
        assert_eq!(room_kind_for("Mathematical Analysis"), RoomKind::Lecture);
        assert_eq!(room_kind_for("Philosophy"), RoomKind::Lecture);
    }

    #[test]
    fn test_demands_respect_weekly_targets() {
        let mut rng = StdRng::seed_from_u64(21);
        let teachers = teachers();
        let groups = vec![
            Group {
                id: 0,
                name: "CS-11".into(),
                weekly_lessons: 4,
                daily_cap: 4,
            },
            Group {
                id: 1,
                name: "CS-12".into(),
                weekly_lessons: 30,
                daily_cap: 4,
            },
        ];

        let demands = generate_demands(&teachers, &groups, &mut rng);

        for group in &groups {
            let booked = demands.iter().filter(|d| d.group_id == group.id).count();
            assert!(booked > 0);
            assert!(booked <= group.weekly_lessons);
        }

        // five pairs of at most two lessons bound what one group can book
        assert!(demands.iter().filter(|d| d.group_id == 1).count() <= 10);

        for (index, demand) in demands.iter().enumerate() {
            assert_eq!(demand.id, index);
            assert!((1..=3).contains(&demand.priority));
            assert_eq!(demand.kind, room_kind_for(&demand.subject));
            assert_eq!(demand.teacher, format!("Teacher {}", demand.teacher_id));
        }
    }
}
