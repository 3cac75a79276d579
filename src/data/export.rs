use super::DataError;
use crate::core::{RoomKind, Timetable};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One exported timetable line: a placed lesson with its resolved cell and
/// room.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Row {
    pub day: String,
    pub time: String,
    pub group: String,
    pub subject: String,
    pub teacher: String,
    pub classroom: String,
    pub kind: RoomKind,
}

/// Flattens a timetable into rows, walking the calendar in order so the
/// output is stable for a given grid.
#[must_use]
pub fn rows(timetable: &Timetable) -> Vec<Row> {
    let instance = timetable.instance();
    let mut rows = Vec::with_capacity(timetable.placed_count());

    for &day in &instance.calendar.days {
        for &slot in &instance.calendar.slots {
            for placed in timetable.cell(day, slot) {
                let demand = &instance.demands[placed.demand];
                let room = &instance.classrooms[placed.classroom];

                rows.push(Row {
                    day: day.label().into(),
                    time: slot.label().into(),
                    group: demand.group.clone(),
                    subject: demand.subject.clone(),
                    teacher: demand.teacher.clone(),
                    classroom: room.name.clone(),
                    kind: demand.kind,
                });
            }
        }
    }

    rows
}

/// Writes a timetable to `writer` as CSV, one row per placed lesson.
///
/// # Errors
/// - If a row cannot be serialized or the writer fails.
pub fn write_csv<W: Write>(timetable: &Timetable, writer: W) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_writer(writer);

    for row in rows(timetable) {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{
        Calendar, Classroom, Day, Demand, Group, Instance, Teacher, TimeSlot, Timetable,
    };

    fn instance() -> Instance {
        Instance::new(
            Calendar::default(),
            vec![Teacher {
                id: 0,
                name: "D. Knuth".into(),
                subjects: vec!["Algorithms and Data Structures".into()],
                department: "Computer Science".into(),
                daily_cap: 4,
                preferred_slots: Vec::new(),
            }],
            vec![Group {
                id: 0,
                name: "CS-21".into(),
                weekly_lessons: 24,
                daily_cap: 4,
            }],
            vec![Classroom {
                id: 0,
                name: "Room 210".into(),
                kind: RoomKind::Computer,
            }],
            vec![Demand {
                id: 0,
                group_id: 0,
                group: "CS-21".into(),
                subject: "Algorithms and Data Structures".into(),
                teacher_id: 0,
                teacher: "D. Knuth".into(),
                kind: RoomKind::Computer,
                priority: 1,
            }],
        )
    }

    #[test]
    fn test_rows_resolve_names_and_labels() {
        let instance = instance();
        let mut grid = Timetable::new(&instance);
        grid.place(0, Day::Tuesday, TimeSlot::Third, 0);

        let rows = rows(&grid);
        assert_eq!(rows.len(), grid.placed_count());
        assert_eq!(rows[0].day, "Tuesday");
        assert_eq!(rows[0].time, "13:20-14:55");
        assert_eq!(rows[0].group, "CS-21");
        assert_eq!(rows[0].teacher, "D. Knuth");
        assert_eq!(rows[0].classroom, "Room 210");
        assert_eq!(rows[0].kind, RoomKind::Computer);
    }

    #[test]
    fn test_flattening_twice_is_identical() {
        let instance = instance();
        let mut grid = Timetable::new(&instance);
        grid.place(0, Day::Monday, TimeSlot::First, 0);

        assert_eq!(rows(&grid), rows(&grid));
    }

    #[test]
    fn test_write_csv_emits_one_line_per_lesson() -> anyhow::Result<()> {
        let instance = instance();
        let mut grid = Timetable::new(&instance);
        grid.place(0, Day::Monday, TimeSlot::First, 0);

        let mut buffer = Vec::new();
        write_csv(&grid, &mut buffer)?;
        let text = String::from_utf8_lossy(&buffer);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "day,time,group,subject,teacher,classroom,kind");
        assert!(lines[1].starts_with("Monday,09:00-10:35,CS-21"));
        assert!(lines[1].ends_with("Computer"));
        Ok(())
    }
}
