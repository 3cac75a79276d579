use super::{Calendar, TimeSlot};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Equipment class of a classroom. A lesson may only be placed in a room
/// whose kind matches the kind its subject requires.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum RoomKind {
    Computer,
    Lecture,
    Language,
}

impl Display for RoomKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Computer => "Computer",
            Self::Lecture => "Lecture",
            Self::Language => "Language",
        })
    }
}

/// A teacher together with the subjects they can give.
///
/// `preferred_slots` records which periods the teacher would rather teach in.
/// Placement does not consult it; it travels with the record for reporting
/// and future use.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Teacher {
    pub id: usize,
    pub name: String,
    pub subjects: Vec<String>,
    pub department: String,
    pub daily_cap: usize,
    pub preferred_slots: Vec<TimeSlot>,
}

/// A student group with its weekly lesson target and daily ceiling.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Group {
    pub id: usize,
    pub name: String,
    pub weekly_lessons: usize,
    pub daily_cap: usize,
}

/// A physical room.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Classroom {
    pub id: usize,
    pub name: String,
    pub kind: RoomKind,
}

/// One lesson that has to land somewhere in the week: a group taking a
/// subject with a teacher, in a room of the required kind.
///
/// `priority` is carried through from demand generation but does not order
/// placement.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Demand {
    pub id: usize,
    pub group_id: usize,
    pub group: String,
    pub subject: String,
    pub teacher_id: usize,
    pub teacher: String,
    pub kind: RoomKind,
    pub priority: u8,
}

/// An instance of the timetabling problem. Immutable once built; every
/// attempt reads the same instance.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Instance {
    pub calendar: Calendar,
    pub teachers: Vec<Teacher>,
    pub groups: Vec<Group>,
    pub classrooms: Vec<Classroom>,
    pub demands: Vec<Demand>,
}

impl Instance {
    /// Creates a new instance of the timetabling problem.
    #[must_use]
    pub const fn new(
        calendar: Calendar,
        teachers: Vec<Teacher>,
        groups: Vec<Group>,
        classrooms: Vec<Classroom>,
        demands: Vec<Demand>,
    ) -> Self {
        Self {
            calendar,
            teachers,
            groups,
            classrooms,
            demands,
        }
    }
}
