use super::{Classroom, Day, Demand, Instance, TimeSlot};
use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use std::fmt::{Display, Formatter};

/// A lesson fixed to a cell, as indices into the instance's demand and
/// classroom lists.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PlacedLesson {
    pub demand: usize,
    pub classroom: usize,
}

/// Counts of one scheduling run: how many lessons were asked for and how
/// many the retained timetable places.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Stats {
    pub total: usize,
    pub placed: usize,
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "placed {}/{} lessons", self.placed, self.total)
    }
}

/// A weekly timetable under construction for one instance.
///
/// The grid is a fixed day × period array of cells; each cell holds the
/// lessons running simultaneously in different rooms. Per-day teacher and
/// group loads are tracked incrementally so the conflict predicate never
/// rescans the grid.
#[derive(Clone, Debug)]
pub struct Timetable<'a> {
    instance: &'a Instance,
    cells: [[Vec<PlacedLesson>; TimeSlot::COUNT]; Day::COUNT],
    teacher_caps: HashMap<usize, usize>,
    group_caps: HashMap<usize, usize>,
    teacher_loads: HashMap<usize, [usize; Day::COUNT]>,
    group_loads: HashMap<usize, [usize; Day::COUNT]>,
    placed: usize,
}

impl<'a> Timetable<'a> {
    /// Creates an empty timetable for the given instance.
    #[must_use]
    pub fn new(instance: &'a Instance) -> Self {
        let teacher_caps = instance
            .teachers
            .iter()
            .map(|teacher| (teacher.id, teacher.daily_cap))
            .collect();
        let group_caps = instance
            .groups
            .iter()
            .map(|group| (group.id, group.daily_cap))
            .collect();

        Self {
            instance,
            cells: std::array::from_fn(|_| std::array::from_fn(|_| Vec::new())),
            teacher_caps,
            group_caps,
            teacher_loads: HashMap::new(),
            group_loads: HashMap::new(),
            placed: 0,
        }
    }

    /// Returns the instance this timetable was built for.
    #[must_use]
    pub const fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Returns the lessons placed in the given cell.
    #[must_use]
    pub fn cell(&self, day: Day, slot: TimeSlot) -> &[PlacedLesson] {
        &self.cells[day.index()][slot.index()]
    }

    /// Returns the number of lessons placed so far.
    #[must_use]
    pub const fn placed_count(&self) -> usize {
        self.placed
    }

    /// Returns the demand/placement counts of this timetable.
    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats {
            total: self.instance.demands.len(),
            placed: self.placed,
        }
    }

    /// Returns whether placing `demand` into `room` at (`day`, `slot`) would
    /// violate a hard constraint. Pure predicate over the grid built so far.
    ///
    /// Rejects when the room kind does not match, when the cell already holds
    /// a lesson with the same teacher, the same group or the same room, or
    /// when the teacher or group has already reached its daily cap. The cap
    /// comparison is `>=` on the load before this placement: an entity at cap
    /// never receives another lesson that day.
    ///
    /// # Panics
    /// - If the demand references a teacher or group id absent from the
    ///   instance. That means demand generation handed over an inconsistent
    ///   instance, which is not a schedulable situation.
    #[must_use]
    pub fn conflicts(&self, day: Day, slot: TimeSlot, demand: &Demand, room: &Classroom) -> bool {
        if room.kind != demand.kind {
            return true;
        }

        for placed in &self.cells[day.index()][slot.index()] {
            let other = &self.instance.demands[placed.demand];
            if other.teacher_id == demand.teacher_id
                || other.group_id == demand.group_id
                || self.instance.classrooms[placed.classroom].id == room.id
            {
                return true;
            }
        }

        self.teacher_load(demand.teacher_id, day) >= self.teacher_cap(demand)
            || self.group_load(demand.group_id, day) >= self.group_cap(demand)
    }

    /// Places a demand into a cell. The caller must have cleared the
    /// placement through [`Self::conflicts`] first.
    pub fn place(&mut self, demand: usize, day: Day, slot: TimeSlot, classroom: usize) {
        let instance = self.instance;
        let record = &instance.demands[demand];

        debug_assert!(
            !self.conflicts(day, slot, record, &instance.classrooms[classroom]),
            "conflicting placement of demand {demand} on {day} {slot}",
        );

        self.cells[day.index()][slot.index()].push(PlacedLesson { demand, classroom });
        self.teacher_loads.entry(record.teacher_id).or_default()[day.index()] += 1;
        self.group_loads.entry(record.group_id).or_default()[day.index()] += 1;
        self.placed += 1;
    }

    /// Checks every hard constraint over the finished grid: room kinds match,
    /// no cell double-books a teacher, group or room, daily caps hold, and no
    /// demand appears twice.
    #[must_use]
    pub fn verify(&self) -> bool {
        let mut seen_demands = HashSet::new();
        let mut entries = 0;

        for day in Day::ALL {
            let mut teacher_day = HashMap::new();
            let mut group_day = HashMap::new();

            for slot in TimeSlot::ALL {
                let mut cell_teachers = HashSet::new();
                let mut cell_groups = HashSet::new();
                let mut cell_rooms = HashSet::new();

                for placed in self.cell(day, slot) {
                    let demand = &self.instance.demands[placed.demand];
                    let room = &self.instance.classrooms[placed.classroom];
                    entries += 1;

                    if room.kind != demand.kind
                        || !seen_demands.insert(placed.demand)
                        || !cell_teachers.insert(demand.teacher_id)
                        || !cell_groups.insert(demand.group_id)
                        || !cell_rooms.insert(room.id)
                    {
                        return false;
                    }

                    *teacher_day.entry(demand.teacher_id).or_insert(0usize) += 1;
                    *group_day.entry(demand.group_id).or_insert(0usize) += 1;
                }
            }

            let teachers_ok = teacher_day.iter().all(|(id, count)| {
                self.teacher_caps.get(id).is_some_and(|cap| count <= cap)
            });
            let groups_ok = group_day
                .iter()
                .all(|(id, count)| self.group_caps.get(id).is_some_and(|cap| count <= cap));

            if !teachers_ok || !groups_ok {
                return false;
            }
        }

        entries == self.placed
    }

    fn teacher_cap(&self, demand: &Demand) -> usize {
        self.teacher_caps
            .get(&demand.teacher_id)
            .copied()
            .unwrap_or_else(|| {
                panic!(
                    "demand {} references unknown teacher {}",
                    demand.id, demand.teacher_id
                )
            })
    }

    fn group_cap(&self, demand: &Demand) -> usize {
        self.group_caps
            .get(&demand.group_id)
            .copied()
            .unwrap_or_else(|| {
                panic!(
                    "demand {} references unknown group {}",
                    demand.id, demand.group_id
                )
            })
    }

    fn teacher_load(&self, teacher: usize, day: Day) -> usize {
        self.teacher_loads
            .get(&teacher)
            .map_or(0, |loads| loads[day.index()])
    }

    fn group_load(&self, group: usize, day: Day) -> usize {
        self.group_loads
            .get(&group)
            .map_or(0, |loads| loads[day.index()])
    }
}
