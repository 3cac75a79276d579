use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A teaching day of the week. Saturday is a teaching day, Sunday is not.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// Number of teaching days in a week.
    pub const COUNT: usize = 6;

    /// All teaching days in calendar order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the position of the day within the week.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the display name of the day.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A lecture period within a teaching day.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum TimeSlot {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl TimeSlot {
    /// Number of lecture periods in a day.
    pub const COUNT: usize = 5;

    /// All lecture periods in chronological order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
    ];

    /// Returns the position of the period within the day.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the wall-clock span of the period.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::First => "09:00-10:35",
            Self::Second => "10:45-12:20",
            Self::Third => "13:20-14:55",
            Self::Fourth => "15:05-16:40",
            Self::Fifth => "16:50-18:25",
        }
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The weekly grid a timetable is built over: an ordered list of days and an
/// ordered list of periods. Instances normally use the full week, tests may
/// restrict either axis.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Calendar {
    pub days: Vec<Day>,
    pub slots: Vec<TimeSlot>,
}

impl Calendar {
    /// Creates a calendar over the given days and periods.
    #[must_use]
    pub const fn new(days: Vec<Day>, slots: Vec<TimeSlot>) -> Self {
        Self { days, slots }
    }

    /// Number of (day, period) cells in the calendar.
    #[must_use]
    pub fn cells(&self) -> usize {
        self.days.len() * self.slots.len()
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            days: Day::ALL.to_vec(),
            slots: TimeSlot::ALL.to_vec(),
        }
    }
}
