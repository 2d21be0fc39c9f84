//! Timetable genome records.

/// Index of a time slot in a [`ScheduleDomain`](super::ScheduleDomain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotId(pub usize);

/// Index of a student group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupId(pub usize);

/// Index of a teacher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeacherId(pub usize);

/// Index of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubjectId(pub usize);

/// One class: a group taught a subject by a teacher in a slot.
///
/// Crossover and mutation never move `slot` or `group`; only `teacher` and
/// `subject` evolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub slot: SlotId,
    pub group: GroupId,
    pub teacher: TeacherId,
    pub subject: SubjectId,
}

/// A complete timetable genome.
pub type Schedule = Vec<Assignment>;
