//! Timetabling domain definition.
//!
//! [`ScheduleDomain`] names the teachers, subjects, groups and slots of a
//! problem and holds the slot preferences that earn bonus points.

use super::types::{SlotId, SubjectId, TeacherId};
use crate::error::{Error, Result};

/// Names and preferences for one timetabling problem.
///
/// # Examples
///
/// ```
/// use u_evolve::schedule::ScheduleDomain;
///
/// let domain = ScheduleDomain::new(&["Ada", "Grace"], &["Math"], &["G1"], &["Mon", "Tue"])
///     .unwrap()
///     .with_teacher_preference("Ada", &["Mon"])
///     .unwrap();
/// assert_eq!(domain.genome_len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleDomain {
    teachers: Vec<String>,
    subjects: Vec<String>,
    groups: Vec<String>,
    slots: Vec<String>,
    /// Preferred slots per teacher, indexed by `TeacherId`.
    teacher_preferences: Vec<Vec<SlotId>>,
    /// Preferred slots per subject, indexed by `SubjectId`.
    subject_preferences: Vec<Vec<SlotId>>,
}

impl ScheduleDomain {
    /// Creates a domain without preferences.
    ///
    /// Every list must be non-empty and free of duplicate names.
    pub fn new(teachers: &[&str], subjects: &[&str], groups: &[&str], slots: &[&str]) -> Result<Self> {
        let domain = Self {
            teachers: owned_names(teachers),
            subjects: owned_names(subjects),
            groups: owned_names(groups),
            slots: owned_names(slots),
            teacher_preferences: vec![Vec::new(); teachers.len()],
            subject_preferences: vec![Vec::new(); subjects.len()],
        };
        domain.validate()?;
        Ok(domain)
    }

    /// The classic school week: 4 teachers, 4 subjects, 3 groups and
    /// 6 morning slots over Monday to Wednesday, with fixed preferences.
    pub fn school_week() -> Self {
        let s = |ids: &[usize]| ids.iter().map(|&i| SlotId(i)).collect::<Vec<_>>();
        Self {
            teachers: owned_names(&["ProfA", "ProfB", "ProfC", "ProfD"]),
            subjects: owned_names(&["Mathematics", "Science", "History", "Art"]),
            groups: owned_names(&["Group1", "Group2", "Group3"]),
            slots: owned_names(&[
                "Mon-09:00", "Mon-11:00", "Tue-09:00", "Tue-11:00", "Wed-09:00", "Wed-11:00",
            ]),
            teacher_preferences: vec![s(&[0, 2]), s(&[3, 5]), s(&[1, 4]), s(&[2, 5])],
            subject_preferences: vec![s(&[0, 2]), s(&[3, 5]), s(&[1]), s(&[4])],
        }
    }

    /// Adds preferred slots for a teacher, by name.
    pub fn with_teacher_preference(mut self, teacher: &str, slots: &[&str]) -> Result<Self> {
        let t = lookup(&self.teachers, teacher, "teacher")?;
        let ids = self.slot_ids(slots)?;
        self.teacher_preferences[t].extend(ids);
        Ok(self)
    }

    /// Adds preferred slots for a subject, by name.
    pub fn with_subject_preference(mut self, subject: &str, slots: &[&str]) -> Result<Self> {
        let s = lookup(&self.subjects, subject, "subject")?;
        let ids = self.slot_ids(slots)?;
        self.subject_preferences[s].extend(ids);
        Ok(self)
    }

    /// Checks that every list is non-empty, names are unique and
    /// preferences reference existing slots.
    pub fn validate(&self) -> Result<()> {
        for (kind, names) in [
            ("teacher", &self.teachers),
            ("subject", &self.subjects),
            ("group", &self.groups),
            ("slot", &self.slots),
        ] {
            if names.is_empty() {
                return Err(Error::InvalidConfiguration(format!("no {kind}s defined")));
            }
            for (i, name) in names.iter().enumerate() {
                if names[..i].contains(name) {
                    return Err(Error::InvalidConfiguration(format!(
                        "duplicate {kind} name {name:?}"
                    )));
                }
            }
        }
        if self.teacher_preferences.len() != self.teachers.len()
            || self.subject_preferences.len() != self.subjects.len()
        {
            return Err(Error::InvalidConfiguration(
                "preference tables do not match teacher/subject lists".into(),
            ));
        }
        let slot_count = self.slots.len();
        let out_of_range = self
            .teacher_preferences
            .iter()
            .chain(&self.subject_preferences)
            .flatten()
            .any(|s| s.0 >= slot_count);
        if out_of_range {
            return Err(Error::InvalidConfiguration(
                "preference references an unknown slot".into(),
            ));
        }
        Ok(())
    }

    /// Teacher names, indexed by [`TeacherId`].
    pub fn teachers(&self) -> &[String] {
        &self.teachers
    }

    /// Subject names, indexed by [`SubjectId`].
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// Group names, indexed by [`GroupId`](super::types::GroupId).
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Slot labels, indexed by [`SlotId`].
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Number of classes in a genome: one per (slot, group) pair.
    pub fn genome_len(&self) -> usize {
        self.slots.len() * self.groups.len()
    }

    /// Whether `teacher` prefers to teach in `slot`.
    pub fn teacher_prefers(&self, teacher: TeacherId, slot: SlotId) -> bool {
        self.teacher_preferences
            .get(teacher.0)
            .is_some_and(|slots| slots.contains(&slot))
    }

    /// Whether `subject` is preferably taught in `slot`.
    pub fn subject_prefers(&self, subject: SubjectId, slot: SlotId) -> bool {
        self.subject_preferences
            .get(subject.0)
            .is_some_and(|slots| slots.contains(&slot))
    }

    fn slot_ids(&self, names: &[&str]) -> Result<Vec<SlotId>> {
        names
            .iter()
            .map(|name| lookup(&self.slots, name, "slot").map(SlotId))
            .collect()
    }
}

fn owned_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn lookup(names: &[String], name: &str, kind: &str) -> Result<usize> {
    names
        .iter()
        .position(|n| n == name)
        .ok_or_else(|| Error::InvalidConfiguration(format!("unknown {kind} {name:?}")))
}
