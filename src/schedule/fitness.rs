//! Constraint-satisfaction score for timetables.

use super::domain::ScheduleDomain;
use super::types::{Assignment, GroupId, SlotId};
use std::collections::{BTreeMap, HashSet};

/// Starting score before penalties and bonuses.
pub const BASE_SCORE: i64 = 100;
/// Penalty per slot in which some teacher is booked twice.
pub const TEACHER_CLASH_PENALTY: i64 = 20;
/// Penalty per slot in which some group is booked twice.
pub const GROUP_CLASH_PENALTY: i64 = 30;
/// Bonus per class held in one of its teacher's preferred slots.
pub const TEACHER_PREFERENCE_BONUS: i64 = 5;
/// Bonus per class held in one of its subject's preferred slots.
pub const SUBJECT_PREFERENCE_BONUS: i64 = 3;
/// Penalty per unit of subject-count spread within a group.
pub const IMBALANCE_PENALTY: i64 = 2;

/// Scores a timetable. Higher is better; the result is never negative.
///
/// Starting from [`BASE_SCORE`]:
///
/// - each slot with a double-booked teacher costs [`TEACHER_CLASH_PENALTY`]
/// - each slot with a double-booked group costs [`GROUP_CLASH_PENALTY`]
/// - each class in a teacher-preferred slot earns [`TEACHER_PREFERENCE_BONUS`],
///   and in a subject-preferred slot [`SUBJECT_PREFERENCE_BONUS`]
/// - each group loses [`IMBALANCE_PENALTY`] × (most − least frequent subject
///   count), counting only subjects the group actually takes
///
/// The total is floored at 0.
pub fn evaluate_schedule(domain: &ScheduleDomain, schedule: &[Assignment]) -> i64 {
    let mut score = BASE_SCORE;

    // Clashes are counted once per slot, however many entries collide.
    let mut teacher_seen = HashSet::new();
    let mut group_seen = HashSet::new();
    let mut teacher_clash_slots: HashSet<SlotId> = HashSet::new();
    let mut group_clash_slots: HashSet<SlotId> = HashSet::new();

    for a in schedule {
        if !teacher_seen.insert((a.slot, a.teacher)) {
            teacher_clash_slots.insert(a.slot);
        }
        if !group_seen.insert((a.slot, a.group)) {
            group_clash_slots.insert(a.slot);
        }
    }
    score -= TEACHER_CLASH_PENALTY * teacher_clash_slots.len() as i64;
    score -= GROUP_CLASH_PENALTY * group_clash_slots.len() as i64;

    for a in schedule {
        if domain.teacher_prefers(a.teacher, a.slot) {
            score += TEACHER_PREFERENCE_BONUS;
        }
        if domain.subject_prefers(a.subject, a.slot) {
            score += SUBJECT_PREFERENCE_BONUS;
        }
    }

    let mut subject_counts: BTreeMap<GroupId, BTreeMap<_, i64>> = BTreeMap::new();
    for a in schedule {
        *subject_counts
            .entry(a.group)
            .or_default()
            .entry(a.subject)
            .or_default() += 1;
    }
    for counts in subject_counts.values() {
        let max = counts.values().copied().max().unwrap_or(0);
        let min = counts.values().copied().min().unwrap_or(0);
        score -= IMBALANCE_PENALTY * (max - min);
    }

    score.max(0)
}
