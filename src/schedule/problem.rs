//! Assignment-grid genome model for timetables.

use super::domain::ScheduleDomain;
use super::fitness::evaluate_schedule;
use super::types::{Assignment, GroupId, Schedule, SlotId, SubjectId, TeacherId};
use crate::error::{Error, Result};
use crate::ga::operators::single_point_crossover;
use crate::ga::GaProblem;
use rand::Rng;

/// Timetabling as a GA problem.
///
/// A genome holds one [`Assignment`] per (slot, group) pair, laid out
/// slot-major. Crossover is single-point; mutation reassigns the teacher and
/// subject of one class. Fitness is [`evaluate_schedule`].
#[derive(Debug, Clone)]
pub struct ScheduleProblem {
    domain: ScheduleDomain,
}

impl ScheduleProblem {
    /// Wraps a validated domain.
    pub fn new(domain: ScheduleDomain) -> Result<Self> {
        domain.validate()?;
        Ok(Self { domain })
    }

    /// The domain this problem schedules over.
    pub fn domain(&self) -> &ScheduleDomain {
        &self.domain
    }

    /// Scores a timetable against this problem's domain.
    pub fn evaluate_schedule(&self, schedule: &[Assignment]) -> i64 {
        evaluate_schedule(&self.domain, schedule)
    }

    /// Gives one random class a fresh random teacher and subject.
    pub fn reassign<R: Rng>(&self, schedule: &mut [Assignment], rng: &mut R) {
        if schedule.is_empty() {
            return;
        }
        let idx = rng.random_range(0..schedule.len());
        let class = &mut schedule[idx];
        class.teacher = TeacherId(rng.random_range(0..self.domain.teachers().len()));
        class.subject = SubjectId(rng.random_range(0..self.domain.subjects().len()));
    }
}

impl GaProblem for ScheduleProblem {
    type Genome = Schedule;
    type Fitness = i64;

    fn create_genome<R: Rng>(&self, rng: &mut R) -> Schedule {
        let teachers = self.domain.teachers().len();
        let subjects = self.domain.subjects().len();
        let groups = self.domain.groups().len();

        let mut schedule = Vec::with_capacity(self.domain.genome_len());
        for slot in 0..self.domain.slots().len() {
            for group in 0..groups {
                let teacher = TeacherId(rng.random_range(0..teachers));
                let subject = SubjectId(rng.random_range(0..subjects));
                schedule.push(Assignment {
                    slot: SlotId(slot),
                    group: GroupId(group),
                    teacher,
                    subject,
                });
            }
        }
        schedule
    }

    fn evaluate(&self, schedule: &Schedule) -> Result<i64> {
        Ok(evaluate_schedule(&self.domain, schedule))
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Schedule,
        parent2: &Schedule,
        rng: &mut R,
    ) -> (Schedule, Schedule) {
        single_point_crossover(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, schedule: &mut Schedule, rng: &mut R) {
        self.reassign(schedule, rng);
    }

    fn check(&self, schedule: &Schedule) -> Result<()> {
        let expected = self.domain.genome_len();
        if schedule.len() != expected {
            return Err(Error::InvalidGenome(format!(
                "schedule has {} classes, expected {expected}",
                schedule.len()
            )));
        }
        let d = &self.domain;
        let bad = schedule.iter().position(|a| {
            a.slot.0 >= d.slots().len()
                || a.group.0 >= d.groups().len()
                || a.teacher.0 >= d.teachers().len()
                || a.subject.0 >= d.subjects().len()
        });
        match bad {
            Some(i) => Err(Error::InvalidGenome(format!(
                "class {i} references an unknown id: {:?}",
                schedule[i]
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn problem() -> ScheduleProblem {
        ScheduleProblem::new(ScheduleDomain::school_week()).unwrap()
    }

    #[test]
    fn test_genome_layout_is_slot_major() {
        let p = problem();
        let mut rng = create_rng(42);
        let s = p.create_genome(&mut rng);

        assert_eq!(s.len(), 18);
        for (i, a) in s.iter().enumerate() {
            assert_eq!(a.slot, SlotId(i / 3));
            assert_eq!(a.group, GroupId(i % 3));
        }
        assert!(p.check(&s).is_ok());
    }

    #[test]
    fn test_evaluate_matches_free_function() {
        let p = problem();
        let mut rng = create_rng(3);
        for _ in 0..20 {
            let s = p.create_genome(&mut rng);
            let score = p.evaluate(&s).unwrap();
            assert_eq!(score, evaluate_schedule(p.domain(), &s));
            assert_eq!(score, p.evaluate_schedule(&s));
            assert!(score >= 0);
        }
    }

    #[test]
    fn test_reassign_touches_one_class_teacher_and_subject_only() {
        let p = problem();
        let mut rng = create_rng(8);
        for _ in 0..100 {
            let original = p.create_genome(&mut rng);
            let mut mutated = original.clone();
            p.mutate(&mut mutated, &mut rng);

            let changed: Vec<usize> = (0..original.len())
                .filter(|&i| original[i] != mutated[i])
                .collect();
            assert!(changed.len() <= 1, "{changed:?}");
            for (a, b) in original.iter().zip(&mutated) {
                assert_eq!(a.slot, b.slot);
                assert_eq!(a.group, b.group);
            }
            assert!(p.check(&mutated).is_ok());
        }
    }

    #[test]
    fn test_crossover_preserves_layout() {
        let p = problem();
        let mut rng = create_rng(21);
        for _ in 0..100 {
            let a = p.create_genome(&mut rng);
            let b = p.create_genome(&mut rng);
            let (c1, c2) = p.crossover(&a, &b, &mut rng);
            for child in [&c1, &c2] {
                assert!(p.check(child).is_ok());
                for (i, class) in child.iter().enumerate() {
                    assert_eq!(class.slot, a[i].slot);
                    assert_eq!(class.group, a[i].group);
                }
            }
            // Every position comes from one of the parents.
            for i in 0..a.len() {
                assert!(c1[i] == a[i] || c1[i] == b[i]);
                assert!(c2[i] == a[i] || c2[i] == b[i]);
            }
        }
    }

    #[test]
    fn test_check_rejects_wrong_length_and_ids() {
        let p = problem();
        let mut rng = create_rng(1);
        let mut s = p.create_genome(&mut rng);

        s[4].teacher = TeacherId(9);
        assert!(matches!(p.check(&s), Err(Error::InvalidGenome(_))));

        s.pop();
        assert!(matches!(p.check(&s), Err(Error::InvalidGenome(_))));
    }

    #[test]
    fn test_small_domain_fixture() {
        let domain = ScheduleDomain::new(&["T"], &["S"], &["G"], &["Mon"]).unwrap();
        let p = ScheduleProblem::new(domain).unwrap();
        let mut rng = create_rng(0);
        let s = p.create_genome(&mut rng);
        assert_eq!(
            s,
            vec![Assignment {
                slot: SlotId(0),
                group: GroupId(0),
                teacher: TeacherId(0),
                subject: SubjectId(0),
            }]
        );
        assert_eq!(p.evaluate(&s).unwrap(), 100);
    }
}
