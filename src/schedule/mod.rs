//! School timetable genome model.
//!
//! A timetable assigns a teacher and a subject to every (slot, group) pair.
//! The GA evolves teacher and subject choices only; the (slot, group) layout
//! is fixed by [`ScheduleDomain`].
//!
//! # Scoring
//!
//! [`evaluate_schedule`] rewards preferred slots and penalizes double
//! bookings and uneven subject distribution, floored at zero. The same
//! function scores both ad-hoc timetables and GA individuals.
//!
//! Use [`GaConfig::schedule`](crate::ga::GaConfig::schedule) for the usual
//! parameters (roulette selection, population 50, mutation rate 0.1).

mod domain;
mod fitness;
mod problem;
mod render;
mod types;

pub use domain::ScheduleDomain;
pub use fitness::{
    evaluate_schedule, BASE_SCORE, GROUP_CLASH_PENALTY, IMBALANCE_PENALTY,
    SUBJECT_PREFERENCE_BONUS, TEACHER_CLASH_PENALTY, TEACHER_PREFERENCE_BONUS,
};
pub use problem::ScheduleProblem;
pub use render::render_schedule;
pub use types::{Assignment, GroupId, Schedule, SlotId, SubjectId, TeacherId};
