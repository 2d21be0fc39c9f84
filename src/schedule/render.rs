//! Console rendering of timetables.

use super::domain::ScheduleDomain;
use super::types::{Assignment, GroupId, SlotId};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, Table};
use std::fmt::Write;

/// Renders a timetable as one table per group, one row per slot.
///
/// Slots without a class for the group show as `Free`. Classes sharing a
/// slot are listed on consecutive rows.
pub fn render_schedule(domain: &ScheduleDomain, schedule: &[Assignment], title: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count().max(20)));

    for (g, group) in domain.groups().iter().enumerate() {
        let mut table = Table::new();
        table.load_preset(ASCII_FULL).set_header(vec![
            Cell::new("Slot").add_attribute(Attribute::Bold),
            Cell::new("Subject"),
            Cell::new("Teacher"),
        ]);

        for (s, slot) in domain.slots().iter().enumerate() {
            let mut classes = schedule
                .iter()
                .filter(|a| a.group == GroupId(g) && a.slot == SlotId(s))
                .peekable();

            if classes.peek().is_none() {
                table.add_row(vec![slot.as_str(), "Free", "-"]);
            }
            for class in classes {
                table.add_row(vec![
                    slot.as_str(),
                    name_or_unknown(domain.subjects(), class.subject.0),
                    name_or_unknown(domain.teachers(), class.teacher.0),
                ]);
            }
        }

        let _ = writeln!(out, "\n{group}:");
        let _ = writeln!(out, "{table}");
    }
    out
}

fn name_or_unknown(names: &[String], idx: usize) -> &str {
    names.get(idx).map_or("?", String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::{SubjectId, TeacherId};

    #[test]
    fn test_render_lists_classes_and_free_slots() {
        let domain = ScheduleDomain::new(&["Ada"], &["Math"], &["G1", "G2"], &["Mon", "Tue"]).unwrap();
        let schedule = vec![Assignment {
            slot: SlotId(1),
            group: GroupId(0),
            teacher: TeacherId(0),
            subject: SubjectId(0),
        }];

        let text = render_schedule(&domain, &schedule, "Timetable");

        assert!(text.starts_with("Timetable\n"));
        assert!(text.contains("G1:"));
        assert!(text.contains("G2:"));
        assert!(text.contains("Math"));
        assert!(text.contains("Ada"));
        // G1 is free on Mon, G2 on both days.
        assert_eq!(text.matches("Free").count(), 3);
    }
}
