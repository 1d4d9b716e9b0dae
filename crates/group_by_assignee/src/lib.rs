// crates/group_by_assignee/src/lib.rs

use std::collections::HashMap;

use todo_record::TodoRecord;

/// TODO records bucketed by assignee.
///
/// Sections are kept in the order their assignee first appeared in the input.
/// Within a section records are sorted by ascending priority; records with an
/// equal priority keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    sections: Vec<(String, Vec<TodoRecord>)>,
}

impl Report {
    /// Iterates over `(assignee, records)` in first-seen order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &[TodoRecord])> {
        self.sections
            .iter()
            .map(|(assignee, records)| (assignee.as_str(), records.as_slice()))
    }

    /// The sorted records of one assignee, if it has any.
    pub fn get(&self, assignee: &str) -> Option<&[TodoRecord]> {
        self.sections
            .iter()
            .find(|(name, _)| name == assignee)
            .map(|(_, records)| records.as_slice())
    }

    /// Number of assignee sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of records across all sections.
    pub fn record_count(&self) -> usize {
        self.sections.iter().map(|(_, records)| records.len()).sum()
    }
}

/// Groups `records` by assignee and sorts each group by priority.
pub fn group_by_assignee(records: Vec<TodoRecord>) -> Report {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut sections: Vec<(String, Vec<TodoRecord>)> = Vec::new();

    for record in records {
        let existing = positions.get(&record.assignee).copied();
        let slot = match existing {
            Some(slot) => slot,
            None => {
                let slot = sections.len();
                positions.insert(record.assignee.clone(), slot);
                sections.push((record.assignee.clone(), Vec::new()));
                slot
            }
        };
        sections[slot].1.push(record);
    }

    for (assignee, bucket) in sections.iter_mut() {
        // `sort_by` is stable.
        bucket.sort_by(|a, b| a.priority.cmp(&b.priority));
        log::debug!("assignee {}: {} record(s)", assignee, bucket.len());
    }

    Report { sections }
}
