//! Fixed-capacity, newest-first log of planned paths.

use skydeck_core::PathRecord;
use std::collections::VecDeque;

/// Bounded history of path records, ordered by creation time with the most
/// recent record first. Inserting past capacity evicts the oldest record.
#[derive(Debug)]
pub struct PathHistory {
    records: VecDeque<PathRecord>,
    capacity: usize,
}

impl PathHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert a record at the front, dropping the oldest past capacity.
    pub fn push(&mut self, record: PathRecord) {
        self.records.push_front(record);
        self.records.truncate(self.capacity);
    }

    /// All records, newest first.
    pub fn records(&self) -> Vec<PathRecord> {
        self.records.iter().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<PathRecord> {
        self.records.iter().find(|r| r.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use skydeck_core::{plan_coverage, summarize, PlanningParameters};

    fn record(id: &str, width_m: f64) -> PathRecord {
        let params = PlanningParameters {
            width_m,
            length_m: 10.0,
            gap_m: 2.0,
            max_altitude_m: 3.0,
            height_m: None,
            speed_mps: None,
        };
        let path = plan_coverage(&params).unwrap();
        let metadata = summarize(&params, &path);
        PathRecord {
            id: id.to_string(),
            created_at: Utc::now(),
            params,
            path,
            metadata,
        }
    }

    #[test]
    fn newest_record_comes_first() {
        let mut history = PathHistory::new(10);
        history.push(record("a", 10.0));
        history.push(record("b", 20.0));

        let records = history.records();
        assert_eq!(records[0].id, "b");
        assert_eq!(records[1].id, "a");
    }

    #[test]
    fn capacity_evicts_the_oldest_record() {
        let mut history = PathHistory::new(2);
        history.push(record("a", 10.0));
        history.push(record("b", 20.0));
        history.push(record("c", 30.0));

        assert_eq!(history.len(), 2);
        assert!(history.get("a").is_none());
        assert_eq!(history.records()[0].id, "c");
    }

    #[test]
    fn lookup_by_id() {
        let mut history = PathHistory::new(5);
        history.push(record("a", 10.0));

        assert_eq!(history.get("a").unwrap().params.width_m, 10.0);
        assert!(history.get("missing").is_none());
    }
}
