//! Per-candidate outcomes and the aggregated run summary.

/// What happened to a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Moved from the root into the archive directory (or would be, in dry-run).
    Moved,
    /// Already present in the archive directory; the source was left alone.
    AlreadyAtDestination,
    /// Present in neither location.
    NotFound,
    /// The move was attempted (or the candidate inspected) and failed.
    Error(String),
}

impl MoveOutcome {
    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            MoveOutcome::Moved => "moved",
            MoveOutcome::AlreadyAtDestination => "already_at_destination",
            MoveOutcome::NotFound => "not_found",
            MoveOutcome::Error(_) => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateReport {
    pub name: String,
    pub outcome: MoveOutcome,
}

/// Counters for one run plus the ordered per-candidate reports.
///
/// `skipped()` folds already-organized, not-found and failed candidates into
/// one number; the split counters are kept for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub moved: usize,
    pub already_organized: usize,
    pub not_found: usize,
    pub failed: usize,
    pub reports: Vec<CandidateReport>,
}

impl Summary {
    pub fn record(&mut self, report: CandidateReport) {
        match report.outcome {
            MoveOutcome::Moved => self.moved += 1,
            MoveOutcome::AlreadyAtDestination => self.already_organized += 1,
            MoveOutcome::NotFound => self.not_found += 1,
            MoveOutcome::Error(_) => self.failed += 1,
        }
        self.reports.push(report);
    }

    pub fn skipped(&self) -> usize {
        self.already_organized + self.not_found + self.failed
    }

    pub fn total(&self) -> usize {
        self.moved + self.skipped()
    }

    pub fn has_errors(&self) -> bool {
        self.failed > 0
    }

    /// Outcome recorded for `name`, if it was part of the run.
    pub fn outcome_of(&self, name: &str) -> Option<&MoveOutcome> {
        self.reports
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &str, outcome: MoveOutcome) -> CandidateReport {
        CandidateReport {
            name: name.to_string(),
            outcome,
        }
    }

    #[test]
    fn skipped_folds_three_outcomes() {
        let mut s = Summary::default();
        s.record(report("a.sh", MoveOutcome::Moved));
        s.record(report("b.sh", MoveOutcome::AlreadyAtDestination));
        s.record(report("c.sh", MoveOutcome::NotFound));
        s.record(report("d.sh", MoveOutcome::Error("boom".into())));

        assert_eq!(s.moved, 1);
        assert_eq!(s.skipped(), 3);
        assert_eq!(s.total(), 4);
        assert!(s.has_errors());
        assert_eq!(s.outcome_of("c.sh"), Some(&MoveOutcome::NotFound));
        assert_eq!(s.outcome_of("zzz.sh"), None);
    }

    #[test]
    fn reports_keep_insertion_order() {
        let mut s = Summary::default();
        for n in ["z.sh", "a.sh", "m.sh"] {
            s.record(report(n, MoveOutcome::NotFound));
        }
        let names: Vec<_> = s.reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["z.sh", "a.sh", "m.sh"]);
    }

    #[test]
    fn kind_labels() {
        assert_eq!(MoveOutcome::Moved.kind(), "moved");
        assert_eq!(MoveOutcome::Error(String::new()).kind(), "error");
        assert_eq!(MoveOutcome::NotFound.kind(), "not_found");
    }
}
