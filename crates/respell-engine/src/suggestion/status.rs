// Search status tracking: cost budget, abort condition, per-category reports.

use respell_core::Category;
use serde::{Deserialize, Serialize};

/// What one generator category contributed to a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub category: Category,
    /// Candidates produced and looked up.
    pub generated: usize,
    /// Candidates found in the vocabulary.
    pub matched: usize,
}

/// Tracks the state of one suggestion search.
///
/// Every vocabulary lookup increments the cost by 1 via `charge()`. When a
/// `max_cost` is set, the search stops once the cost reaches it. This is
/// the deadline hook for callers that cannot afford a full double-edit
/// expansion of a long word. Without a budget the search is unbounded.
#[derive(Debug, Clone, Default)]
pub struct SearchStatus {
    /// Maximum number of lookups before aborting, if any.
    max_cost: Option<usize>,
    /// Lookups done so far.
    cost: usize,
    /// Set once the budget stopped the search early.
    aborted: bool,
    reports: Vec<CategoryReport>,
}

impl SearchStatus {
    pub fn new(max_cost: Option<usize>) -> Self {
        Self {
            max_cost,
            ..Self::default()
        }
    }

    /// Returns `true` if no more candidates should be looked up.
    pub fn should_abort(&self) -> bool {
        self.max_cost.is_some_and(|max| self.cost >= max)
    }

    /// Count one vocabulary lookup.
    pub fn charge(&mut self) {
        self.cost += 1;
    }

    /// Record that the budget cut the search short.
    pub fn mark_aborted(&mut self) {
        self.aborted = true;
    }

    pub fn record(&mut self, report: CategoryReport) {
        self.reports.push(report);
    }

    pub fn cost(&self) -> usize {
        self.cost
    }

    pub fn aborted(&self) -> bool {
        self.aborted
    }

    /// Consume the status, returning the reports.
    pub fn into_reports(self) -> Vec<CategoryReport> {
        self.reports
    }
}
