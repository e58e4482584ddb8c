//! Fleet status reporting.
//!
//! Aggregates the roster, inventory, matcher, and detector views into
//! serializable snapshots.
//!
//! # Contents
//!
//! | Section | Source |
//! |---------|--------|
//! | Roster capacity | [`Roster::capacity`] |
//! | Fleet summary | [`Inventory::summary`] |
//! | Active assignments | [`Matcher::active_assignments`](crate::matching::Matcher::active_assignments) |
//! | Conflict summary | latest full detection pass |
//! | Priority reassignments | missions with critical conflicts |

use serde::{Deserialize, Serialize};

use crate::fleet::Fleet;
use crate::inventory::{FleetSummary, Inventory};
use crate::matching::ActiveAssignment;
use crate::models::{Conflict, PriorityReassignment, Severity};
use crate::reassignment::ReassignmentCoordinator;
use crate::roster::{Roster, RosterCapacity};

/// Conflict totals per severity, plus the conflicts themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConflictSummary {
    pub total: usize,
    pub critical: usize,
    pub warnings: usize,
    pub info: usize,
    pub conflicts: Vec<Conflict>,
}

impl ConflictSummary {
    /// Counts a detection result.
    pub fn from_conflicts(conflicts: &[Conflict]) -> Self {
        let count = |sev: Severity| conflicts.iter().filter(|c| c.severity == sev).count();
        Self {
            total: conflicts.len(),
            critical: count(Severity::Critical),
            warnings: count(Severity::Warning),
            info: count(Severity::Info),
            conflicts: conflicts.to_vec(),
        }
    }

    /// Whether anything critical was found.
    pub fn has_critical(&self) -> bool {
        self.critical > 0
    }
}

/// Point-in-time snapshot of the whole operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub roster_capacity: RosterCapacity,
    pub fleet_summary: FleetSummary,
    pub active_assignments: Vec<ActiveAssignment>,
    pub conflicts: ConflictSummary,
    pub priority_reassignments: Vec<PriorityReassignment>,
}

impl StatusReport {
    /// Builds a report, running one full detection pass.
    ///
    /// # Arguments
    /// * `coordinator` - Supplies the matcher and detector; its detector
    ///   keeps the pass's results afterwards.
    /// * `workday_hours` - Billable pilot hours per mission day.
    pub fn generate(coordinator: &mut ReassignmentCoordinator, fleet: &Fleet, workday_hours: f64) -> Self {
        let priority_reassignments = coordinator.priority_reassignments(fleet);
        Self {
            roster_capacity: Roster::new(fleet, workday_hours).capacity(),
            fleet_summary: Inventory::new(fleet).summary(),
            active_assignments: coordinator.matcher().active_assignments(fleet),
            conflicts: ConflictSummary::from_conflicts(coordinator.detector().conflicts()),
            priority_reassignments,
        }
    }
}
