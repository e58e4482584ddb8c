//! Reassignment suggestion model.
//!
//! Suggestions are advisory. Nothing changes until a caller applies one
//! through the reassignment entry points.

use serde::{Deserialize, Serialize};

use super::ConflictType;

/// How soon a suggestion should be acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Urgency {
    /// Whenever convenient.
    Low,
    /// Before the mission is scheduled.
    Medium,
    /// Before the mission starts.
    High,
    /// Immediately.
    Critical,
}

/// A proposed alternative assignment for one mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReassignmentSuggestion {
    /// Mission the suggestion applies to.
    pub mission_id: String,
    /// Pilot currently assigned.
    pub current_pilot: Option<String>,
    /// Proposed pilot (`None` = keep current).
    pub suggested_pilot: Option<String>,
    /// Drone currently assigned.
    pub current_drone: Option<String>,
    /// Proposed drone (`None` = keep current).
    pub suggested_drone: Option<String>,
    /// Human-readable reason.
    pub reason: String,
    /// Urgency.
    pub urgency: Urgency,
}

/// A mission needing urgent attention, with its critical conflicts
/// summarized and a short list of remedies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityReassignment {
    /// Affected mission.
    pub mission_id: String,
    /// Project name of the mission.
    pub project_name: String,
    /// Number of critical conflicts on the mission.
    pub conflict_count: usize,
    /// Distinct critical conflict types, in first-seen order.
    pub conflict_types: Vec<ConflictType>,
    /// Up to a configured number of suggestions.
    pub suggestions: Vec<ReassignmentSuggestion>,
}

impl ReassignmentSuggestion {
    /// Whether applying the suggestion changes the pilot.
    pub fn changes_pilot(&self) -> bool {
        self.suggested_pilot.is_some()
    }

    /// Whether applying the suggestion changes the drone.
    pub fn changes_drone(&self) -> bool {
        self.suggested_drone.is_some()
    }
}
