//! Conflict model.
//!
//! A conflict is a rule violation found in the current assignment state.
//! Conflicts are recomputed on every detection pass and never stored as
//! authoritative state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    /// A resource holds two missions with overlapping dates.
    DoubleBooking,
    /// Pilot lacks a required skill or certification.
    SkillMismatch,
    /// Drone lacks a required capability.
    EquipmentMismatch,
    /// Drone maintenance is overdue.
    MaintenanceConflict,
    /// Drone tier is not rated for the forecast.
    WeatherRisk,
    /// Resource is based somewhere other than the mission site.
    LocationMismatch,
    /// Pilot plus drone cost exceeds the budget.
    BudgetOverrun,
}

impl ConflictType {
    /// Snake-case tag.
    pub fn as_str(self) -> &'static str {
        match self {
            ConflictType::DoubleBooking => "double_booking",
            ConflictType::SkillMismatch => "skill_mismatch",
            ConflictType::EquipmentMismatch => "equipment_mismatch",
            ConflictType::MaintenanceConflict => "maintenance_conflict",
            ConflictType::WeatherRisk => "weather_risk",
            ConflictType::LocationMismatch => "location_mismatch",
            ConflictType::BudgetOverrun => "budget_overrun",
        }
    }
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conflict severity, ordered `Info < Warning < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Worth knowing; no action required.
    Info,
    /// Mission can proceed but at risk.
    Warning,
    /// Mission cannot proceed as assigned.
    Critical,
}

/// A detected conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// Identifier, unique within one detection pass.
    pub id: String,
    /// Conflict classification.
    pub conflict_type: ConflictType,
    /// Severity.
    pub severity: Severity,
    /// Mission the conflict was found on.
    pub mission_id: String,
    /// Pilot involved, if any.
    pub pilot_id: Option<String>,
    /// Drone involved, if any.
    pub drone_id: Option<String>,
    /// Human-readable description.
    pub description: String,
    /// Human-readable remedy.
    pub suggested_action: String,
}

impl Conflict {
    /// Creates a conflict with no resource attached and an empty id.
    ///
    /// The detector stamps ids when it records the conflict.
    pub fn new(
        conflict_type: ConflictType,
        severity: Severity,
        mission_id: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            conflict_type,
            severity,
            mission_id: mission_id.into(),
            pilot_id: None,
            drone_id: None,
            description: description.into(),
            suggested_action: String::new(),
        }
    }

    /// Attaches a pilot.
    pub fn with_pilot(mut self, pilot_id: impl Into<String>) -> Self {
        self.pilot_id = Some(pilot_id.into());
        self
    }

    /// Attaches a drone.
    pub fn with_drone(mut self, drone_id: impl Into<String>) -> Self {
        self.drone_id = Some(drone_id.into());
        self
    }

    /// Sets the suggested action.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.suggested_action = action.into();
        self
    }

    /// Sets the identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Whether this conflict is critical.
    #[inline]
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}
