//! Candidate matching for missions.
//!
//! Scores and ranks eligible pilots and drones against one mission at a
//! time, and owns the two entry points that change assignment links.
//!
//! # Greedy, per mission
//! Each mission is matched on its own. Pilot and drone are ranked
//! independently; there is no joint (pilot, drone) search and no
//! optimization across missions.
//!
//! # Score Convention
//! **Higher score = better candidate.** Ties (within `1e-9`) are broken by
//! identity, ascending.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use drone_ops::fleet::Fleet;
//! use drone_ops::matching::Matcher;
//! use drone_ops::models::{Mission, Pilot};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
//! let fleet = Fleet::new(
//!     vec![Pilot::new("P1").with_skill("Mapping").with_hourly_rate(40.0)],
//!     vec![],
//!     vec![Mission::new("M1", day(1), day(3)).with_required_skill("Mapping").with_budget(5000.0)],
//! )
//! .unwrap();
//!
//! let matcher = Matcher::default();
//! let summary = matcher.match_mission(&fleet, "M1").unwrap();
//! assert_eq!(summary.pilot_id.as_deref(), Some("P1"));
//! assert!(summary.drone_id.is_none());
//! ```

mod eligibility;
mod matcher;
mod scoring;

pub use eligibility::{drone_eligible, pilot_eligible};
pub use matcher::Matcher;
pub use scoring::ScoreBreakdown;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scored pilot candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PilotMatch {
    /// Candidate pilot.
    pub pilot_id: String,
    /// Total score.
    pub score: f64,
    /// Per-component score.
    pub breakdown: ScoreBreakdown,
}

/// A scored drone candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneMatch {
    /// Candidate drone.
    pub drone_id: String,
    /// Total score.
    pub score: f64,
    /// Per-component score.
    pub breakdown: ScoreBreakdown,
}

/// Best pilot and best drone for one mission.
///
/// Scores are `0.0` when no candidate is eligible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Mission matched.
    pub mission_id: String,
    /// Best eligible pilot.
    pub pilot_id: Option<String>,
    /// Score of `pilot_id`.
    pub pilot_score: f64,
    /// Best eligible drone.
    pub drone_id: Option<String>,
    /// Score of `drone_id`.
    pub drone_score: f64,
}

/// A mission with at least one resource assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveAssignment {
    /// Mission identifier.
    pub mission_id: String,
    /// Project the mission belongs to.
    pub project_name: String,
    /// Assigned pilot, if any.
    pub pilot_id: Option<String>,
    /// Assigned drone, if any.
    pub drone_id: Option<String>,
    /// First mission day.
    pub start_date: NaiveDate,
    /// Last mission day (inclusive).
    pub end_date: NaiveDate,
    /// Lifecycle status.
    pub status: crate::models::MissionStatus,
}
