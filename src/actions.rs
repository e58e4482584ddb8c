//! Engine facade and semantic actions.
//!
//! A conversational or HTTP front end talks to the engine through five
//! actions, each a tagged JSON object:
//!
//! | `action` | Fields | Mutates |
//! |----------|--------|---------|
//! | `match_mission` | `mission_id` | no |
//! | `detect_conflicts` | `mission_id`? | detector results only |
//! | `reassign` | `mission_id`, `pilot_id`?, `drone_id`? | yes |
//! | `update_pilot_status` | `pilot_id`, `status` | yes |
//! | `suggest_reassign` | `mission_id`, `max_suggestions`? | no |
//!
//! # Concurrency
//! [`Engine`] takes `&self` for reads and `&mut self` for anything that
//! changes state, so reads never interleave with a mutation. Hosts that
//! share one engine across threads wrap it in a `RwLock` and route
//! [`Engine::execute`] through the write guard.
//!
//! Unknown ids are reported as [`ActionOutcome::NotFound`], never as an
//! error. This includes a `detect_conflicts` narrowed to an unknown mission.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::FleetResult;
use crate::fleet::Fleet;
use crate::inventory::{self, Inventory};
use crate::matching::{DroneMatch, MatchSummary, PilotMatch};
use crate::models::{Conflict, Drone, DroneStatus, Mission, Pilot, PilotStatus, ReassignmentSuggestion};
use crate::reassignment::ReassignmentCoordinator;
use crate::report::{ConflictSummary, StatusReport};
use crate::roster::{self, Roster};

/// A request from the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Rank candidates for a mission.
    MatchMission { mission_id: String },
    /// Run a full detection pass, optionally narrowed to one mission.
    DetectConflicts {
        #[serde(default)]
        mission_id: Option<String>,
    },
    /// Apply a new pilot and/or drone.
    Reassign {
        mission_id: String,
        #[serde(default)]
        pilot_id: Option<String>,
        #[serde(default)]
        drone_id: Option<String>,
    },
    /// Change a pilot's roster status.
    UpdatePilotStatus { pilot_id: String, status: PilotStatus },
    /// Propose alternatives for a mission's conflicts.
    SuggestReassign {
        mission_id: String,
        #[serde(default)]
        max_suggestions: Option<usize>,
    },
}

/// Result of one [`Action`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    Matched {
        summary: MatchSummary,
        pilots: Vec<PilotMatch>,
        drones: Vec<DroneMatch>,
    },
    Conflicts(ConflictSummary),
    Reassigned {
        mission_id: String,
        pilot_id: Option<String>,
        drone_id: Option<String>,
        success: bool,
    },
    PilotStatusUpdated { pilot_id: String, status: PilotStatus },
    Suggestions {
        mission_id: String,
        suggestions: Vec<ReassignmentSuggestion>,
    },
    /// The named record does not exist.
    NotFound { kind: String, id: String },
}

impl ActionOutcome {
    fn not_found(kind: &str, id: &str) -> Self {
        ActionOutcome::NotFound {
            kind: kind.to_string(),
            id: id.to_string(),
        }
    }
}

/// Owns the fleet and every engine component for one session.
#[derive(Debug, Clone)]
pub struct Engine {
    fleet: Fleet,
    config: EngineConfig,
    coordinator: ReassignmentCoordinator,
}

impl Engine {
    /// Wraps a fleet. A configured `as_of` overrides the fleet's date.
    pub fn new(mut fleet: Fleet, config: EngineConfig) -> Self {
        if let Some(as_of) = config.as_of {
            fleet.set_as_of(as_of);
        }
        Self {
            coordinator: ReassignmentCoordinator::new(&config),
            fleet,
            config,
        }
    }

    /// Validates the records and builds an engine over them.
    pub fn from_records(
        pilots: Vec<Pilot>,
        drones: Vec<Drone>,
        missions: Vec<Mission>,
        config: EngineConfig,
    ) -> FleetResult<Self> {
        Ok(Self::new(Fleet::new(pilots, drones, missions)?, config))
    }

    /// The fleet as it currently stands.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The coordinator, with the detector's latest results.
    pub fn coordinator(&self) -> &ReassignmentCoordinator {
        &self.coordinator
    }

    /// Moves the reference date used for maintenance checks.
    pub fn set_as_of(&mut self, as_of: NaiveDate) {
        self.fleet.set_as_of(as_of);
    }

    /// Roster view.
    pub fn roster(&self) -> Roster<'_> {
        Roster::new(&self.fleet, self.config.workday_hours)
    }

    /// Inventory view.
    pub fn inventory(&self) -> Inventory<'_> {
        Inventory::new(&self.fleet)
    }

    // ======================== Reads ========================

    /// Best pilot and drone for a mission. `None` if the mission is unknown.
    pub fn match_mission(&self, mission_id: &str) -> Option<MatchSummary> {
        self.coordinator.matcher().match_mission(&self.fleet, mission_id)
    }

    /// Suggestions for one mission, capped at `max` or the configured default.
    pub fn suggest_reassign(&self, mission_id: &str, max: Option<usize>) -> Vec<ReassignmentSuggestion> {
        match max {
            Some(max) => self.coordinator.suggest(&self.fleet, mission_id, max),
            None => self.coordinator.suggest_default(&self.fleet, mission_id),
        }
    }

    /// Every conflict in the current state, without touching stored results.
    pub fn scan_conflicts(&self) -> Vec<Conflict> {
        self.coordinator.detector().scan(&self.fleet)
    }

    // ======================== Mutations ========================

    /// Full detection pass; the results stay on the detector.
    pub fn detect_conflicts(&mut self) -> ConflictSummary {
        ConflictSummary::from_conflicts(self.coordinator.detect_all(&self.fleet))
    }

    /// See [`ReassignmentCoordinator::apply_reassignment`].
    pub fn reassign(&mut self, mission_id: &str, pilot_id: Option<&str>, drone_id: Option<&str>) -> bool {
        self.coordinator
            .apply_reassignment(&mut self.fleet, mission_id, pilot_id, drone_id)
    }

    /// See [`roster::update_pilot_status`].
    pub fn update_pilot_status(&mut self, pilot_id: &str, status: PilotStatus) -> bool {
        roster::update_pilot_status(&mut self.fleet, pilot_id, status)
    }

    /// See [`inventory::update_drone_status`].
    pub fn update_drone_status(&mut self, drone_id: &str, status: DroneStatus) -> bool {
        inventory::update_drone_status(&mut self.fleet, drone_id, status)
    }

    /// See [`inventory::flag_maintenance`].
    pub fn flag_maintenance(&mut self, drone_id: &str, date: NaiveDate) -> bool {
        inventory::flag_maintenance(&mut self.fleet, drone_id, date)
    }

    /// Snapshot of the whole operation; runs a detection pass.
    pub fn status_report(&mut self) -> StatusReport {
        StatusReport::generate(&mut self.coordinator, &self.fleet, self.config.workday_hours)
    }

    /// Dispatches one front-end action.
    pub fn execute(&mut self, action: Action) -> ActionOutcome {
        match action {
            Action::MatchMission { mission_id } => {
                let Some(mission) = self.fleet.mission(&mission_id) else {
                    return ActionOutcome::not_found("mission", &mission_id);
                };
                let matcher = self.coordinator.matcher();
                let pilots = matcher.rank_pilots(&self.fleet, mission);
                let drones = matcher.rank_drones(&self.fleet, mission);
                let summary = MatchSummary {
                    pilot_id: pilots.first().map(|p| p.pilot_id.clone()),
                    pilot_score: pilots.first().map(|p| p.score).unwrap_or(0.0),
                    drone_id: drones.first().map(|d| d.drone_id.clone()),
                    drone_score: drones.first().map(|d| d.score).unwrap_or(0.0),
                    mission_id,
                };
                ActionOutcome::Matched {
                    summary,
                    pilots,
                    drones,
                }
            }
            Action::DetectConflicts { mission_id } => {
                if let Some(id) = mission_id.as_deref() {
                    if self.fleet.mission(id).is_none() {
                        return ActionOutcome::not_found("mission", id);
                    }
                }
                let all = self.coordinator.detect_all(&self.fleet);
                match mission_id {
                    Some(id) => {
                        let narrowed: Vec<Conflict> =
                            all.iter().filter(|c| c.mission_id == id).cloned().collect();
                        ActionOutcome::Conflicts(ConflictSummary::from_conflicts(&narrowed))
                    }
                    None => ActionOutcome::Conflicts(ConflictSummary::from_conflicts(all)),
                }
            }
            Action::Reassign {
                mission_id,
                pilot_id,
                drone_id,
            } => {
                if self.fleet.mission(&mission_id).is_none() {
                    return ActionOutcome::not_found("mission", &mission_id);
                }
                let success = self.reassign(&mission_id, pilot_id.as_deref(), drone_id.as_deref());
                ActionOutcome::Reassigned {
                    mission_id,
                    pilot_id,
                    drone_id,
                    success,
                }
            }
            Action::UpdatePilotStatus { pilot_id, status } => {
                if self.update_pilot_status(&pilot_id, status) {
                    ActionOutcome::PilotStatusUpdated { pilot_id, status }
                } else {
                    ActionOutcome::not_found("pilot", &pilot_id)
                }
            }
            Action::SuggestReassign {
                mission_id,
                max_suggestions,
            } => {
                if self.fleet.mission(&mission_id).is_none() {
                    return ActionOutcome::not_found("mission", &mission_id);
                }
                let suggestions = self.suggest_reassign(&mission_id, max_suggestions);
                ActionOutcome::Suggestions {
                    mission_id,
                    suggestions,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Severity, WeatherRating};

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn engine() -> Engine {
        let config = EngineConfig {
            as_of: Some(d(1)),
            ..EngineConfig::default()
        };
        Engine::from_records(
            vec![
                Pilot::new("P1")
                    .with_name("Arjun")
                    .with_skill("Mapping")
                    .with_location("Bangalore")
                    .with_assignment("M1"),
                Pilot::new("P2")
                    .with_name("Neha")
                    .with_skill("Mapping")
                    .with_location("Bangalore")
                    .with_experience(800.0),
            ],
            vec![
                Drone::new("D1")
                    .with_model("Mavic")
                    .with_capability("Mapping")
                    .with_location("Bangalore")
                    .with_assignment("M1"),
                Drone::new("D2")
                    .with_model("Matrice")
                    .with_capability("Mapping")
                    .with_location("Bangalore")
                    .with_weather_rating(WeatherRating::Ip43),
            ],
            vec![
                Mission::new("M1", d(10), d(12))
                    .with_location("Bangalore")
                    .with_required_skill("Mapping")
                    .with_weather("Rainy")
                    .with_budget(10_000.0)
                    .with_pilot("P1")
                    .with_drone("D1"),
                Mission::new("M2", d(20), d(22))
                    .with_location("Bangalore")
                    .with_required_skill("Mapping")
                    .with_budget(10_000.0),
            ],
            config,
        )
        .unwrap()
    }

    #[test]
    fn test_config_as_of_applied() {
        assert_eq!(engine().fleet().as_of(), d(1));
    }

    #[test]
    fn test_action_json_shape() {
        let action: Action = serde_json::from_str(
            r#"{"action":"update_pilot_status","pilot_id":"P1","status":"On Leave"}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            Action::UpdatePilotStatus {
                pilot_id: "P1".into(),
                status: PilotStatus::OnLeave,
            }
        );

        let action: Action =
            serde_json::from_str(r#"{"action":"reassign","mission_id":"M1","drone_id":"D2"}"#).unwrap();
        assert_eq!(
            action,
            Action::Reassign {
                mission_id: "M1".into(),
                pilot_id: None,
                drone_id: Some("D2".into()),
            }
        );

        let action: Action = serde_json::from_str(r#"{"action":"detect_conflicts"}"#).unwrap();
        assert_eq!(action, Action::DetectConflicts { mission_id: None });
    }

    #[test]
    fn test_match_mission_action() {
        let mut e = engine();
        match e.execute(Action::MatchMission {
            mission_id: "M2".into(),
        }) {
            ActionOutcome::Matched { summary, pilots, drones } => {
                assert_eq!(summary.pilot_id.as_deref(), Some("P2"));
                assert_eq!(summary.drone_id.as_deref(), Some("D2"));
                assert_eq!(pilots.len(), 2);
                assert_eq!(drones.len(), 1);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        let outcome = e.execute(Action::MatchMission {
            mission_id: "M9".into(),
        });
        assert_eq!(outcome, ActionOutcome::not_found("mission", "M9"));
    }

    #[test]
    fn test_detect_then_suggest_then_reassign() {
        let mut e = engine();

        let summary = match e.execute(Action::DetectConflicts {
            mission_id: Some("M1".into()),
        }) {
            ActionOutcome::Conflicts(s) => s,
            other => panic!("unexpected outcome: {other:?}"),
        };
        assert_eq!(summary.total, 1);
        assert_eq!(summary.conflicts[0].severity, Severity::Warning);

        let suggestions = e.suggest_reassign("M1", None);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].suggested_drone.as_deref(), Some("D2"));

        let outcome = e.execute(Action::Reassign {
            mission_id: "M1".into(),
            pilot_id: None,
            drone_id: Some("D2".into()),
        });
        assert!(matches!(outcome, ActionOutcome::Reassigned { success: true, .. }));
        assert_eq!(e.fleet().drone("D1").unwrap().current_assignment, None);
        assert!(e.scan_conflicts().is_empty());
    }

    #[test]
    fn test_update_pilot_status_action() {
        let mut e = engine();
        let outcome = e.execute(Action::UpdatePilotStatus {
            pilot_id: "P2".into(),
            status: PilotStatus::Unavailable,
        });
        assert!(matches!(outcome, ActionOutcome::PilotStatusUpdated { .. }));
        assert_eq!(e.roster().capacity().unavailable, 1);

        let outcome = e.execute(Action::UpdatePilotStatus {
            pilot_id: "P9".into(),
            status: PilotStatus::Available,
        });
        assert_eq!(outcome, ActionOutcome::not_found("pilot", "P9"));
    }

    #[test]
    fn test_match_summary_is_head_of_rankings() {
        let mut e = engine();
        let expected = e.match_mission("M2").unwrap();
        match e.execute(Action::MatchMission {
            mission_id: "M2".into(),
        }) {
            ActionOutcome::Matched { summary, pilots, .. } => {
                assert_eq!(summary, expected);
                assert!((summary.pilot_score - pilots[0].score).abs() < 1e-10);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_detect_unknown_mission() {
        let mut e = engine();
        let outcome = e.execute(Action::DetectConflicts {
            mission_id: Some("M9".into()),
        });
        assert_eq!(outcome, ActionOutcome::not_found("mission", "M9"));

        let outcome = e.execute(Action::DetectConflicts { mission_id: None });
        assert!(matches!(outcome, ActionOutcome::Conflicts(ref s) if s.total == 1));
    }

    #[test]
    fn test_suggest_unknown_mission() {
        let mut e = engine();
        let outcome = e.execute(Action::SuggestReassign {
            mission_id: "M9".into(),
            max_suggestions: None,
        });
        assert_eq!(outcome, ActionOutcome::not_found("mission", "M9"));
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let outcome = ActionOutcome::not_found("pilot", "P9");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "not_found");
        assert_eq!(json["id"], "P9");
    }
}
