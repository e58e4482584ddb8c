//! Reassignment coordination.
//!
//! Turns conflicts into ranked alternative assignments, applies chosen
//! alternatives through the matcher, and builds the fleet-wide list of
//! missions with critical conflicts.
//!
//! # Remedy table
//!
//! | Conflict | Remedy | Urgency |
//! |----------|--------|---------|
//! | `double_booking` (pilot) | alternative pilots | High |
//! | `double_booking` (drone) | alternative drones | High |
//! | `maintenance_conflict` | alternative drones | Critical |
//! | `skill_mismatch` | alternative pilots | High |
//! | `weather_risk` | alternative drones | High |
//!
//! Other conflict types produce no suggestion.
//!
//! # Atomicity
//! [`ReassignmentCoordinator::apply_reassignment`] runs the pilot step and
//! the drone step independently. If the pilot step succeeds and the drone
//! step fails, the pilot change stays applied and the call returns
//! `false`. Callers that need all-or-nothing must check both ids first.

use std::cmp::Ordering;

use tracing::warn;

use crate::config::EngineConfig;
use crate::conflicts::ConflictDetector;
use crate::fleet::Fleet;
use crate::matching::{drone_eligible, pilot_eligible, Matcher};
use crate::models::{
    Conflict, ConflictType, Drone, Mission, Pilot, PriorityReassignment, ReassignmentSuggestion,
    Urgency,
};

/// Proposes and applies reassignments.
#[derive(Debug, Clone)]
pub struct ReassignmentCoordinator {
    matcher: Matcher,
    detector: ConflictDetector,
    default_max_suggestions: usize,
    priority_suggestions: usize,
}

impl ReassignmentCoordinator {
    /// Creates a coordinator from engine configuration.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            matcher: Matcher::new(config),
            detector: ConflictDetector::new(config),
            default_max_suggestions: config.default_max_suggestions,
            priority_suggestions: config.priority_suggestions,
        }
    }

    /// The matcher used for applying reassignments.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// The detector, holding the results of the latest full pass.
    pub fn detector(&self) -> &ConflictDetector {
        &self.detector
    }

    /// Runs a full detection pass on the owned detector.
    pub fn detect_all(&mut self, fleet: &Fleet) -> &[Conflict] {
        self.detector.detect_all(fleet)
    }

    /// Suggestions for one mission with the configured default limit.
    pub fn suggest_default(&self, fleet: &Fleet, mission_id: &str) -> Vec<ReassignmentSuggestion> {
        self.suggest(fleet, mission_id, self.default_max_suggestions)
    }

    /// Suggestions resolving the pilot and drone conflicts of one mission.
    ///
    /// Suggestions are grouped per conflict in detection order and the
    /// concatenation is cut at `max_suggestions`; earlier conflicts win.
    /// Unknown mission → empty.
    pub fn suggest(
        &self,
        fleet: &Fleet,
        mission_id: &str,
        max_suggestions: usize,
    ) -> Vec<ReassignmentSuggestion> {
        let Some(mission) = fleet.mission(mission_id) else {
            return Vec::new();
        };

        let mut suggestions = Vec::new();
        for conflict in self.detector.resource_conflicts(fleet, mission_id) {
            self.remedy(fleet, mission, &conflict, max_suggestions, &mut suggestions);
        }
        suggestions.truncate(max_suggestions);
        suggestions
    }

    fn remedy(
        &self,
        fleet: &Fleet,
        mission: &Mission,
        conflict: &Conflict,
        count: usize,
        out: &mut Vec<ReassignmentSuggestion>,
    ) {
        match conflict.conflict_type {
            ConflictType::DoubleBooking if conflict.pilot_id.is_some() => {
                for p in self.pilot_alternatives(fleet, mission, count) {
                    out.push(pilot_suggestion(
                        mission,
                        p,
                        format!("Pilot conflict: reassign to {}", p.name),
                        Urgency::High,
                    ));
                }
            }
            ConflictType::DoubleBooking if conflict.drone_id.is_some() => {
                for d in self.drone_alternatives(fleet, mission, count) {
                    out.push(drone_suggestion(
                        mission,
                        d,
                        format!("Drone conflict: reassign to {}", d.model),
                        Urgency::High,
                    ));
                }
            }
            ConflictType::MaintenanceConflict => {
                for d in self.drone_alternatives(fleet, mission, count) {
                    out.push(drone_suggestion(
                        mission,
                        d,
                        format!("Drone in maintenance: reassign to {}", d.model),
                        Urgency::Critical,
                    ));
                }
            }
            ConflictType::SkillMismatch => {
                for p in self.pilot_alternatives(fleet, mission, count) {
                    out.push(pilot_suggestion(
                        mission,
                        p,
                        format!("Pilot skill mismatch: reassign to {}", p.name),
                        Urgency::High,
                    ));
                }
            }
            ConflictType::WeatherRisk => {
                for d in self.drone_alternatives(fleet, mission, count) {
                    out.push(drone_suggestion(
                        mission,
                        d,
                        format!("Weather risk: reassign to weather-rated {}", d.model),
                        Urgency::High,
                    ));
                }
            }
            _ => {}
        }
    }

    /// Qualified pilots other than the current one, most experienced first.
    pub fn pilot_alternatives<'a>(
        &self,
        fleet: &'a Fleet,
        mission: &Mission,
        count: usize,
    ) -> Vec<&'a Pilot> {
        let mut candidates: Vec<&Pilot> = fleet
            .pilots()
            .filter(|p| mission.assigned_pilot.as_deref() != Some(p.id.as_str()))
            .filter(|p| pilot_eligible(p, mission))
            .collect();

        candidates.sort_by(|a, b| {
            b.experience_hours
                .partial_cmp(&a.experience_hours)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        candidates.truncate(count);
        candidates
    }

    /// Qualified drones other than the current one, cheapest first.
    pub fn drone_alternatives<'a>(
        &self,
        fleet: &'a Fleet,
        mission: &Mission,
        count: usize,
    ) -> Vec<&'a Drone> {
        let today = fleet.as_of();
        let mut candidates: Vec<&Drone> = fleet
            .drones()
            .filter(|d| mission.assigned_drone.as_deref() != Some(d.id.as_str()))
            .filter(|d| drone_eligible(d, mission, today))
            .collect();

        candidates.sort_by(|a, b| {
            a.daily_rate
                .partial_cmp(&b.daily_rate)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        candidates.truncate(count);
        candidates
    }

    /// Applies a new pilot and/or drone to a mission.
    ///
    /// `None` or empty ids are skipped. Returns `true` only if every
    /// requested step succeeded. Not atomic: see the module docs.
    pub fn apply_reassignment(
        &self,
        fleet: &mut Fleet,
        mission_id: &str,
        new_pilot: Option<&str>,
        new_drone: Option<&str>,
    ) -> bool {
        if fleet.mission(mission_id).is_none() {
            return false;
        }

        let mut success = true;
        let mut applied = false;

        if let Some(pilot_id) = new_pilot.filter(|id| !id.is_empty()) {
            let ok = self.matcher.reassign_pilot(fleet, mission_id, pilot_id);
            applied |= ok;
            success &= ok;
        }
        if let Some(drone_id) = new_drone.filter(|id| !id.is_empty()) {
            let ok = self.matcher.reassign_drone(fleet, mission_id, drone_id);
            applied |= ok;
            success &= ok;
        }

        if applied && !success {
            warn!(
                mission = mission_id,
                pilot = new_pilot.unwrap_or("-"),
                drone = new_drone.unwrap_or("-"),
                "reassignment partially applied"
            );
        }
        success
    }

    /// Missions with at least one critical conflict, in mission order.
    ///
    /// Runs a full detection pass first; warnings and infos never put a
    /// mission on this list.
    pub fn priority_reassignments(&mut self, fleet: &Fleet) -> Vec<PriorityReassignment> {
        self.detector.detect_all(fleet);

        let mut grouped: Vec<(String, Vec<ConflictType>)> = Vec::new();
        for c in self.detector.critical_only() {
            match grouped.iter_mut().find(|(id, _)| *id == c.mission_id) {
                Some((_, types)) => types.push(c.conflict_type),
                None => grouped.push((c.mission_id.clone(), vec![c.conflict_type])),
            }
        }

        grouped
            .into_iter()
            .filter_map(|(mission_id, types)| {
                let mission = fleet.mission(&mission_id)?;
                let mut distinct: Vec<ConflictType> = Vec::new();
                for t in &types {
                    if !distinct.contains(t) {
                        distinct.push(*t);
                    }
                }
                Some(PriorityReassignment {
                    project_name: mission.project_name.clone(),
                    conflict_count: types.len(),
                    conflict_types: distinct,
                    suggestions: self.suggest(fleet, &mission_id, self.priority_suggestions),
                    mission_id,
                })
            })
            .collect()
    }
}

impl Default for ReassignmentCoordinator {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

fn pilot_suggestion(
    mission: &Mission,
    pilot: &Pilot,
    reason: String,
    urgency: Urgency,
) -> ReassignmentSuggestion {
    ReassignmentSuggestion {
        mission_id: mission.id.clone(),
        current_pilot: mission.assigned_pilot.clone(),
        suggested_pilot: Some(pilot.id.clone()),
        current_drone: mission.assigned_drone.clone(),
        suggested_drone: None,
        reason,
        urgency,
    }
}

fn drone_suggestion(
    mission: &Mission,
    drone: &Drone,
    reason: String,
    urgency: Urgency,
) -> ReassignmentSuggestion {
    ReassignmentSuggestion {
        mission_id: mission.id.clone(),
        current_pilot: mission.assigned_pilot.clone(),
        suggested_pilot: None,
        current_drone: mission.assigned_drone.clone(),
        suggested_drone: Some(drone.id.clone()),
        reason,
        urgency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PilotStatus, Severity, WeatherRating};
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    /// P1 is double-booked on M1/M2; P2..P4 are free with varying experience.
    fn double_booked_fleet() -> Fleet {
        Fleet::new(
            vec![
                Pilot::new("P1").with_name("Busy").with_assignment("M1"),
                Pilot::new("P2").with_name("Junior").with_experience(100.0),
                Pilot::new("P3").with_name("Senior").with_experience(900.0),
                Pilot::new("P4").with_name("Mid").with_experience(400.0),
                Pilot::new("P5").with_name("Away").with_experience(5000.0).with_status(PilotStatus::OnLeave),
            ],
            vec![],
            vec![
                Mission::new("M1", d(1), d(10)).with_pilot("P1").with_project("Alpha"),
                Mission::new("M2", d(8), d(15)).with_pilot("P1").with_project("Beta"),
            ],
        )
        .unwrap()
        .with_as_of(d(1))
    }

    #[test]
    fn test_pilot_alternatives_by_experience() {
        let fleet = double_booked_fleet();
        let coord = ReassignmentCoordinator::default();
        let m = fleet.mission("M1").unwrap();
        let ids: Vec<&str> = coord
            .pilot_alternatives(&fleet, m, 3)
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["P3", "P4", "P2"]);
    }

    #[test]
    fn test_suggest_for_double_booking() {
        let fleet = double_booked_fleet();
        let coord = ReassignmentCoordinator::default();

        let s = coord.suggest(&fleet, "M1", 2);
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].suggested_pilot.as_deref(), Some("P3"));
        assert_eq!(s[0].current_pilot.as_deref(), Some("P1"));
        assert_eq!(s[0].urgency, Urgency::High);
        assert!(s[0].suggested_drone.is_none());
        assert!(s[0].reason.contains("Senior"));

        assert_eq!(coord.suggest_default(&fleet, "M1").len(), 3);
        assert!(coord.suggest(&fleet, "NOPE", 3).is_empty());
    }

    #[test]
    fn test_maintenance_suggests_cheapest_drones() {
        let fleet = Fleet::new(
            vec![],
            vec![
                Drone::new("D1").with_model("Old").with_assignment("M1").with_maintenance_due(d(1)),
                Drone::new("D2").with_model("Pricey").with_daily_rate(300.0),
                Drone::new("D3").with_model("Cheap").with_daily_rate(100.0),
                Drone::new("D4").with_model("Busy").with_daily_rate(50.0).with_assignment("M9"),
            ],
            vec![Mission::new("M1", d(5), d(6)).with_drone("D1")],
        )
        .unwrap()
        .with_as_of(d(3));
        let coord = ReassignmentCoordinator::default();

        let s = coord.suggest(&fleet, "M1", 3);
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].suggested_drone.as_deref(), Some("D3"));
        assert_eq!(s[1].suggested_drone.as_deref(), Some("D2"));
        assert!(s.iter().all(|x| x.urgency == Urgency::Critical));
    }

    #[test]
    fn test_weather_risk_suggests_rated_drones() {
        let fleet = Fleet::new(
            vec![],
            vec![
                Drone::new("D1").with_assignment("M1"),
                Drone::new("D2").with_weather_rating(WeatherRating::Ip43).with_daily_rate(10.0),
                Drone::new("D3").with_weather_rating(WeatherRating::Ip45).with_daily_rate(20.0),
            ],
            vec![Mission::new("M1", d(1), d(2)).with_drone("D1").with_weather("Stormy")],
        )
        .unwrap()
        .with_as_of(d(1));
        let coord = ReassignmentCoordinator::default();

        let s = coord.suggest(&fleet, "M1", 3);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].suggested_drone.as_deref(), Some("D3"));
        assert_eq!(s[0].urgency, Urgency::High);
    }

    #[test]
    fn test_budget_and_location_produce_no_suggestions() {
        let fleet = Fleet::new(
            vec![Pilot::new("P1").with_assignment("M1").with_hourly_rate(500.0).with_location("A"), Pilot::new("P2")],
            vec![],
            vec![Mission::new("M1", d(1), d(2)).with_pilot("P1").with_location("B").with_budget(10.0)],
        )
        .unwrap();
        let coord = ReassignmentCoordinator::default();
        assert!(coord.suggest(&fleet, "M1", 3).is_empty());
    }

    #[test]
    fn test_first_conflict_suggestions_take_priority() {
        // Skill gap (pilot) is found before weather risk (drone).
        let fleet = Fleet::new(
            vec![
                Pilot::new("P1").with_assignment("M1"),
                Pilot::new("P2").with_skill("Thermal"),
            ],
            vec![
                Drone::new("D1").with_assignment("M1").with_capability("Thermal"),
                Drone::new("D2").with_capability("Thermal").with_weather_rating(WeatherRating::Ip42),
            ],
            vec![Mission::new("M1", d(1), d(2))
                .with_pilot("P1")
                .with_drone("D1")
                .with_required_skill("Thermal")
                .with_weather("Rainy")],
        )
        .unwrap()
        .with_as_of(d(1));
        let coord = ReassignmentCoordinator::default();

        let all = coord.suggest(&fleet, "M1", 5);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].suggested_pilot.as_deref(), Some("P2"));
        assert_eq!(all[1].suggested_drone.as_deref(), Some("D2"));

        let one = coord.suggest(&fleet, "M1", 1);
        assert_eq!(one.len(), 1);
        assert!(one[0].changes_pilot());
    }

    #[test]
    fn test_apply_reassignment_both() {
        let mut fleet = Fleet::new(
            vec![Pilot::new("P1")],
            vec![Drone::new("D1")],
            vec![Mission::new("M1", d(1), d(2))],
        )
        .unwrap();
        let coord = ReassignmentCoordinator::default();

        assert!(coord.apply_reassignment(&mut fleet, "M1", Some("P1"), Some("D1")));
        let m = fleet.mission("M1").unwrap();
        assert_eq!(m.assigned_pilot.as_deref(), Some("P1"));
        assert_eq!(m.assigned_drone.as_deref(), Some("D1"));
    }

    #[test]
    fn test_apply_reassignment_is_not_atomic() {
        let mut fleet = Fleet::new(
            vec![Pilot::new("P1")],
            vec![],
            vec![Mission::new("M1", d(1), d(2))],
        )
        .unwrap();
        let coord = ReassignmentCoordinator::default();

        assert!(!coord.apply_reassignment(&mut fleet, "M1", Some("P1"), Some("D404")));
        // The pilot step stays applied.
        assert_eq!(fleet.mission("M1").unwrap().assigned_pilot.as_deref(), Some("P1"));
        assert_eq!(fleet.pilot("P1").unwrap().current_assignment.as_deref(), Some("M1"));
    }

    #[test]
    fn test_apply_reassignment_edge_cases() {
        let mut fleet = Fleet::new(vec![Pilot::new("P1")], vec![], vec![Mission::new("M1", d(1), d(2))]).unwrap();
        let coord = ReassignmentCoordinator::default();

        assert!(!coord.apply_reassignment(&mut fleet, "M9", Some("P1"), None));
        // Nothing requested is vacuously successful.
        assert!(coord.apply_reassignment(&mut fleet, "M1", None, Some("")));
        assert!(fleet.mission("M1").unwrap().assigned_pilot.is_none());
    }

    #[test]
    fn test_priority_reassignments() {
        let fleet = Fleet::new(
            vec![
                Pilot::new("P1").with_assignment("M1"),
                Pilot::new("P2").with_experience(10.0),
                Pilot::new("P3").with_experience(20.0),
                Pilot::new("P4").with_experience(30.0),
                Pilot::new("P5").with_location("Far"),
            ],
            vec![],
            vec![
                Mission::new("M1", d(1), d(10)).with_pilot("P1").with_project("Alpha"),
                Mission::new("M2", d(8), d(15)).with_pilot("P1").with_project("Beta"),
                // Location info only: never a priority.
                Mission::new("M3", d(1), d(2)).with_pilot("P5").with_project("Gamma"),
            ],
        )
        .unwrap();
        let mut coord = ReassignmentCoordinator::default();

        let list = coord.priority_reassignments(&fleet);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].mission_id, "M1");
        assert_eq!(list[0].project_name, "Alpha");
        assert_eq!(list[0].conflict_count, 1);
        assert_eq!(list[0].conflict_types, vec![ConflictType::DoubleBooking]);
        assert_eq!(list[0].suggestions.len(), 2);
        assert_eq!(list[0].suggestions[0].suggested_pilot.as_deref(), Some("P4"));
        assert_eq!(list[1].mission_id, "M2");

        assert!(!coord.detector().by_severity(Severity::Info).is_empty());
    }
}
