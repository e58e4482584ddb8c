//! Conflict detection over the whole schedule.
//!
//! For every mission, four independent checks run in a fixed order:
//!
//! | Check | Type | Severity |
//! |-------|------|----------|
//! | Pilot double-booking | `double_booking` | Critical |
//! | Pilot skill gap | `skill_mismatch` | Warning |
//! | Pilot certification gap | `skill_mismatch` | Critical |
//! | Drone double-booking | `double_booking` | Critical |
//! | Drone maintenance overdue | `maintenance_conflict` | Critical |
//! | Drone capability gap | `equipment_mismatch` | Warning |
//! | Drone weather tier | `weather_risk` | Warning |
//! | Budget | `budget_overrun` | Warning |
//! | Location | `location_mismatch` | Info |
//!
//! Double-booking is reported from each mission's own scan, so an
//! overlapping pair yields one conflict on each side.
//!
//! # Complexity
//! O(n²) in missions for the double-booking scans.

mod checks;

use tracing::info;

use crate::config::EngineConfig;
use crate::fleet::Fleet;
use crate::models::{Conflict, Severity};

/// Scans the fleet for conflicts and keeps the latest pass for filtering.
#[derive(Debug, Clone)]
pub struct ConflictDetector {
    workday_hours: f64,
    conflicts: Vec<Conflict>,
}

impl ConflictDetector {
    /// Creates a detector with no results yet.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            workday_hours: config.workday_hours,
            conflicts: Vec::new(),
        }
    }

    /// Runs every check on every mission, replacing the previous results.
    ///
    /// Not incremental: two calls over unchanged state return identical
    /// lists, ids included.
    pub fn detect_all(&mut self, fleet: &Fleet) -> &[Conflict] {
        self.conflicts = self.scan(fleet);

        info!(
            total = self.conflicts.len(),
            critical = self.count(Severity::Critical),
            warning = self.count(Severity::Warning),
            info = self.count(Severity::Info),
            "conflict detection pass complete"
        );
        &self.conflicts
    }

    /// Same pass as [`detect_all`](Self::detect_all) without storing or
    /// logging the results.
    pub fn scan(&self, fleet: &Fleet) -> Vec<Conflict> {
        let mut found = Vec::new();
        for mission in fleet.missions() {
            checks::check_pilot(fleet, mission, &mut found);
            checks::check_drone(fleet, mission, &mut found);
            checks::check_budget(fleet, mission, self.workday_hours, &mut found);
            checks::check_location(fleet, mission, &mut found);
        }
        stamp_ids(found)
    }

    /// Pilot and drone checks for one mission only (no budget, no location).
    ///
    /// Pure: the stored results are left alone. Unknown mission → empty.
    pub fn resource_conflicts(&self, fleet: &Fleet, mission_id: &str) -> Vec<Conflict> {
        let Some(mission) = fleet.mission(mission_id) else {
            return Vec::new();
        };
        let mut found = Vec::new();
        checks::check_pilot(fleet, mission, &mut found);
        checks::check_drone(fleet, mission, &mut found);
        stamp_ids(found)
    }

    /// Results of the latest pass.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Latest results at one severity.
    pub fn by_severity(&self, severity: Severity) -> Vec<&Conflict> {
        self.conflicts
            .iter()
            .filter(|c| c.severity == severity)
            .collect()
    }

    /// Latest results for one mission.
    pub fn by_mission(&self, mission_id: &str) -> Vec<&Conflict> {
        self.conflicts
            .iter()
            .filter(|c| c.mission_id == mission_id)
            .collect()
    }

    /// Latest critical results.
    pub fn critical_only(&self) -> Vec<&Conflict> {
        self.by_severity(Severity::Critical)
    }

    fn count(&self, severity: Severity) -> usize {
        self.conflicts
            .iter()
            .filter(|c| c.severity == severity)
            .count()
    }
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

fn stamp_ids(conflicts: Vec<Conflict>) -> Vec<Conflict> {
    conflicts
        .into_iter()
        .enumerate()
        .map(|(i, c)| c.with_id(format!("CF-{:04}", i + 1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConflictType, Drone, Mission, Pilot, WeatherRating};
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn of_type<'a>(conflicts: &'a [Conflict], t: ConflictType) -> Vec<&'a Conflict> {
        conflicts.iter().filter(|c| c.conflict_type == t).collect()
    }

    #[test]
    fn test_pilot_double_booking_reported_per_mission() {
        let fleet = Fleet::new(
            vec![Pilot::new("P").with_name("Rohan")],
            vec![],
            vec![
                Mission::new("M1", d(1), d(10)).with_pilot("P").with_budget(1e9),
                Mission::new("M2", d(8), d(15)).with_pilot("P").with_budget(1e9),
            ],
        )
        .unwrap();

        let mut det = ConflictDetector::default();
        let conflicts = det.detect_all(&fleet).to_vec();
        let doubles = of_type(&conflicts, ConflictType::DoubleBooking);

        assert_eq!(doubles.len(), 2);
        assert!(doubles.iter().all(|c| c.severity == Severity::Critical));
        assert!(doubles.iter().all(|c| c.pilot_id.as_deref() == Some("P")));
        assert_eq!(doubles[0].mission_id, "M1");
        assert_eq!(doubles[1].mission_id, "M2");
    }

    #[test]
    fn test_disjoint_missions_not_double_booked() {
        let fleet = Fleet::new(
            vec![Pilot::new("P")],
            vec![],
            vec![
                Mission::new("M1", d(1), d(7)).with_pilot("P"),
                Mission::new("M2", d(8), d(15)).with_pilot("P"),
            ],
        )
        .unwrap();
        let mut det = ConflictDetector::default();
        assert!(of_type(det.detect_all(&fleet), ConflictType::DoubleBooking).is_empty());
    }

    #[test]
    fn test_skill_and_certification_gaps() {
        let fleet = Fleet::new(
            vec![Pilot::new("P").with_name("Meera").with_skill("Mapping")],
            vec![],
            vec![Mission::new("M1", d(1), d(2))
                .with_pilot("P")
                .with_required_skill("Mapping")
                .with_required_skill("Thermal")
                .with_required_certification("Night Ops")],
        )
        .unwrap();
        let mut det = ConflictDetector::default();
        let conflicts = det.detect_all(&fleet).to_vec();
        let gaps = of_type(&conflicts, ConflictType::SkillMismatch);

        assert_eq!(gaps.len(), 2);
        assert_eq!(gaps[0].severity, Severity::Warning);
        assert!(gaps[0].description.contains("Thermal"));
        assert!(!gaps[0].description.contains("Mapping"));
        assert_eq!(gaps[1].severity, Severity::Critical);
        assert!(gaps[1].description.contains("Night Ops"));
    }

    #[test]
    fn test_drone_checks() {
        let fleet = Fleet::new(
            vec![],
            vec![Drone::new("D1")
                .with_model("Mavic")
                .with_maintenance_due(d(1))
                .with_weather_rating(WeatherRating::Ip43)],
            vec![Mission::new("M1", d(5), d(6))
                .with_drone("D1")
                .with_required_skill("LiDAR")
                .with_weather("Stormy")
                .with_budget(1e9)],
        )
        .unwrap()
        .with_as_of(d(2));

        let mut det = ConflictDetector::default();
        let conflicts = det.detect_all(&fleet).to_vec();

        let maint = of_type(&conflicts, ConflictType::MaintenanceConflict);
        assert_eq!(maint.len(), 1);
        assert_eq!(maint[0].severity, Severity::Critical);

        let equip = of_type(&conflicts, ConflictType::EquipmentMismatch);
        assert_eq!(equip.len(), 1);
        assert_eq!(equip[0].severity, Severity::Warning);
        assert!(equip[0].description.contains("LiDAR"));

        let weather = of_type(&conflicts, ConflictType::WeatherRisk);
        assert_eq!(weather.len(), 1);
        assert!(weather[0].description.contains("IP43"));
        assert!(weather[0].description.contains("Stormy"));
    }

    #[test]
    fn test_drone_double_booking() {
        let fleet = Fleet::new(
            vec![],
            vec![Drone::new("D1")],
            vec![
                Mission::new("M1", d(1), d(5)).with_drone("D1"),
                Mission::new("M2", d(5), d(9)).with_drone("D1"),
            ],
        )
        .unwrap()
        .with_as_of(d(1));
        let mut det = ConflictDetector::default();
        let conflicts = det.detect_all(&fleet).to_vec();
        let doubles = of_type(&conflicts, ConflictType::DoubleBooking);
        assert_eq!(doubles.len(), 2);
        assert!(doubles.iter().all(|c| c.drone_id.as_deref() == Some("D1")));
    }

    #[test]
    fn test_budget_overrun_cites_overage() {
        // Pilot: 5 days * 8 h * 45 = 1800. Drone: 5 days * 80 = 400. Budget 2000.
        let fleet = Fleet::new(
            vec![Pilot::new("P").with_hourly_rate(45.0)],
            vec![Drone::new("D").with_daily_rate(80.0)],
            vec![Mission::new("M1", d(1), d(5))
                .with_pilot("P")
                .with_drone("D")
                .with_budget(2000.0)],
        )
        .unwrap()
        .with_as_of(d(1));
        let mut det = ConflictDetector::default();
        let conflicts = det.detect_all(&fleet).to_vec();
        let over = of_type(&conflicts, ConflictType::BudgetOverrun);

        assert_eq!(over.len(), 1);
        assert_eq!(over[0].severity, Severity::Warning);
        assert!(over[0].description.contains("$200.00"));
    }

    #[test]
    fn test_budget_at_ceiling_is_fine() {
        let fleet = Fleet::new(
            vec![Pilot::new("P").with_hourly_rate(50.0)],
            vec![],
            vec![Mission::new("M1", d(1), d(5)).with_pilot("P").with_budget(2000.0)],
        )
        .unwrap();
        let mut det = ConflictDetector::default();
        assert!(of_type(det.detect_all(&fleet), ConflictType::BudgetOverrun).is_empty());
    }

    #[test]
    fn test_location_mismatch_combined() {
        let fleet = Fleet::new(
            vec![Pilot::new("P").with_name("Asha").with_location("Delhi")],
            vec![Drone::new("D").with_model("M300").with_location("Mumbai")],
            vec![Mission::new("M1", d(1), d(2))
                .with_location("Pune")
                .with_pilot("P")
                .with_drone("D")],
        )
        .unwrap()
        .with_as_of(d(1));
        let mut det = ConflictDetector::default();
        let conflicts = det.detect_all(&fleet).to_vec();
        let loc = of_type(&conflicts, ConflictType::LocationMismatch);

        assert_eq!(loc.len(), 1);
        assert_eq!(loc[0].severity, Severity::Info);
        assert!(loc[0].description.contains("Pilot Asha at Delhi"));
        assert!(loc[0].description.contains("Drone M300 at Mumbai"));
    }

    #[test]
    fn test_detect_all_is_idempotent() {
        let fleet = Fleet::new(
            vec![Pilot::new("P").with_hourly_rate(100.0)],
            vec![],
            vec![
                Mission::new("M1", d(1), d(10)).with_pilot("P"),
                Mission::new("M2", d(8), d(15)).with_pilot("P"),
            ],
        )
        .unwrap();
        let mut det = ConflictDetector::default();
        let first = det.detect_all(&fleet).to_vec();
        let second = det.detect_all(&fleet).to_vec();
        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert_eq!(first[0].id, "CF-0001");
    }

    #[test]
    fn test_filters() {
        let fleet = Fleet::new(
            vec![Pilot::new("P").with_location("X")],
            vec![],
            vec![
                Mission::new("M1", d(1), d(10)).with_pilot("P").with_location("X"),
                Mission::new("M2", d(8), d(15)).with_pilot("P").with_location("Y"),
            ],
        )
        .unwrap();
        let mut det = ConflictDetector::default();
        det.detect_all(&fleet);

        assert_eq!(det.critical_only().len(), 2);
        assert_eq!(det.by_severity(Severity::Info).len(), 1);
        assert_eq!(det.by_mission("M2").len(), 2);
        assert!(det.by_mission("M9").is_empty());
    }

    #[test]
    fn test_unknown_assigned_ids_skipped() {
        let fleet = Fleet::new(
            vec![],
            vec![],
            vec![Mission::new("M1", d(1), d(2)).with_pilot("GHOST").with_drone("GHOST")],
        )
        .unwrap();
        let mut det = ConflictDetector::default();
        assert!(det.detect_all(&fleet).is_empty());
    }

    #[test]
    fn test_resource_conflicts_skip_budget_and_location() {
        let fleet = Fleet::new(
            vec![Pilot::new("P").with_hourly_rate(1000.0).with_location("A")],
            vec![],
            vec![Mission::new("M1", d(1), d(2))
                .with_pilot("P")
                .with_location("B")
                .with_required_certification("DGCA")],
        )
        .unwrap();
        let det = ConflictDetector::default();
        let found = det.resource_conflicts(&fleet, "M1");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].conflict_type, ConflictType::SkillMismatch);
        assert!(det.conflicts().is_empty());
        assert!(det.resource_conflicts(&fleet, "M9").is_empty());
    }
}
