//! Hard pass/fail gates a candidate must clear before it is scored.
//!
//! Shared by the matcher and the reassignment coordinator so both apply
//! the same rules.

use chrono::NaiveDate;

use crate::models::{Drone, Mission, Pilot};

/// A pilot is eligible iff:
/// - status is `Available`,
/// - the availability window (if any) covers the mission range,
/// - every required skill is held,
/// - every required certification is held.
///
/// Pilots already holding another assignment stay eligible; scoring
/// penalizes them instead.
pub fn pilot_eligible(pilot: &Pilot, mission: &Mission) -> bool {
    pilot.is_available_for(mission.start_date, mission.end_date)
        && pilot.has_skills(&mission.required_skills)
        && pilot.has_certifications(&mission.required_certifications)
}

/// A drone is eligible iff:
/// - it is `Active` and unassigned,
/// - maintenance is not overdue as of `today`,
/// - every required capability is held,
/// - its weather tier is admitted for the forecast.
pub fn drone_eligible(drone: &Drone, mission: &Mission, today: NaiveDate) -> bool {
    drone.is_available()
        && !drone.is_maintenance_due(today)
        && drone.has_capabilities(&mission.required_skills)
        && drone.can_fly_in(&mission.weather_forecast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DroneStatus, PilotStatus, WeatherRating};

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    fn mission() -> Mission {
        Mission::new("M1", d(1, 1), d(1, 5))
            .with_required_skill("Thermal")
            .with_required_certification("DGCA")
            .with_weather("Rainy")
    }

    #[test]
    fn test_pilot_gates() {
        let m = mission();
        let ok = Pilot::new("P1")
            .with_skill("Thermal")
            .with_certification("DGCA");
        assert!(pilot_eligible(&ok, &m));
        assert!(pilot_eligible(&ok.clone().with_assignment("M9"), &m));

        assert!(!pilot_eligible(&ok.clone().with_status(PilotStatus::Unavailable), &m));
        assert!(!pilot_eligible(&ok.clone().with_window(d(1, 2), d(1, 31)), &m));
        assert!(!pilot_eligible(&Pilot::new("P2").with_skill("Thermal"), &m));
        assert!(!pilot_eligible(&Pilot::new("P3").with_certification("DGCA"), &m));
    }

    #[test]
    fn test_drone_gates() {
        let m = mission();
        let today = d(1, 1);
        let ok = Drone::new("D1")
            .with_capability("Thermal")
            .with_weather_rating(WeatherRating::Ip42);
        assert!(drone_eligible(&ok, &m, today));

        assert!(!drone_eligible(&ok.clone().with_assignment("M9"), &m, today));
        assert!(!drone_eligible(&ok.clone().with_status(DroneStatus::Maintenance), &m, today));
        let overdue = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert!(!drone_eligible(&ok.clone().with_maintenance_due(overdue), &m, today));
        assert!(drone_eligible(&ok.clone().with_maintenance_due(today), &m, today));
        assert!(!drone_eligible(&ok.clone().with_weather_rating(WeatherRating::Generic), &m, today));
        assert!(!drone_eligible(&Drone::new("D2").with_weather_rating(WeatherRating::Ip45), &m, today));
    }
}
